//! The chainable operation set over [`crate::types::Collection`].
//!
//! Every operation here borrows the receiver and returns a new, independently owned
//! collection (or a scalar); nothing in this module mutates. The operation families:
//!
//! - [`transform`]: map family, flattening, zip/concat/combine
//! - [`filter`]: filtering, partitioning, grouping, membership
//! - [`slice`]: positional slicing and windowing
//! - [`aggregate`]: selection, ordering, numeric aggregation, reduction, joining
//!
//! ## Example: filter → map → sum
//!
//! ```rust
//! use ordered_collect::Collection;
//!
//! let scores = Collection::from_values([40, 95, 72, 88]);
//! let passed = scores.filter(|score, _key| *score >= 72);
//! let curved = passed.map(|score| score + 2);
//! assert_eq!(curved.values(), vec![97, 74, 90]);
//! assert_eq!(curved.sum(), 261);
//! ```

mod aggregate;
mod filter;
mod slice;
mod transform;
