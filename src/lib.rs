//! `ordered-collect` is a small library for working with ordered key/value collections
//! through a chainable, immutable-by-default transformation pipeline.
//!
//! The central type is [`types::Collection`]: an ordered sequence of `(Key, V)` entries
//! where keys are either *positional* (dense integers assigned by insertion order) or
//! *associative* (arbitrary strings preserved from the input). Every transformation
//! borrows the receiver and returns a new, independently owned collection; only
//! [`types::Collection::push`], [`types::Collection::append`] and
//! [`types::Collection::pop`] mutate in place.
//!
//! ## Operation set
//!
//! - **Transformation**: `map`, `map_into`, `map_spread`, `flat_map`, `collapse`,
//!   `zip`, `concat`, `combine`
//! - **Filtering / grouping**: `filter`, `partition`, `group_by`, `group_by_field`,
//!   `contains`, `contains_where`
//! - **Slicing / windowing**: `slice`, `take`, `take_while`, `take_until`, `skip`,
//!   `skip_while`, `skip_until`, `chunk`
//! - **Selection / aggregation**: `first`, `last`, `random`, `sort`, `sort_desc`,
//!   `sum`, `avg`, `min`, `max`, `fold`, `reduce`, `join`
//!
//! ## Quick example: positional pipeline
//!
//! ```rust
//! use ordered_collect::Collection;
//!
//! let doubled = Collection::from_values([1, 2, 3]).map(|v| v * 2);
//! assert_eq!(doubled.values(), vec![2, 4, 6]);
//!
//! let chunks = Collection::from_values(1..=9).chunk(3)?;
//! assert_eq!(chunks.len(), 3);
//! assert_eq!(chunks.first().map(|c| c.values()), Some(vec![1, 2, 3]));
//! # Ok::<(), ordered_collect::CollectError>(())
//! ```
//!
//! ## Quick example: associative keys
//!
//! Keys from mapping-style input survive filtering untouched; positional results are
//! reindexed densely.
//!
//! ```rust
//! use ordered_collect::{Collection, Key};
//!
//! let scores = Collection::from_entries([("Adrian", 100), ("Haikal", 80), ("Chandra", 90)]);
//! let (passed, failed) = scores.partition(|score, _key| *score >= 90);
//!
//! assert_eq!(passed.keys(), vec![Key::from("Adrian"), Key::from("Chandra")]);
//! assert_eq!(failed.values(), vec![80]);
//! ```
//!
//! ## Constructing caller-defined elements
//!
//! The mapping operations can build opaque caller types through the
//! [`types::FromElement`] factory; the library never inspects the constructed type.
//!
//! ```rust
//! use ordered_collect::{CollectError, CollectResult, Collection, FromElement};
//!
//! #[derive(Debug, PartialEq)]
//! struct Person { name: String }
//!
//! impl FromElement<String> for Person {
//!     fn from_single(value: String) -> Self {
//!         Person { name: value }
//!     }
//!     fn from_spread(values: &[String]) -> CollectResult<Self> {
//!         match values {
//!             [first, last] => Ok(Person { name: format!("{first} {last}") }),
//!             _ => Err(CollectError::Arity { index: 0, expected: 2, found: values.len() }),
//!         }
//!     }
//! }
//!
//! let people: Collection<Person> =
//!     Collection::from_values(["Adrian".to_string()]).map_into();
//! assert_eq!(people.first(), Some(&Person { name: "Adrian".to_string() }));
//! ```
//!
//! ## Modules
//!
//! - [`types`]: the [`types::Key`] / [`types::Collection`] data model and collaborator
//!   traits ([`types::FromElement`], [`types::FieldAccess`], [`types::Numeric`])
//! - [`error`]: the error enum shared by all fallible operations
//!
//! The operation families themselves are inherent methods on
//! [`types::Collection`], grouped internally by concern (transform / filter / slice /
//! aggregate).

pub mod error;
mod ops;
pub mod types;

pub use error::{CollectError, CollectResult};
pub use types::{Collection, FieldAccess, FromElement, Key, Numeric};
