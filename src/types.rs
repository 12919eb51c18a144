//! Core data model for keyed collections.
//!
//! The central type is [`Collection`], an ordered sequence of `(Key, V)` entries. Keys are
//! either *positional* ([`Key::Index`], dense integers assigned by insertion order) or
//! *associative* ([`Key::Name`], arbitrary strings preserved from the input structure).
//!
//! Transformations always return a new collection; the only mutating operations are
//! [`Collection::push`], [`Collection::append`] and [`Collection::pop`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CollectError, CollectResult};

/// Entry key: a dense positional index or a preserved associative name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    /// Positional key, assigned densely (`0..n-1`) by construction or reindexing.
    Index(usize),
    /// Associative key, preserved from the original input.
    Name(String),
}

impl Key {
    /// Returns the positional index if this is an [`Key::Index`] key.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// Returns the name if this is a [`Key::Name`] key.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name.as_str()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

/// Constructible-element collaborator: builds one `Self` from collection values.
///
/// This is the only interface through which the mapping operations
/// ([`Collection::map_into`], [`Collection::map_into_spread`]) construct caller-defined
/// element types. The core never inspects `Self`'s fields; equality between constructed
/// values is the implementor's concern.
pub trait FromElement<V>: Sized {
    /// Build one element from a single value.
    fn from_single(value: V) -> Self;

    /// Build one element from an ordered run of values.
    ///
    /// Implementations should return [`CollectError::Arity`] when `values` does not have
    /// the shape they expect (the caller will fill in the element index).
    fn from_spread(values: &[V]) -> CollectResult<Self>;
}

/// Field access for structured elements, used by [`Collection::group_by_field`].
///
/// Returning `None` for an unknown `name` makes the grouping fail with
/// [`CollectError::MissingField`].
pub trait FieldAccess {
    /// Look up a named field as a group key.
    fn field(&self, name: &str) -> Option<Key>;
}

/// Minimal numeric capability backing the aggregations (`sum`, `avg`, `min`, `max`).
pub trait Numeric: Copy {
    /// Additive identity.
    fn zero() -> Self;
    /// Addition.
    fn add(self, other: Self) -> Self;
    /// Lossy conversion to `f64`, used by `avg`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    (int: $($t:ty),*) => {$(
        impl Numeric for $t {
            fn zero() -> Self { 0 }
            fn add(self, other: Self) -> Self { self + other }
            fn to_f64(self) -> f64 { self as f64 }
        }
    )*};
    (float: $($t:ty),*) => {$(
        impl Numeric for $t {
            fn zero() -> Self { 0.0 }
            fn add(self, other: Self) -> Self { self + other }
            fn to_f64(self) -> f64 { self as f64 }
        }
    )*};
}

impl_numeric!(int: i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);
impl_numeric!(float: f32, f64);

/// Ordered in-memory collection of keyed values.
///
/// A `Collection<V>` holds `(Key, V)` entries in insertion order. It is
/// immutable-by-default: every transformation borrows the receiver and returns a new,
/// independently owned collection. Only [`Collection::push`],
/// [`Collection::append`] and [`Collection::pop`] mutate in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection<V> {
    /// Ordered entry storage.
    pub(crate) entries: Vec<(Key, V)>,
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Collection<V> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a collection from values, assigning dense positional keys `0..n-1`.
    pub fn from_values(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            entries: values
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::Index(i), v))
                .collect(),
        }
    }

    /// Create a collection from explicit `(key, value)` entries, preserving the given
    /// keys and their order.
    pub fn from_entries<K: Into<Key>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if the collection has at least one entry.
    pub fn is_not_empty(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Iterate entries as `(&Key, &V)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Look up a value by key.
    pub fn get(&self, key: impl Into<Key>) -> Option<&V> {
        let key = key.into();
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Append one value with the next dense positional key.
    ///
    /// The new index continues from the current maximum positional index; associative
    /// keys do not participate in the numbering.
    pub fn push(&mut self, value: V) {
        let index = self.next_index();
        self.entries.push((Key::Index(index), value));
    }

    /// Append several values in order, numbering each as [`Collection::push`] does.
    pub fn append(&mut self, values: impl IntoIterator<Item = V>) {
        for value in values {
            self.push(value);
        }
    }

    /// Remove and return the last entry's value by iteration order.
    ///
    /// Fails with [`CollectError::Empty`] on an empty collection, leaving the receiver
    /// unchanged.
    pub fn pop(&mut self) -> CollectResult<V> {
        match self.entries.pop() {
            Some((_, value)) => Ok(value),
            None => Err(CollectError::Empty),
        }
    }

    fn next_index(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|(k, _)| k.as_index())
            .max()
            .map_or(0, |max| max + 1)
    }
}

impl<V: Clone> Collection<V> {
    /// Snapshot of the entries as plain `(Key, V)` pairs.
    ///
    /// The returned vector is an owned copy; it does not alias internal storage.
    pub fn all(&self) -> Vec<(Key, V)> {
        self.entries.clone()
    }

    /// Snapshot of the values in insertion order.
    pub fn values(&self) -> Vec<V> {
        self.entries.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Snapshot of the keys in insertion order.
    pub fn keys(&self) -> Vec<Key> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }
}

impl<V: PartialEq> Collection<V> {
    /// Order- and key-insensitive value equality (multiset comparison).
    ///
    /// The derived `PartialEq` compares entries in order; this method instead checks that
    /// both collections hold the same values with the same multiplicities, in any order.
    /// Ordering sensitivity is a per-comparison choice, not a property of the container.
    pub fn eq_values_any_order(&self, other: &Collection<V>) -> bool {
        if self.entries.len() != other.entries.len() {
            return false;
        }
        let mut used = vec![false; other.entries.len()];
        for (_, value) in &self.entries {
            let found = other
                .entries
                .iter()
                .enumerate()
                .find(|(i, (_, other_value))| !used[*i] && other_value == value);
            match found {
                Some((i, _)) => used[i] = true,
                None => return false,
            }
        }
        true
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = (Key, V);
    type IntoIter = std::vec::IntoIter<(Key, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = &'a (Key, V);
    type IntoIter = std::slice::Iter<'a, (Key, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<V> FromIterator<V> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<V> FromIterator<(Key, V)> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = (Key, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<V> FromIterator<(String, V)> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<'a, V> FromIterator<(&'a str, V)> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = (&'a str, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<V> From<Vec<V>> for Collection<V> {
    fn from(values: Vec<V>) -> Self {
        Self::from_values(values)
    }
}

impl<V, const N: usize> From<[V; N]> for Collection<V> {
    fn from(values: [V; N]) -> Self {
        Self::from_values(values)
    }
}

impl<V> Extend<V> for Collection<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, values: I) {
        self.append(values);
    }
}
