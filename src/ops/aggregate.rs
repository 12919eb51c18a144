//! Selection, ordering, numeric aggregation, reduction and joining.

use std::cmp::Ordering;
use std::fmt::Display;

use rand::Rng;

use crate::error::{CollectError, CollectResult};
use crate::types::{Collection, Key, Numeric};

impl<V> Collection<V> {
    /// First value by iteration order, or `None` when empty.
    pub fn first(&self) -> Option<&V> {
        self.entries.first().map(|(_, v)| v)
    }

    /// First value satisfying `pred`, or `None` when no entry matches.
    pub fn first_where<F>(&self, mut pred: F) -> Option<&V>
    where
        F: FnMut(&V, &Key) -> bool,
    {
        self.entries
            .iter()
            .find(|(k, v)| pred(v, k))
            .map(|(_, v)| v)
    }

    /// Last value by iteration order, or `None` when empty.
    pub fn last(&self) -> Option<&V> {
        self.entries.last().map(|(_, v)| v)
    }

    /// Last value satisfying `pred`, scanning from the end.
    ///
    /// This is the last entry for which `pred` is true, not the last entry before the
    /// predicate first fails.
    pub fn last_where<F>(&self, mut pred: F) -> Option<&V>
    where
        F: FnMut(&V, &Key) -> bool,
    {
        self.entries
            .iter()
            .rev()
            .find(|(k, v)| pred(v, k))
            .map(|(_, v)| v)
    }

    /// One value chosen uniformly at random.
    ///
    /// Fails with [`CollectError::Empty`] on an empty collection.
    pub fn random(&self) -> CollectResult<&V> {
        if self.entries.is_empty() {
            return Err(CollectError::Empty);
        }
        let index = rand::rng().random_range(0..self.entries.len());
        Ok(&self.entries[index].1)
    }

    /// Left-to-right fold with an explicit seed.
    pub fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        self.entries.iter().fold(init, |acc, (_, v)| f(acc, v))
    }

    /// Concatenate the display forms of all values with `sep` between each pair.
    pub fn join(&self, sep: &str) -> String
    where
        V: Display,
    {
        self.entries
            .iter()
            .map(|(_, v)| v.to_string())
            .collect::<Vec<_>>()
            .join(sep)
    }

    /// Like [`Collection::join`], but the final pair is joined with `final_sep`.
    pub fn join_final(&self, sep: &str, final_sep: &str) -> String
    where
        V: Display,
    {
        let parts: Vec<String> = self.entries.iter().map(|(_, v)| v.to_string()).collect();
        let Some((last, head)) = parts.split_last() else {
            return String::new();
        };
        if head.is_empty() {
            return last.clone();
        }
        format!("{}{}{}", head.join(sep), final_sep, last)
    }
}

impl<V: Clone> Collection<V> {
    /// Left-to-right fold seeded by the first value; folding starts at the second.
    ///
    /// Fails with [`CollectError::Empty`] on an empty collection.
    pub fn reduce<F>(&self, mut f: F) -> CollectResult<V>
    where
        F: FnMut(V, &V) -> V,
    {
        let mut iter = self.entries.iter();
        let (_, seed) = iter.next().ok_or(CollectError::Empty)?;
        let mut acc = seed.clone();
        for (_, v) in iter {
            acc = f(acc, v);
        }
        Ok(acc)
    }

    /// New collection with the same values in ascending natural order.
    ///
    /// Keys are not preserved: the result is densely repositioned in sorted order.
    pub fn sort(&self) -> Collection<V>
    where
        V: Ord,
    {
        let mut values = self.values();
        values.sort();
        Collection::from_values(values)
    }

    /// New collection with the same values in descending natural order.
    pub fn sort_desc(&self) -> Collection<V>
    where
        V: Ord,
    {
        self.sort_by(|a, b| b.cmp(a))
    }

    /// New collection sorted by a caller-supplied comparator, densely repositioned.
    pub fn sort_by<F>(&self, cmp: F) -> Collection<V>
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        let mut values = self.values();
        values.sort_by(cmp);
        Collection::from_values(values)
    }
}

impl<V: Numeric> Collection<V> {
    /// Sum of all values. The empty collection sums to the additive identity.
    pub fn sum(&self) -> V {
        self.entries.iter().fold(V::zero(), |acc, (_, v)| acc.add(*v))
    }

    /// Arithmetic mean (`sum / count`) as `f64`.
    ///
    /// Fails with [`CollectError::Empty`] on an empty collection.
    pub fn avg(&self) -> CollectResult<f64> {
        if self.entries.is_empty() {
            return Err(CollectError::Empty);
        }
        Ok(self.sum().to_f64() / self.entries.len() as f64)
    }

    /// Smallest value. Fails with [`CollectError::Empty`] on an empty collection.
    pub fn min(&self) -> CollectResult<V>
    where
        V: PartialOrd,
    {
        let mut best: Option<V> = None;
        for (_, v) in &self.entries {
            best = Some(match best {
                Some(b) if b <= *v => b,
                _ => *v,
            });
        }
        best.ok_or(CollectError::Empty)
    }

    /// Largest value. Fails with [`CollectError::Empty`] on an empty collection.
    pub fn max(&self) -> CollectResult<V>
    where
        V: PartialOrd,
    {
        let mut best: Option<V> = None;
        for (_, v) in &self.entries {
            best = Some(match best {
                Some(b) if b >= *v => b,
                _ => *v,
            });
        }
        best.ok_or(CollectError::Empty)
    }
}
