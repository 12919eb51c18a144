//! Positional slicing and windowing.

use crate::error::{CollectError, CollectResult};
use crate::types::{Collection, Key};

impl<V: Clone> Collection<V> {
    /// Entries starting at `offset` for `length` elements (`None` = to the end).
    ///
    /// A negative `offset` counts from the end. Out-of-range offsets yield an empty
    /// collection, never an error. Keys are preserved.
    pub fn slice(&self, offset: isize, length: Option<usize>) -> Collection<V> {
        let len = self.entries.len();
        let start = if offset >= 0 {
            (offset as usize).min(len)
        } else {
            len.saturating_sub(offset.unsigned_abs())
        };
        let end = match length {
            Some(n) => start.saturating_add(n).min(len),
            None => len,
        };
        Collection {
            entries: self.entries[start..end].to_vec(),
        }
    }

    /// First `n` entries; a negative `n` means the last `|n|` entries.
    ///
    /// Requesting more than the length returns the whole collection. Keys are
    /// preserved.
    pub fn take(&self, n: isize) -> Collection<V> {
        if n >= 0 {
            self.slice(0, Some(n as usize))
        } else {
            let count = n.unsigned_abs().min(self.entries.len());
            self.slice(-(count as isize), None)
        }
    }

    /// Longest prefix of entries for which `pred` holds.
    ///
    /// Short-circuits: the predicate is not evaluated past the first failing entry.
    pub fn take_while<F>(&self, mut pred: F) -> Collection<V>
    where
        F: FnMut(&V, &Key) -> bool,
    {
        let mut out = Vec::new();
        for (k, v) in &self.entries {
            if !pred(v, k) {
                break;
            }
            out.push((k.clone(), v.clone()));
        }
        Collection { entries: out }
    }

    /// Prefix of entries before `pred` first holds (exclusive of the stopping entry).
    ///
    /// Short-circuits like [`Collection::take_while`].
    pub fn take_until<F>(&self, mut pred: F) -> Collection<V>
    where
        F: FnMut(&V, &Key) -> bool,
    {
        self.take_while(|v, k| !pred(v, k))
    }

    /// Drop the first `n` entries. Keys are preserved.
    pub fn skip(&self, n: usize) -> Collection<V> {
        Collection {
            entries: self.entries.iter().skip(n).cloned().collect(),
        }
    }

    /// Drop the prefix for which `pred` holds; the retained suffix begins at the first
    /// entry where `pred` fails, inclusive.
    pub fn skip_while<F>(&self, mut pred: F) -> Collection<V>
    where
        F: FnMut(&V, &Key) -> bool,
    {
        let mut out = Vec::new();
        let mut skipping = true;
        for (k, v) in &self.entries {
            if skipping && pred(v, k) {
                continue;
            }
            skipping = false;
            out.push((k.clone(), v.clone()));
        }
        Collection { entries: out }
    }

    /// Drop the prefix before `pred` first holds; the retained suffix begins at the
    /// first matching entry, inclusive.
    pub fn skip_until<F>(&self, mut pred: F) -> Collection<V>
    where
        F: FnMut(&V, &Key) -> bool,
    {
        self.skip_while(|v, k| !pred(v, k))
    }

    /// Partition into consecutive sub-collections of at most `size` entries.
    ///
    /// The last chunk may be shorter. Chunks are fresh, densely positional
    /// collections; the outer collection is positional too. Fails with
    /// [`CollectError::InvalidArgument`] when `size` is zero.
    pub fn chunk(&self, size: usize) -> CollectResult<Collection<Collection<V>>> {
        if size == 0 {
            return Err(CollectError::InvalidArgument {
                message: "chunk size must be greater than zero".to_string(),
            });
        }
        Ok(Collection::from_values(self.entries.chunks(size).map(
            |chunk| Collection::from_values(chunk.iter().map(|(_, v)| v.clone())),
        )))
    }
}
