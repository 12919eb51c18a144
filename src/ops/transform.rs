//! Mapping, flattening and pairing operations.

use crate::error::{CollectError, CollectResult};
use crate::types::{Collection, FromElement, Key};

/// Output key for a length-preserving transformation: associative keys survive,
/// positional keys are reassigned densely from 0.
fn mapped_key(key: &Key, next_index: &mut usize) -> Key {
    match key {
        Key::Name(name) => Key::Name(name.clone()),
        Key::Index(_) => {
            let reindexed = Key::Index(*next_index);
            *next_index += 1;
            reindexed
        }
    }
}

impl<V> Collection<V> {
    /// Apply `f` to every value, producing a collection of the same length.
    ///
    /// Associative keys are preserved; positional keys are reindexed densely from 0.
    pub fn map<U, F>(&self, mut f: F) -> Collection<U>
    where
        F: FnMut(&V) -> U,
    {
        let mut next_index = 0;
        Collection {
            entries: self
                .entries
                .iter()
                .map(|(k, v)| (mapped_key(k, &mut next_index), f(v)))
                .collect(),
        }
    }

    /// [`Collection::map`] through the [`FromElement::from_single`] factory.
    pub fn map_into<T>(&self) -> Collection<T>
    where
        V: Clone,
        T: FromElement<V>,
    {
        self.map(|v| T::from_single(v.clone()))
    }

    /// Apply `f` to every value, then concatenate the produced sub-sequences in input
    /// order into one flat, densely positional collection.
    pub fn flat_map<U, I, F>(&self, mut f: F) -> Collection<U>
    where
        F: FnMut(&V) -> I,
        I: IntoIterator<Item = U>,
    {
        Collection::from_values(self.entries.iter().flat_map(|(_, v)| f(v)))
    }

    /// Pair element `i` of `self` with element `i` of `other`.
    ///
    /// The result is densely positional with length `min(self.len(), other.len())`.
    pub fn zip<U>(&self, other: &Collection<U>) -> Collection<(V, U)>
    where
        V: Clone,
        U: Clone,
    {
        Collection::from_values(
            self.entries
                .iter()
                .zip(other.entries.iter())
                .map(|((_, a), (_, b))| (a.clone(), b.clone())),
        )
    }

    /// Append `other`'s values after `self`'s values.
    ///
    /// Only values are carried over: the result is densely positional regardless of
    /// either input's keys.
    pub fn concat(&self, other: &Collection<V>) -> Collection<V>
    where
        V: Clone,
    {
        Collection::from_values(
            self.entries
                .iter()
                .chain(other.entries.iter())
                .map(|(_, v)| v.clone()),
        )
    }

    /// Build an associative collection keyed by `self`'s values, valued by `values`'s
    /// values at the same position.
    ///
    /// Fails with [`CollectError::LengthMismatch`] when the lengths differ.
    pub fn combine<U>(&self, values: &Collection<U>) -> CollectResult<Collection<U>>
    where
        V: Clone + Into<Key>,
        U: Clone,
    {
        if self.len() != values.len() {
            return Err(CollectError::LengthMismatch {
                left: self.len(),
                right: values.len(),
            });
        }
        Ok(Collection {
            entries: self
                .entries
                .iter()
                .zip(values.entries.iter())
                .map(|((_, k), (_, v))| (k.clone().into(), v.clone()))
                .collect(),
        })
    }
}

impl<V> Collection<Vec<V>> {
    /// Concatenate all inner sequences in order into one flat, densely positional
    /// collection (one level of flattening only).
    pub fn collapse(&self) -> Collection<V>
    where
        V: Clone,
    {
        Collection::from_values(self.entries.iter().flat_map(|(_, vs)| vs.iter().cloned()))
    }

    /// Destructure each inner sequence positionally into `f`.
    ///
    /// Every element must have exactly `arity` members; a mismatch fails with
    /// [`CollectError::Arity`] naming the offending element index.
    pub fn map_spread<T, F>(&self, arity: usize, mut f: F) -> CollectResult<Collection<T>>
    where
        F: FnMut(&[V]) -> T,
    {
        let mut out = Vec::with_capacity(self.len());
        for (index, (_, vs)) in self.entries.iter().enumerate() {
            if vs.len() != arity {
                return Err(CollectError::Arity {
                    index,
                    expected: arity,
                    found: vs.len(),
                });
            }
            out.push(f(vs.as_slice()));
        }
        Ok(Collection::from_values(out))
    }

    /// Spread construction through the [`FromElement::from_spread`] factory.
    ///
    /// Arity errors reported by the factory are annotated with the element index.
    pub fn map_into_spread<T>(&self) -> CollectResult<Collection<T>>
    where
        T: FromElement<V>,
    {
        let mut out = Vec::with_capacity(self.len());
        for (index, (_, vs)) in self.entries.iter().enumerate() {
            let element = T::from_spread(vs).map_err(|err| match err {
                CollectError::Arity {
                    expected, found, ..
                } => CollectError::Arity {
                    index,
                    expected,
                    found,
                },
                other => other,
            })?;
            out.push(element);
        }
        Ok(Collection::from_values(out))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{CollectError, CollectResult};
    use crate::types::{Collection, FromElement, Key};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Person {
        full_name: String,
    }

    impl FromElement<String> for Person {
        fn from_single(value: String) -> Self {
            Person { full_name: value }
        }

        fn from_spread(values: &[String]) -> CollectResult<Self> {
            match values {
                [first, last] => Ok(Person {
                    full_name: format!("{first} {last}"),
                }),
                _ => Err(CollectError::Arity {
                    index: 0,
                    expected: 2,
                    found: values.len(),
                }),
            }
        }
    }

    #[test]
    fn map_doubles_values_and_preserves_length() {
        let collection = Collection::from_values([1, 2, 3]);
        let result = collection.map(|v| v * 2);
        assert_eq!(result.values(), vec![2, 4, 6]);
        assert_eq!(result.len(), collection.len());
    }

    #[test]
    fn map_preserves_associative_keys_and_reindexes_positional() {
        let collection = Collection::from_entries([
            (Key::Name("a".to_string()), 1),
            (Key::Index(7), 2),
            (Key::Index(9), 3),
        ]);
        let result = collection.map(|v| v * 10);
        assert_eq!(
            result.keys(),
            vec![Key::Name("a".to_string()), Key::Index(0), Key::Index(1)]
        );
        assert_eq!(result.values(), vec![10, 20, 30]);
    }

    #[test]
    fn map_into_builds_elements_from_single_values() {
        let collection = Collection::from_values(["Adrian".to_string()]);
        let result: Collection<Person> = collection.map_into();
        assert_eq!(
            result.values(),
            vec![Person {
                full_name: "Adrian".to_string()
            }]
        );
    }

    #[test]
    fn map_spread_destructures_pairs() {
        let collection = Collection::from_values([
            vec!["Adriansyah".to_string(), "Suryawan".to_string()],
            vec!["Haikal".to_string(), "Dwiki".to_string()],
        ]);
        let result = collection
            .map_spread(2, |parts| format!("{} {}", parts[0], parts[1]))
            .unwrap();
        assert_eq!(
            result.values(),
            vec!["Adriansyah Suryawan".to_string(), "Haikal Dwiki".to_string()]
        );
    }

    #[test]
    fn map_spread_rejects_wrong_arity_with_element_index() {
        let collection = Collection::from_values([
            vec!["Adriansyah".to_string(), "Suryawan".to_string()],
            vec!["Haikal".to_string()],
        ]);
        let err = collection
            .map_spread(2, |parts| parts.join(" "))
            .unwrap_err();
        assert!(matches!(
            err,
            CollectError::Arity {
                index: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn map_into_spread_builds_elements_and_annotates_arity_errors() {
        let collection = Collection::from_values([vec![
            "Adriansyah".to_string(),
            "Suryawan".to_string(),
        ]]);
        let result: Collection<Person> = collection.map_into_spread().unwrap();
        assert_eq!(
            result.values(),
            vec![Person {
                full_name: "Adriansyah Suryawan".to_string()
            }]
        );

        let bad = Collection::from_values([
            vec!["Adriansyah".to_string(), "Suryawan".to_string()],
            vec!["Haikal".to_string(), "Dwiki".to_string(), "extra".to_string()],
        ]);
        let err = bad.map_into_spread::<Person>().unwrap_err();
        assert!(matches!(err, CollectError::Arity { index: 1, found: 3, .. }));
    }

    #[test]
    fn flat_map_concatenates_in_input_order() {
        let collection = Collection::from_values([
            ("Adrian", vec!["Gaming", "Coding"]),
            ("Haikal", vec!["Guitaring", "Singing"]),
        ]);
        let hobbies = collection.flat_map(|(_, hobbies)| hobbies.clone());
        assert_eq!(
            hobbies.values(),
            vec!["Gaming", "Coding", "Guitaring", "Singing"]
        );
    }

    #[test]
    fn collapse_flattens_one_level() {
        let collection =
            Collection::from_values([vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        let result = collection.collapse();
        assert_eq!(result.values(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(result.keys(), (0..9).map(Key::Index).collect::<Vec<_>>());
    }

    #[test]
    fn zip_pairs_by_position_and_truncates_to_shorter() {
        let left = Collection::from_values([1, 2, 3]);
        let right = Collection::from_values([4, 5, 6]);
        assert_eq!(left.zip(&right).values(), vec![(1, 4), (2, 5), (3, 6)]);

        let short = Collection::from_values([4, 5]);
        assert_eq!(left.zip(&short).values(), vec![(1, 4), (2, 5)]);
    }

    #[test]
    fn concat_appends_values_and_reindexes() {
        let left = Collection::from_values([1, 2, 3]);
        let right = Collection::from_entries([("a", 4), ("b", 5), ("c", 6)]);
        let result = left.concat(&right);
        assert_eq!(result.values(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(result.keys(), (0..6).map(Key::Index).collect::<Vec<_>>());
    }

    #[test]
    fn combine_keys_left_values_right() {
        let keys = Collection::from_values(["name", "country"]);
        let values = Collection::from_values(["Adrian", "Indonesia"]);
        let result = keys.combine(&values).unwrap();
        assert_eq!(result.get("name"), Some(&"Adrian"));
        assert_eq!(result.get("country"), Some(&"Indonesia"));
        assert_eq!(
            result.keys(),
            vec![Key::Name("name".to_string()), Key::Name("country".to_string())]
        );
    }

    #[test]
    fn combine_rejects_mismatched_lengths() {
        let keys = Collection::from_values(["name", "country"]);
        let values = Collection::from_values(["Adrian"]);
        let err = keys.combine(&values).unwrap_err();
        assert!(matches!(
            err,
            CollectError::LengthMismatch { left: 2, right: 1 }
        ));
    }
}
