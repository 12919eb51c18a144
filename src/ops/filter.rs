//! Filtering, partitioning, grouping and membership tests.

use indexmap::IndexMap;

use crate::error::{CollectError, CollectResult};
use crate::types::{Collection, FieldAccess, Key};

impl<V> Collection<V> {
    /// Keep entries for which `pred` returns `true`.
    ///
    /// Original keys (associative or positional) are preserved; the result is NOT
    /// reindexed.
    pub fn filter<F>(&self, mut pred: F) -> Collection<V>
    where
        V: Clone,
        F: FnMut(&V, &Key) -> bool,
    {
        Collection {
            entries: self
                .entries
                .iter()
                .filter(|(k, v)| pred(v, k))
                .cloned()
                .collect(),
        }
    }

    /// Split into `(matched, unmatched)` by `pred`.
    ///
    /// Both halves preserve original keys; together they cover the input with no
    /// overlap.
    pub fn partition<F>(&self, mut pred: F) -> (Collection<V>, Collection<V>)
    where
        V: Clone,
        F: FnMut(&V, &Key) -> bool,
    {
        let mut matched = Vec::new();
        let mut unmatched = Vec::new();
        for entry in &self.entries {
            let (k, v) = entry;
            if pred(v, k) {
                matched.push(entry.clone());
            } else {
                unmatched.push(entry.clone());
            }
        }
        (
            Collection { entries: matched },
            Collection { entries: unmatched },
        )
    }

    /// Group elements by the key computed by `key_of`.
    ///
    /// The result is associative, keyed by group key in first-seen order; each group is
    /// a reindexed sub-collection of the full original elements, preserving their
    /// relative order.
    pub fn group_by<G, F>(&self, mut key_of: F) -> Collection<Collection<V>>
    where
        V: Clone,
        G: Into<Key>,
        F: FnMut(&V, &Key) -> G,
    {
        let mut groups: IndexMap<Key, Collection<V>> = IndexMap::new();
        for (k, v) in &self.entries {
            groups.entry(key_of(v, k).into()).or_default().push(v.clone());
        }
        Collection::from_entries(groups)
    }

    /// Group structured elements by the field named `name`.
    ///
    /// Fails with [`CollectError::MissingField`] if any element does not expose the
    /// field.
    pub fn group_by_field(&self, name: &str) -> CollectResult<Collection<Collection<V>>>
    where
        V: Clone + FieldAccess,
    {
        let mut groups: IndexMap<Key, Collection<V>> = IndexMap::new();
        for (_, v) in &self.entries {
            let group = v.field(name).ok_or_else(|| CollectError::MissingField {
                field: name.to_string(),
            })?;
            groups.entry(group).or_default().push(v.clone());
        }
        Ok(Collection::from_entries(groups))
    }

    /// True iff some element equals `needle`.
    pub fn contains(&self, needle: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.iter().any(|(_, v)| v == needle)
    }

    /// True iff some entry satisfies `pred`.
    pub fn contains_where<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&V, &Key) -> bool,
    {
        self.entries.iter().any(|(k, v)| pred(v, k))
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Collection, FieldAccess, Key};

    fn scores() -> Collection<i64> {
        Collection::from_entries([("Adrian", 100), ("Haikal", 80), ("Chandra", 90)])
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Employee {
        name: &'static str,
        department: &'static str,
    }

    impl FieldAccess for Employee {
        fn field(&self, name: &str) -> Option<Key> {
            match name {
                "name" => Some(Key::from(self.name)),
                "department" => Some(Key::from(self.department)),
                _ => None,
            }
        }
    }

    fn employees() -> Collection<Employee> {
        Collection::from_values([
            Employee {
                name: "Adrian",
                department: "IT",
            },
            Employee {
                name: "Chandra",
                department: "IT",
            },
            Employee {
                name: "Haikal",
                department: "HR",
            },
        ])
    }

    #[test]
    fn filter_keeps_matching_entries_with_original_keys() {
        let result = scores().filter(|score, _| *score >= 90);
        assert_eq!(
            result.all(),
            vec![
                (Key::from("Adrian"), 100),
                (Key::from("Chandra"), 90),
            ]
        );
    }

    #[test]
    fn partition_splits_without_overlap() {
        let collection = scores();
        let (matched, unmatched) = collection.partition(|score, _| *score >= 90);
        assert_eq!(
            matched.all(),
            vec![(Key::from("Adrian"), 100), (Key::from("Chandra"), 90)]
        );
        assert_eq!(unmatched.all(), vec![(Key::from("Haikal"), 80)]);
        assert_eq!(matched.len() + unmatched.len(), collection.len());
    }

    #[test]
    fn partition_matched_agrees_with_filter() {
        let collection = scores();
        let filtered = collection.filter(|score, _| *score >= 90);
        let (matched, _) = collection.partition(|score, _| *score >= 90);
        assert_eq!(filtered, matched);
    }

    #[test]
    fn group_by_closure_first_seen_order() {
        let result = employees().group_by(|e, _| e.department);
        assert_eq!(result.keys(), vec![Key::from("IT"), Key::from("HR")]);

        let it = result.get("IT").unwrap();
        assert_eq!(
            it.values().iter().map(|e| e.name).collect::<Vec<_>>(),
            vec!["Adrian", "Chandra"]
        );
        let hr = result.get("HR").unwrap();
        assert_eq!(hr.values().iter().map(|e| e.name).collect::<Vec<_>>(), vec!["Haikal"]);
    }

    #[test]
    fn group_by_field_matches_closure_form() {
        let by_field = employees().group_by_field("department").unwrap();
        let by_closure = employees().group_by(|e, _| e.department);
        assert_eq!(by_field, by_closure);
    }

    #[test]
    fn group_by_field_rejects_unknown_field() {
        let err = employees().group_by_field("salary").unwrap_err();
        assert_eq!(err.to_string(), "missing field 'salary' on element");
    }

    #[test]
    fn contains_value_and_predicate_forms() {
        let collection = Collection::from_values(["Adrian", "Haikal", "Chandra"]);
        assert!(collection.contains(&"Adrian"));
        assert!(!collection.contains(&"Dwiki"));
        assert!(collection.contains_where(|v, _| *v == "Haikal"));
        assert!(!collection.contains_where(|v, _| v.is_empty()));
    }
}
