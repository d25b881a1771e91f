//! Default map containment assertions.

use std::fmt;

use crate::logic::map_assertions::MapAssertions;
use crate::logic::types::MapLike;
use crate::report::ReportEntry;

/// Default implementation of [`MapAssertions`].
#[derive(Debug, Clone)]
pub struct DefaultMapAssertions {
    /// Upper bound on subject keys listed when reporting a missing key.
    pub max_listed_keys: usize,
}

impl Default for DefaultMapAssertions {
    fn default() -> Self {
        Self { max_listed_keys: 8 }
    }
}

impl DefaultMapAssertions {
    /// Check a single expected pair against the subject's entries.
    fn contain_one<K, V>(&self, entries: &[(&K, &V)], key: &K, value: &V) -> ReportEntry
    where
        K: fmt::Debug + PartialEq,
        V: fmt::Debug + PartialEq,
    {
        let description = format!("entry {:?} => {:?}", key, value);
        if entries.iter().any(|(k, v)| *k == key && *v == value) {
            return ReportEntry::pass(description);
        }

        let found: Vec<&V> = entries
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .collect();
        let entry = if found.is_empty() {
            ReportEntry::fail(
                description,
                format!("key {:?} not present (keys: {})", key, self.keys_preview(entries)),
            )
        } else if found.len() == 1 {
            ReportEntry::fail(description, format!("found {:?} => {:?}", key, found[0]))
        } else {
            // Pair-collection subjects can carry the same key several times.
            ReportEntry::fail(description, format!("found {:?} => one of {:?}", key, found))
        };
        entry.expecting(format!("{:?} => {:?}", key, value))
    }

    fn keys_preview<K: fmt::Debug, V>(&self, entries: &[(&K, &V)]) -> String {
        let mut names: Vec<String> = entries
            .iter()
            .take(self.max_listed_keys)
            .map(|(k, _)| format!("{:?}", k))
            .collect();
        if entries.len() > self.max_listed_keys {
            names.push("...".to_string());
        }
        names.join(", ")
    }
}

impl MapAssertions for DefaultMapAssertions {
    fn to_contain_pairs<S, K, V>(&self, subject: &S, pairs: Vec<(K, V)>) -> ReportEntry
    where
        S: MapLike<K, V>,
        K: fmt::Debug + PartialEq,
        V: fmt::Debug + PartialEq,
    {
        let description = "to contain, in any order, the pairs";
        if pairs.is_empty() {
            return ReportEntry::invalid(description, "expected at least one key-value pair");
        }

        let entries = subject.entries();
        let children = pairs
            .iter()
            .map(|(k, v)| self.contain_one(&entries, k, v))
            .collect();
        ReportEntry::group(description, children)
    }

    fn to_contain_entries_of<S, K, V, P>(&self, subject: &S, other: P) -> ReportEntry
    where
        S: MapLike<K, V>,
        P: IntoIterator<Item = (K, V)>,
        K: fmt::Debug + PartialEq,
        V: fmt::Debug + PartialEq,
    {
        self.to_contain_pairs(subject, other.into_iter().collect())
    }

    fn to_contain_key<S, K, V>(&self, subject: &S, key: K) -> ReportEntry
    where
        S: MapLike<K, V>,
        K: fmt::Debug + PartialEq,
        V: fmt::Debug,
    {
        let description = format!("to contain key {:?}", key);
        let entries = subject.entries();
        if entries.iter().any(|(k, _)| *k == &key) {
            ReportEntry::pass(description)
        } else {
            ReportEntry::fail(
                description,
                format!("key not present (keys: {})", self.keys_preview(&entries)),
            )
        }
    }

    fn not_to_contain_key<S, K, V>(&self, subject: &S, key: K) -> ReportEntry
    where
        S: MapLike<K, V>,
        K: fmt::Debug + PartialEq,
        V: fmt::Debug,
    {
        let description = format!("not to contain key {:?}", key);
        let entries = subject.entries();
        match entries.iter().find(|(k, _)| *k == &key) {
            None => ReportEntry::pass(description),
            Some((k, v)) => {
                ReportEntry::fail(description, format!("found {:?} => {:?}", k, v))
            }
        }
    }
}
