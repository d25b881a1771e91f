//! Map containment assertion interface.
//!
//! The fluent glue for this interface is generated into `src/logic/gen/`
//! by the `attest generate` task.

use std::fmt;

use crate::logic::types::MapLike;
use crate::report::ReportEntry;

/// Assertions over map-like subjects.
pub trait MapAssertions: Send + Sync {
    /// Order-independent containment: every given key-value pair must appear
    /// as an entry of the subject.
    fn to_contain_pairs<S, K, V>(&self, subject: &S, pairs: Vec<(K, V)>) -> ReportEntry
    where
        S: MapLike<K, V>,
        K: fmt::Debug + PartialEq,
        V: fmt::Debug + PartialEq;

    /// Containment of all entries of another map-like collection, in any
    /// order.
    fn to_contain_entries_of<S, K, V, P>(&self, subject: &S, other: P) -> ReportEntry
    where
        S: MapLike<K, V>,
        P: IntoIterator<Item = (K, V)>,
        K: fmt::Debug + PartialEq,
        V: fmt::Debug + PartialEq;

    /// Presence of a single key.
    fn to_contain_key<S, K, V>(&self, subject: &S, key: K) -> ReportEntry
    where
        S: MapLike<K, V>,
        K: fmt::Debug + PartialEq,
        V: fmt::Debug;

    /// Absence of a single key.
    fn not_to_contain_key<S, K, V>(&self, subject: &S, key: K) -> ReportEntry
    where
        S: MapLike<K, V>,
        K: fmt::Debug + PartialEq,
        V: fmt::Debug;
}
