//! Map-entry assertion interface.
//!
//! The fluent glue for this interface is generated into `src/logic/gen/`
//! by the `attest generate` task.

use std::fmt;

use crate::expect::Expectation;
use crate::logic::types::EntryLike;
use crate::report::ReportEntry;

/// Assertions over a single map entry.
pub trait EntryAssertions: Send + Sync {
    /// The entry's key equals `key` and its value equals `value`; both
    /// checks are evaluated in one group so the value is still checked when
    /// the key fails.
    fn to_be_key_value<S, K, V>(&self, subject: &S, key: K, value: V) -> ReportEntry
    where
        S: EntryLike<K, V>,
        K: fmt::Debug + PartialEq,
        V: fmt::Debug + PartialEq;

    /// Derive an expectation for the entry's key and evaluate the creator's
    /// assertions as a group. A creator that records nothing is an
    /// input-validation failure.
    fn key<S, K, V, C>(&self, subject: &S, creator: C) -> ReportEntry
    where
        S: EntryLike<K, V>,
        K: Clone + fmt::Debug,
        C: FnOnce(Expectation<K>) -> Expectation<K>;

    /// Derive an expectation for the entry's value and evaluate the
    /// creator's assertions as a group. A creator that records nothing is an
    /// input-validation failure.
    fn value<S, K, V, C>(&self, subject: &S, creator: C) -> ReportEntry
    where
        S: EntryLike<K, V>,
        V: Clone + fmt::Debug,
        C: FnOnce(Expectation<V>) -> Expectation<V>;
}
