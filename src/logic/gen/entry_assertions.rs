//---------------------------------------------------
//  Generated content, modify:
//  src/codegen/emit.rs
//  if necessary - enjoy the day 🙂
//---------------------------------------------------

use std::fmt;
use crate::expect::Expectation;
use crate::logic::types::EntryLike;
use crate::report::ReportEntry;

use crate::logic::default::DefaultEntryAssertions;
use crate::logic::entry_assertions::EntryAssertions;
use crate::logic::registry;

impl<S> Expectation<S> {
    /// The entry's key equals `key` and its value equals `value`; both
    /// checks are evaluated in one group so the value is still checked when
    /// the key fails.
    pub fn to_be_key_value<K, V>(self, key: K, value: V) -> Self
    where
        S: EntryLike<K, V>,
        K: fmt::Debug + PartialEq,
        V: fmt::Debug + PartialEq,
    {
        let entry: ReportEntry = registry::get_or_default::<DefaultEntryAssertions>()
            .to_be_key_value(self.subject(), key, value);
        self.record(entry)
    }

    /// Derive an expectation for the entry's key and evaluate the creator's
    /// assertions as a group. A creator that records nothing is an
    /// input-validation failure.
    pub fn key<K, V, C>(self, creator: C) -> Self
    where
        S: EntryLike<K, V>,
        K: Clone + fmt::Debug,
        C: FnOnce(Expectation<K>) -> Expectation<K>,
    {
        let entry: ReportEntry = registry::get_or_default::<DefaultEntryAssertions>()
            .key(self.subject(), creator);
        self.record(entry)
    }

    /// Derive an expectation for the entry's value and evaluate the
    /// creator's assertions as a group. A creator that records nothing is an
    /// input-validation failure.
    pub fn value<K, V, C>(self, creator: C) -> Self
    where
        S: EntryLike<K, V>,
        V: Clone + fmt::Debug,
        C: FnOnce(Expectation<V>) -> Expectation<V>,
    {
        let entry: ReportEntry = registry::get_or_default::<DefaultEntryAssertions>()
            .value(self.subject(), creator);
        self.record(entry)
    }
}
