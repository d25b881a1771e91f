//! Default map-entry assertions.

use std::fmt;

use crate::expect::Expectation;
use crate::logic::entry_assertions::EntryAssertions;
use crate::logic::types::EntryLike;
use crate::report::{ReportEntry, EMPTY_CREATOR_REASON};

/// Default implementation of [`EntryAssertions`].
#[derive(Debug, Clone, Default)]
pub struct DefaultEntryAssertions;

impl DefaultEntryAssertions {
    fn creator_group<T, C>(&self, description: &str, subject: T, creator: C) -> ReportEntry
    where
        T: fmt::Debug,
        C: FnOnce(Expectation<T>) -> Expectation<T>,
    {
        let entries = creator(Expectation::new(subject)).into_entries();
        if entries.is_empty() {
            ReportEntry::invalid(description, EMPTY_CREATOR_REASON)
        } else {
            ReportEntry::group(description, entries)
        }
    }
}

impl EntryAssertions for DefaultEntryAssertions {
    fn to_be_key_value<S, K, V>(&self, subject: &S, key: K, value: V) -> ReportEntry
    where
        S: EntryLike<K, V>,
        K: fmt::Debug + PartialEq,
        V: fmt::Debug + PartialEq,
    {
        let key_desc = format!("key equals {:?}", key);
        let key_check = if subject.key() == &key {
            ReportEntry::pass(key_desc)
        } else {
            ReportEntry::fail(key_desc, format!("was {:?}", subject.key()))
                .expecting(format!("{:?}", key))
        };

        let value_desc = format!("value equals {:?}", value);
        let value_check = if subject.value() == &value {
            ReportEntry::pass(value_desc)
        } else {
            ReportEntry::fail(value_desc, format!("was {:?}", subject.value()))
                .expecting(format!("{:?}", value))
        };

        // One group: the value is still reported when the key fails.
        ReportEntry::group(
            format!("to be the entry {:?} => {:?}", key, value),
            vec![key_check, value_check],
        )
    }

    fn key<S, K, V, C>(&self, subject: &S, creator: C) -> ReportEntry
    where
        S: EntryLike<K, V>,
        K: Clone + fmt::Debug,
        C: FnOnce(Expectation<K>) -> Expectation<K>,
    {
        self.creator_group("key", subject.key().clone(), creator)
    }

    fn value<S, K, V, C>(&self, subject: &S, creator: C) -> ReportEntry
    where
        S: EntryLike<K, V>,
        V: Clone + fmt::Debug,
        C: FnOnce(Expectation<V>) -> Expectation<V>,
    {
        self.creator_group("value", subject.value().clone(), creator)
    }
}
