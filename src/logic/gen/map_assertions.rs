//---------------------------------------------------
//  Generated content, modify:
//  src/codegen/emit.rs
//  if necessary - enjoy the day 🙂
//---------------------------------------------------

use std::fmt;
use crate::logic::types::MapLike;
use crate::report::ReportEntry;

use crate::expect::Expectation;
use crate::logic::default::DefaultMapAssertions;
use crate::logic::map_assertions::MapAssertions;
use crate::logic::registry;

impl<S> Expectation<S> {
    /// Order-independent containment: every given key-value pair must appear
    /// as an entry of the subject.
    pub fn to_contain_pairs<K, V>(self, pairs: Vec<(K, V)>) -> Self
    where
        S: MapLike<K, V>,
        K: fmt::Debug + PartialEq,
        V: fmt::Debug + PartialEq,
    {
        let entry: ReportEntry = registry::get_or_default::<DefaultMapAssertions>()
            .to_contain_pairs(self.subject(), pairs);
        self.record(entry)
    }

    /// Containment of all entries of another map-like collection, in any
    /// order.
    pub fn to_contain_entries_of<K, V, P>(self, other: P) -> Self
    where
        S: MapLike<K, V>,
        P: IntoIterator<Item = (K, V)>,
        K: fmt::Debug + PartialEq,
        V: fmt::Debug + PartialEq,
    {
        let entry: ReportEntry = registry::get_or_default::<DefaultMapAssertions>()
            .to_contain_entries_of(self.subject(), other);
        self.record(entry)
    }

    /// Presence of a single key.
    pub fn to_contain_key<K, V>(self, key: K) -> Self
    where
        S: MapLike<K, V>,
        K: fmt::Debug + PartialEq,
        V: fmt::Debug,
    {
        let entry: ReportEntry = registry::get_or_default::<DefaultMapAssertions>()
            .to_contain_key(self.subject(), key);
        self.record(entry)
    }

    /// Absence of a single key.
    pub fn not_to_contain_key<K, V>(self, key: K) -> Self
    where
        S: MapLike<K, V>,
        K: fmt::Debug + PartialEq,
        V: fmt::Debug,
    {
        let entry: ReportEntry = registry::get_or_default::<DefaultMapAssertions>()
            .not_to_contain_key(self.subject(), key);
        self.record(entry)
    }
}
