//! Subject abstractions shared by the assertion interfaces.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::iter::Peekable;

/// Map-like subjects: anything whose entries can be listed as key-value
/// pairs. Implemented for the standard maps and for pair collections, so
/// containment assertions accept all of them uniformly.
pub trait MapLike<K, V> {
    /// List the entries of the subject.
    fn entries(&self) -> Vec<(&K, &V)>;
}

impl<K, V, H: BuildHasher> MapLike<K, V> for HashMap<K, V, H> {
    fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

impl<K, V> MapLike<K, V> for BTreeMap<K, V> {
    fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

impl<K, V> MapLike<K, V> for Vec<(K, V)> {
    fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().map(|(k, v)| (k, v)).collect()
    }
}

impl<K, V> MapLike<K, V> for [(K, V)] {
    fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().map(|(k, v)| (k, v)).collect()
    }
}

impl<K, V, M: MapLike<K, V> + ?Sized> MapLike<K, V> for &M {
    fn entries(&self) -> Vec<(&K, &V)> {
        (**self).entries()
    }
}

/// Map-entry subjects: a single key-value pairing, such as a `(K, V)` tuple
/// or what a map iterator yields.
pub trait EntryLike<K, V> {
    /// The entry's key.
    fn key(&self) -> &K;
    /// The entry's value.
    fn value(&self) -> &V;
}

impl<K, V> EntryLike<K, V> for (K, V) {
    fn key(&self) -> &K {
        &self.0
    }

    fn value(&self) -> &V {
        &self.1
    }
}

impl<K, V, E: EntryLike<K, V> + ?Sized> EntryLike<K, V> for &E {
    fn key(&self) -> &K {
        (**self).key()
    }

    fn value(&self) -> &V {
        (**self).value()
    }
}

/// Subjects that can be probed for a next element without consuming it.
pub trait PeekNext {
    /// Whether a next element exists.
    fn peek_next(&mut self) -> bool;
}

impl<I: Iterator> PeekNext for Peekable<I> {
    fn peek_next(&mut self) -> bool {
        self.peek().is_some()
    }
}
