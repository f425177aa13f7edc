//! Entry containers: name-addressed, read-only collections of entries.
//!
//! # Scope
//! - `EntryContainer` is the lookup contract consumed by source chains:
//!   size, iteration, and lookup by name.
//! - `IndexContainer` is the concrete insertion-ordered implementation.
//! - `ForwardContainer` is a transparent decorator over any container.
//!
//! # Invariants
//! - `ForwardContainer` never stores entries itself; every query is
//!   answered by the wrapped container at call time, so the two can never
//!   diverge.

use std::collections::HashMap;

use crate::entry::Entry;

/// Read-only contract for a collection of named entries.
pub trait EntryContainer {
    type Entry: Entry;

    /// Number of entries in the container.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates entries in the container's own order.
    fn iter(&self) -> Box<dyn Iterator<Item = &Self::Entry> + '_>;

    /// Looks up an entry by name. Absent names return `None`.
    fn entry(&self, name: &str) -> Option<&Self::Entry>;
}

/// Insertion-ordered container with name-keyed lookup.
///
/// Entry names are unique; inserting a duplicate name replaces the previous
/// entry in place and keeps its position in iteration order.
#[derive(Clone, Debug)]
pub struct IndexContainer<E: Entry> {
    entries: Vec<E>,
    index: HashMap<String, usize>,
}

impl<E: Entry> Default for IndexContainer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entry> IndexContainer<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            entries: Vec::with_capacity(cap),
            index: HashMap::with_capacity(cap),
        }
    }

    /// Inserts an entry, returning the entry it replaced (same name), if any.
    pub fn insert(&mut self, entry: E) -> Option<E> {
        match self.index.get(entry.name()) {
            Some(&at) => Some(std::mem::replace(&mut self.entries[at], entry)),
            None => {
                self.index.insert(entry.name().to_owned(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }
}

impl<E: Entry> FromIterator<E> for IndexContainer<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut container = Self::new();
        for entry in iter {
            container.insert(entry);
        }
        container
    }
}

impl<E: Entry> EntryContainer for IndexContainer<E> {
    type Entry = E;

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.entries.iter())
    }

    fn entry(&self, name: &str) -> Option<&E> {
        self.index.get(name).map(|&at| &self.entries[at])
    }
}

/// Transparent decorator over an entry container.
///
/// Holds exactly one wrapped container and forwards every query to it
/// unmodified. Wrappers that need container-adjacent behavior (auditing,
/// filtering views) embed one of these and override selectively.
#[derive(Clone, Debug)]
pub struct ForwardContainer<C> {
    inner: C,
}

impl<C: EntryContainer> ForwardContainer<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Shared access to the wrapped container.
    #[inline]
    pub fn get_ref(&self) -> &C {
        &self.inner
    }

    /// Unwraps the decorator.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: EntryContainer> EntryContainer for ForwardContainer<C> {
    type Entry = C::Entry;

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Self::Entry> + '_> {
        self.inner.iter()
    }

    fn entry(&self, name: &str) -> Option<&Self::Entry> {
        self.inner.entry(name)
    }
}
