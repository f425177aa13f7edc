//! Lazily derived source with reset-on-failure.
//!
//! # Key invariants
//! - The derive step runs at most once per cache-populated period.
//! - Any failed operation leaves the cache empty; the next call re-derives.
//! - Failures propagate with their original variant and severity. The reset
//!   is a pure side effect on this layer's own state.
//!
//! # Design Notes
//! - All operations route through one `with_delegate` chokepoint that
//!   performs derive-or-fetch, caller binding, invoke, and reset-on-failure
//!   in one place. There is no per-operation reset logic to drift apart.
//! - A delegate wrapping an open resource cannot be trusted after any
//!   failure through it, even one this layer did not cause, so the cache is
//!   invalidated unconditionally. The cost is a possible redundant
//!   re-derivation; a stale delegate is never reused.

use std::io::Read;

use crate::source::caller::{Caller, SourceId};
use crate::source::error::SourceError;
use crate::source::read::RandomRead;
use crate::source::EntrySource;

/// Deferred derivation of a delegate source.
///
/// Implemented by concrete providers (and blanket-implemented for `FnMut`
/// factories), this is the seam a lazy source calls to produce a fresh
/// delegate, typically one bound to a decoded or otherwise derived view of
/// the same entry.
pub trait DeriveSource {
    type Source: EntrySource;

    /// Derives a fresh delegate.
    ///
    /// Called once per empty-to-bound transition of the cache. A failure
    /// here leaves the cache empty and propagates to the caller unchanged.
    fn derive(&mut self) -> Result<Self::Source, SourceError>;
}

impl<S, F> DeriveSource for F
where
    S: EntrySource,
    F: FnMut() -> Result<S, SourceError>,
{
    type Source = S;

    fn derive(&mut self) -> Result<S, SourceError> {
        (self)()
    }
}

/// Source whose delegate is derived on first use and discarded on failure.
///
/// The cache slot has two states: empty (no delegate) and bound (delegate
/// present). Successful derivation moves empty to bound; any failed
/// operation moves the slot back to empty before the failure reaches the
/// caller. The failing call itself still fails; the fresh derivation
/// happens on the next call, making the instance self-healing across
/// independent calls.
///
/// Resetting never touches handles already returned from `open_*`; those
/// remain the caller's to use and close.
pub struct LazySource<D: DeriveSource> {
    derive: D,
    cache: Option<D::Source>,
    id: SourceId,
}

impl<D: DeriveSource> LazySource<D> {
    pub fn new(derive: D) -> Self {
        Self {
            derive,
            cache: None,
            id: SourceId::next(),
        }
    }

    /// Identity of this source, as seen by delegates via `Caller`.
    #[inline]
    pub fn id(&self) -> SourceId {
        self.id
    }

    /// True while a derived delegate is cached.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.cache.is_some()
    }

    /// Discards the cached delegate; the next operation re-derives.
    #[inline]
    pub fn reset(&mut self) {
        self.cache = None;
    }

    /// Derive-or-fetch step. On the empty state this invokes the derive
    /// seam exactly once; a derivation failure leaves the slot empty.
    fn delegate(&mut self) -> Result<&mut D::Source, SourceError> {
        if self.cache.is_none() {
            self.cache = Some(self.derive.derive()?);
        }
        self.cache
            .as_mut()
            .ok_or_else(|| SourceError::invariant("delegate slot empty after derivation"))
    }

    /// Chokepoint for every forwarded operation: derive or fetch the
    /// delegate, bind the caller context, run `op`, and clear the cache if
    /// anything failed. The failure value is returned untouched.
    fn with_delegate<T>(
        &mut self,
        caller: Caller,
        op: impl FnOnce(&mut D::Source, Caller) -> Result<T, SourceError>,
    ) -> Result<T, SourceError> {
        let bound = caller.rebind(self.id);
        let outcome = self.delegate().and_then(|delegate| op(delegate, bound));
        if outcome.is_err() {
            self.cache = None;
        }
        outcome
    }
}

impl<D: DeriveSource> EntrySource for LazySource<D> {
    type Entry = <D::Source as EntrySource>::Entry;

    fn local_target(&mut self, caller: Caller) -> Result<Self::Entry, SourceError> {
        self.with_delegate(caller, |delegate, bound| delegate.local_target(bound))
    }

    fn open_random_access(
        &mut self,
        caller: Caller,
    ) -> Result<Box<dyn RandomRead>, SourceError> {
        self.with_delegate(caller, |delegate, bound| delegate.open_random_access(bound))
    }

    fn open_stream(&mut self, caller: Caller) -> Result<Box<dyn Read>, SourceError> {
        self.with_delegate(caller, |delegate, bound| delegate.open_stream(bound))
    }
}
