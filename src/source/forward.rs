//! Eager forwarding source.
//!
//! # Design Notes
//! - The delegate is supplied at construction; the only work this layer adds
//!   is binding the caller context before each forwarded call.
//! - `bound_delegate` is the single chokepoint every operation routes
//!   through, so binding cannot be skipped for one operation and not
//!   another.

use std::io::Read;

use crate::source::caller::{Caller, SourceId};
use crate::source::error::SourceError;
use crate::source::read::RandomRead;
use crate::source::EntrySource;

/// Source that forwards every operation to a delegate supplied at
/// construction.
///
/// Before forwarding, the incoming caller context is bound to this source
/// (outermost caller wins), so the delegate chain can see who is driving
/// the operation. The delegate, once bound, reports the same local target
/// this source would report; forwarding is verbatim in both directions.
pub struct ForwardSource<S> {
    delegate: S,
    id: SourceId,
}

impl<S> ForwardSource<S> {
    pub fn new(delegate: S) -> Self {
        Self {
            delegate,
            id: SourceId::next(),
        }
    }

    /// Identity of this source, as seen by delegates via `Caller`.
    #[inline]
    pub fn id(&self) -> SourceId {
        self.id
    }

    #[inline]
    pub fn get_ref(&self) -> &S {
        &self.delegate
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.delegate
    }

    pub fn into_inner(self) -> S {
        self.delegate
    }

    /// Binding chokepoint: yields the delegate together with the caller
    /// context bound to this source.
    fn bound_delegate(&mut self, caller: Caller) -> (&mut S, Caller) {
        (&mut self.delegate, caller.rebind(self.id))
    }
}

impl<S: EntrySource> EntrySource for ForwardSource<S> {
    type Entry = S::Entry;

    fn local_target(&mut self, caller: Caller) -> Result<Self::Entry, SourceError> {
        let (delegate, bound) = self.bound_delegate(caller);
        delegate.local_target(bound)
    }

    fn open_random_access(
        &mut self,
        caller: Caller,
    ) -> Result<Box<dyn RandomRead>, SourceError> {
        let (delegate, bound) = self.bound_delegate(caller);
        delegate.open_random_access(bound)
    }

    fn open_stream(&mut self, caller: Caller) -> Result<Box<dyn Read>, SourceError> {
        let (delegate, bound) = self.bound_delegate(caller);
        delegate.open_stream(bound)
    }
}
