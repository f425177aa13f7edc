//! Caller identity threaded through forwarded source operations.
//!
//! # Design Notes
//! - Binding is a value passed into each call, not a field on the delegate.
//!   A shared delegate invoked from two chains therefore sees each chain's
//!   own context; there is no stored peer to go stale.
//! - The outermost caller wins: once a context is bound, wrappers further
//!   down the chain leave it untouched.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stable identity for one source instance.
///
/// Ids are unique within a process and only compared for equality; the
/// numeric value has no meaning beyond display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceId(u64);

impl SourceId {
    /// Allocates the next process-unique id.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source#{}", self.0)
    }
}

/// Transient caller context for one source operation.
///
/// A direct context means an end caller invoked the operation; a bound
/// context names the outermost source the call was forwarded on behalf of.
/// Delegates use this to answer "who is driving this operation" without
/// explicit caller parameters at every layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Caller {
    outermost: Option<SourceId>,
}

impl Caller {
    /// Context for an operation invoked directly by an end caller.
    #[inline]
    pub const fn direct() -> Self {
        Self { outermost: None }
    }

    /// Context bound to the given source.
    #[inline]
    pub fn of(id: SourceId) -> Self {
        Self {
            outermost: Some(id),
        }
    }

    /// Binds this context to `id` unless an outer source already did.
    #[inline]
    #[must_use]
    pub fn rebind(self, id: SourceId) -> Self {
        match self.outermost {
            Some(_) => self,
            None => Self::of(id),
        }
    }

    /// The outermost source of the current call chain, if forwarded.
    #[inline]
    pub fn outermost(&self) -> Option<SourceId> {
        self.outermost
    }

    #[inline]
    pub fn is_direct(&self) -> bool {
        self.outermost.is_none()
    }
}
