//! Entry sources: capability handles for opening one entry's bytes.
//!
//! # Scope
//! This module defines the source contract and its compositions:
//! caller binding, eager forwarding, lazy derivation with reset-on-failure,
//! and the built-in leaf and view implementations.
//!
//! # Key invariants
//! - A source is bound to exactly one logical target entry; `local_target`
//!   never reports a different target across calls on one instance.
//! - Forwarding layers propagate success and failure verbatim. The lazy
//!   layer adds exactly one side effect on failure (cache reset) and never
//!   retries, substitutes results, or reclassifies errors.
//! - Handles returned by `open_*` are owned and stay valid independently of
//!   the source that produced them.
//!
//! # Design Notes
//! - Operations take `&mut self`: one source instance represents one
//!   in-progress or about-to-begin access by a single owner. Callers that
//!   need sharing serialize access themselves.
//! - Caller identity travels as a `Caller` parameter, not as state on the
//!   delegate.

pub mod caller;
pub mod deflate;
pub mod error;
pub mod file;
pub mod forward;
pub mod lazy;
pub mod mem;
pub mod read;
#[cfg(test)]
pub(crate) mod test_util;

pub use caller::{Caller, SourceId};
pub use deflate::DeflateViewSource;
pub use error::{Severity, SourceError};
pub use file::FileSource;
pub use forward::ForwardSource;
pub use lazy::{DeriveSource, LazySource};
pub use mem::BytesSource;
pub use read::{BoundedRead, CountedRead, RandomRead};

use std::io::Read;

use crate::entry::Entry;

/// Capability to open one entry's bytes.
///
/// A source does not hold the resource open; each `open_*` call acquires it
/// anew and hands ownership of the resulting handle to the caller. Opening
/// may block on underlying I/O; this layer imposes no timeout and performs
/// no retry. Callers own retry policy.
pub trait EntrySource {
    type Entry: Entry;

    /// Returns the entry this source produces a resource for.
    ///
    /// Fails when resolving the target itself requires deferred work (for
    /// example, a lazily derived delegate whose derivation fails).
    fn local_target(&mut self, caller: Caller) -> Result<Self::Entry, SourceError>;

    /// Opens the resource for random-access reads.
    fn open_random_access(&mut self, caller: Caller)
        -> Result<Box<dyn RandomRead>, SourceError>;

    /// Opens the resource for forward-only byte consumption.
    fn open_stream(&mut self, caller: Caller) -> Result<Box<dyn Read>, SourceError>;
}

impl<S: EntrySource + ?Sized> EntrySource for Box<S> {
    type Entry = S::Entry;

    fn local_target(&mut self, caller: Caller) -> Result<Self::Entry, SourceError> {
        (**self).local_target(caller)
    }

    fn open_random_access(
        &mut self,
        caller: Caller,
    ) -> Result<Box<dyn RandomRead>, SourceError> {
        (**self).open_random_access(caller)
    }

    fn open_stream(&mut self, caller: Caller) -> Result<Box<dyn Read>, SourceError> {
        (**self).open_stream(caller)
    }
}
