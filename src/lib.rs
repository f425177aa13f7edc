//! Lazy resource-binding sources for named entries.
//!
//! ## Scope
//! This crate provides capability handles ("sources") for opening a named
//! entry's bytes without eagerly acquiring the underlying resource, plus
//! the container contract those entries live in.
//!
//! ## Key invariants
//! - A source is bound to one logical target entry for its lifetime.
//! - Forwarding layers propagate success and failure verbatim; caller
//!   identity travels as an explicit parameter, never as delegate state.
//! - A lazily derived delegate is cached after its first successful
//!   derivation and discarded whenever any operation through it fails, so
//!   the next call re-derives from scratch instead of reusing a handle
//!   that may wrap a dead resource.
//! - Handles returned to callers are owned; resetting a source never
//!   closes or invalidates them.
//!
//! ## Composition
//! `Caller -> LazySource -> derived view (e.g. DeflateViewSource) -> leaf`
//!
//! A caller invokes an operation on the outermost source; each layer binds
//! the caller context and forwards inward; the leaf opens the actual bytes.
//! On failure, the lazy layer clears its cache before the error reaches the
//! caller.
//!
//! ## Notable entry points
//! - `EntrySource`: the source contract.
//! - `LazySource` / `DeriveSource`: lazy derivation with reset-on-failure.
//! - `ForwardSource`: eager forwarding with caller binding.
//! - `EntryContainer` / `ForwardContainer`: the entry lookup contract and
//!   its transparent decorator.
//!
//! ## Design trade-offs
//! Unconditional cache invalidation trades a possible redundant
//! re-derivation for never reusing a stale delegate. Sources take
//! `&mut self`, encoding single-owner sequential use in the type system
//! rather than documenting a locking policy.

pub mod container;
pub mod entry;
pub mod params;
pub mod source;

pub use container::{EntryContainer, ForwardContainer, IndexContainer};
pub use entry::{Entry, EntryInfo};
pub use params::{AesCipherParams, AesKeyStrength};
pub use source::{
    BoundedRead, BytesSource, Caller, CountedRead, DeflateViewSource, DeriveSource, EntrySource,
    FileSource, ForwardSource, LazySource, RandomRead, Severity, SourceError, SourceId,
};
