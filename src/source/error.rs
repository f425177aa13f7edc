//! Error type for source operations.
//!
//! # Design Notes
//! - One enum covers the whole source layer; operations are few and share
//!   the same failure surface (resolve target, open resource).
//! - Variants carry a severity class. Wrappers in a source chain pass
//!   failures through verbatim and must never reclassify them; severity is
//!   how callers decide between retrying and aborting.
//! - I/O errors preserve their source to keep diagnostics actionable.

use std::fmt;
use std::io;

/// Failure class of a `SourceError`.
///
/// `Recoverable` failures are the declared outcome of source operations:
/// a later call on the same chain may succeed. `Fatal` failures indicate a
/// programming error or violated invariant; callers should abort the
/// surrounding task instead of retrying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Recoverable,
    Fatal,
}

/// Errors raised by source operations.
///
/// Forwarding layers add no recovery: a failure from a delegate propagates
/// to the caller unchanged, whatever bookkeeping the layer performs on the
/// way out.
#[derive(Debug)]
#[non_exhaustive]
pub enum SourceError {
    /// The target entry does not exist in its container.
    NotFound { name: String },
    /// The resource exists but is temporarily unavailable.
    Busy { name: String },
    /// The resource was present but its content failed validation at open
    /// time.
    Corrupt { detail: &'static str },
    /// I/O error while resolving the target or opening the resource.
    Io(io::Error),
    /// Invariant violation inside a source implementation.
    Invariant { detail: &'static str },
}

impl SourceError {
    /// Creates a `NotFound` error for the named entry.
    #[inline]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Creates a `Busy` error for the named entry.
    #[inline]
    pub fn busy(name: impl Into<String>) -> Self {
        Self::Busy { name: name.into() }
    }

    /// Creates a `Corrupt` error.
    #[inline]
    pub fn corrupt(detail: &'static str) -> Self {
        Self::Corrupt { detail }
    }

    /// Creates an `Invariant` error.
    #[inline]
    pub fn invariant(detail: &'static str) -> Self {
        Self::Invariant { detail }
    }

    /// Severity class of this error.
    pub fn severity(&self) -> Severity {
        match self {
            Self::NotFound { .. } | Self::Busy { .. } | Self::Corrupt { .. } | Self::Io(_) => {
                Severity::Recoverable
            }
            Self::Invariant { .. } => Severity::Fatal,
        }
    }

    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "entry not found: {name}"),
            Self::Busy { name } => write!(f, "resource busy: {name}"),
            Self::Corrupt { detail } => write!(f, "corrupt resource: {detail}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Invariant { detail } => write!(f, "invariant violated: {detail}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SourceError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
