//! Entry descriptors: the targets that sources produce resources for.
//!
//! # Scope
//! - `Entry` is the minimal read-side contract: a name and an optional
//!   declared size.
//! - `EntryInfo` is the concrete descriptor used by the built-in sources
//!   and containers.
//!
//! # Design Notes
//! - Descriptors are cheap, owned values. Sources hand them out by value so
//!   a caller's copy stays valid across source resets.
//! - Declared sizes are untrusted hints; readers bound payload consumption
//!   against them rather than trusting them.

use serde::{Deserialize, Serialize};

/// Read-side contract for an entry descriptor.
///
/// `name` identifies the entry inside its container. `size` is the declared
/// payload size in bytes, or `None` when the container does not know it.
pub trait Entry {
    fn name(&self) -> &str;
    fn size(&self) -> Option<u64>;
}

/// Concrete entry descriptor.
///
/// The name is stored verbatim; no canonicalization happens at this layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryInfo {
    name: String,
    size: Option<u64>,
}

impl EntryInfo {
    /// Creates a descriptor with an unknown payload size.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
        }
    }

    /// Creates a descriptor with a declared payload size.
    pub fn with_size(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size: Some(size),
        }
    }
}

impl Entry for EntryInfo {
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn size(&self) -> Option<u64> {
        self.size
    }
}
