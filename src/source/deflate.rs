//! Deflate-decoded view over another source.
//!
//! # Design Notes
//! - The wrapped source serves raw-deflate bytes and declares the
//!   compressed size; this source exposes the inflated view of the same
//!   entry and declares the inflated size (when known).
//! - Deflate output is not seekable, so `open_random_access` inflates into
//!   memory (bounded by the declared inflated size or the configured cap)
//!   and serves a cursor. `open_stream` decodes incrementally.
//! - `flate2::read::DeflateDecoder` may allocate internally; inflation
//!   bounds are enforced on its output, not its internals.

use std::io::{Cursor, Read};

use flate2::read::DeflateDecoder;

use crate::entry::{Entry, EntryInfo};
use crate::source::caller::{Caller, SourceId};
use crate::source::error::SourceError;
use crate::source::read::{BoundedRead, RandomRead};
use crate::source::EntrySource;

/// Fallback inflation cap for views without a declared inflated size.
pub const DEFAULT_MAX_INFLATED: u64 = 64 * 1024 * 1024;

/// Source exposing the inflated view of a deflate-compressed entry.
///
/// The view shares the wrapped entry's name but carries its own size: the
/// declared inflated payload size, which also bounds decoding.
pub struct DeflateViewSource<S> {
    inner: S,
    inflated_size: Option<u64>,
    id: SourceId,
    max_inflated: u64,
}

impl<S> DeflateViewSource<S> {
    pub fn new(inner: S, inflated_size: Option<u64>) -> Self {
        Self {
            inner,
            inflated_size,
            id: SourceId::next(),
            max_inflated: DEFAULT_MAX_INFLATED,
        }
    }

    /// Sets the inflation cap used when no inflated size is declared.
    #[must_use]
    pub fn max_inflated(mut self, cap: u64) -> Self {
        self.max_inflated = cap;
        self
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn inflation_bound(&self) -> u64 {
        self.inflated_size
            .unwrap_or(self.max_inflated)
            .min(self.max_inflated)
    }
}

impl<S: EntrySource<Entry = EntryInfo>> EntrySource for DeflateViewSource<S> {
    type Entry = EntryInfo;

    fn local_target(&mut self, caller: Caller) -> Result<EntryInfo, SourceError> {
        let raw = self.inner.local_target(caller.rebind(self.id))?;
        Ok(match self.inflated_size {
            Some(size) => EntryInfo::with_size(raw.name(), size),
            None => EntryInfo::new(raw.name()),
        })
    }

    fn open_random_access(
        &mut self,
        caller: Caller,
    ) -> Result<Box<dyn RandomRead>, SourceError> {
        let bound = caller.rebind(self.id);
        let raw = self.inner.open_stream(bound)?;

        let cap = self.inflation_bound();
        let mut inflated = Vec::new();
        DeflateDecoder::new(raw)
            .take(cap.saturating_add(1))
            .read_to_end(&mut inflated)?;

        if inflated.len() as u64 > cap {
            return Err(SourceError::corrupt("inflated payload exceeds its bound"));
        }
        if let Some(size) = self.inflated_size {
            if (inflated.len() as u64) < size {
                return Err(SourceError::corrupt(
                    "inflated payload shorter than declared size",
                ));
            }
        }
        Ok(Box::new(Cursor::new(inflated)))
    }

    fn open_stream(&mut self, caller: Caller) -> Result<Box<dyn Read>, SourceError> {
        let raw = self.inner.open_stream(caller.rebind(self.id))?;
        Ok(Box::new(BoundedRead::new(
            DeflateDecoder::new(raw),
            self.inflation_bound(),
        )))
    }
}
