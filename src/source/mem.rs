//! In-memory leaf source.

use std::io::{Cursor, Read};
use std::sync::Arc;

use crate::entry::EntryInfo;
use crate::source::caller::Caller;
use crate::source::error::SourceError;
use crate::source::read::RandomRead;
use crate::source::EntrySource;

/// Leaf source serving one entry's bytes from a shared buffer.
///
/// Every `open_*` call hands out an independent cursor over the same
/// buffer, so handles stay valid for as long as the caller keeps them,
/// regardless of what happens to the source afterwards.
#[derive(Clone, Debug)]
pub struct BytesSource {
    entry: EntryInfo,
    bytes: Arc<[u8]>,
}

impl BytesSource {
    pub fn new(entry: EntryInfo, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            entry,
            bytes: bytes.into(),
        }
    }

    /// Builds a source whose descriptor is sized from the payload.
    pub fn from_vec(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let entry = EntryInfo::with_size(name, bytes.len() as u64);
        Self::new(entry, bytes)
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl EntrySource for BytesSource {
    type Entry = EntryInfo;

    fn local_target(&mut self, _caller: Caller) -> Result<EntryInfo, SourceError> {
        Ok(self.entry.clone())
    }

    fn open_random_access(
        &mut self,
        _caller: Caller,
    ) -> Result<Box<dyn RandomRead>, SourceError> {
        Ok(Box::new(Cursor::new(Arc::clone(&self.bytes))))
    }

    fn open_stream(&mut self, _caller: Caller) -> Result<Box<dyn Read>, SourceError> {
        Ok(Box::new(Cursor::new(Arc::clone(&self.bytes))))
    }
}
