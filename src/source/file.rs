//! File-backed leaf source.
//!
//! # Design Notes
//! - The file is opened per call, never held open by the source; a handle
//!   acquired by one call outlives any later failure or reset upstream.
//! - Declared entry sizes bound stream reads. A file that grew past the
//!   declared size is served truncated rather than trusted.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::entry::{Entry, EntryInfo};
use crate::source::caller::Caller;
use crate::source::error::SourceError;
use crate::source::read::{BoundedRead, RandomRead};
use crate::source::EntrySource;

/// Leaf source reading one entry's bytes from a file on disk.
pub struct FileSource {
    entry: EntryInfo,
    path: PathBuf,
}

impl FileSource {
    pub fn new(entry: EntryInfo, path: impl Into<PathBuf>) -> Self {
        Self {
            entry,
            path: path.into(),
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<File, SourceError> {
        File::open(&self.path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => SourceError::not_found(self.entry.name()),
            io::ErrorKind::WouldBlock => SourceError::busy(self.entry.name()),
            _ => SourceError::Io(err),
        })
    }
}

impl EntrySource for FileSource {
    type Entry = EntryInfo;

    fn local_target(&mut self, _caller: Caller) -> Result<EntryInfo, SourceError> {
        Ok(self.entry.clone())
    }

    fn open_random_access(
        &mut self,
        _caller: Caller,
    ) -> Result<Box<dyn RandomRead>, SourceError> {
        Ok(Box::new(self.open()?))
    }

    fn open_stream(&mut self, _caller: Caller) -> Result<Box<dyn Read>, SourceError> {
        let file = self.open()?;
        Ok(match self.entry.size() {
            Some(limit) => Box::new(BoundedRead::new(file, limit)),
            None => Box::new(file),
        })
    }
}
