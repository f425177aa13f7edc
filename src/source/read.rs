//! Byte-stream helpers shared by source implementations.
//!
//! # Design Notes
//! - Declared entry sizes are untrusted; `BoundedRead` turns them into hard
//!   read limits instead of trusting the payload to end on its own.
//! - `CountedRead` supports consumption accounting without touching the
//!   inner reader's semantics.

use std::io::{Read, Seek};

/// Handle supporting random-access reads of a resource's bytes.
///
/// Blanket-implemented for every `Read + Seek` type so concrete handles
/// (files, cursors) box directly into `Box<dyn RandomRead>`.
pub trait RandomRead: Read + Seek {}

impl<T: Read + Seek> RandomRead for T {}

/// Read wrapper that limits reads to a fixed number of bytes.
///
/// Reads past the limit return EOF. Used to bound entry payload reads to
/// the declared size.
pub struct BoundedRead<R> {
    inner: R,
    remaining: u64,
}

impl<R> BoundedRead<R> {
    #[inline]
    pub fn new(inner: R, limit: u64) -> Self {
        Self {
            inner,
            remaining: limit,
        }
    }

    /// Bytes still readable before the limit is reached.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    #[inline]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for BoundedRead<R> {
    #[inline]
    fn read(&mut self, dst: &mut [u8]) -> std::io::Result<usize> {
        if self.remaining == 0 {
            return Ok(0);
        }
        let max = self.remaining.min(dst.len() as u64) as usize;
        let n = self.inner.read(&mut dst[..max])?;
        self.remaining = self.remaining.saturating_sub(n as u64);
        Ok(n)
    }
}

/// Read wrapper that counts bytes read from the underlying reader.
///
/// # Guarantees
/// - `bytes()` is monotonic and saturating.
pub struct CountedRead<R> {
    inner: R,
    bytes: u64,
}

impl<R> CountedRead<R> {
    #[inline]
    pub fn new(inner: R) -> Self {
        Self { inner, bytes: 0 }
    }

    /// Total bytes read so far.
    #[inline]
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    #[inline]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for CountedRead<R> {
    #[inline]
    fn read(&mut self, dst: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(dst)?;
        self.bytes = self.bytes.saturating_add(n as u64);
        Ok(n)
    }
}
