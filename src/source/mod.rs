//! Random-access byte sources.
//!
//! An etag needs the input's total length up front and positional reads at
//! arbitrary offsets. [`ByteSource`] captures exactly that. Reads take
//! `&self`, so one source can be shared by every worker hashing a block.
//!
//! - [`ByteSource`] - length + positional read
//! - [`FileSource`] - an open file with its length captured at open time
//! - [`SectionReader`] - sequential [`std::io::Read`] over one span of a source

use std::io;

use bytes::Bytes;

mod file;

pub use file::FileSource;

/// A byte sequence of known length that supports reads at any offset.
///
/// The length must stay the same for the lifetime of one etag computation,
/// and concurrent `read_at` calls at disjoint offsets must return the same
/// bytes a single sequential read would. Sources with an internal cursor
/// (such as [`std::io::Cursor`]) don't satisfy this without their own locking.
pub trait ByteSource {
    /// Returns the total length in bytes.
    fn size(&self) -> u64;

    /// Reads up to `buf.len()` bytes starting at `offset`.
    ///
    /// Returns the number of bytes read; `0` means `offset` is at or past the
    /// end of the source.
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize>;
}

impl ByteSource for [u8] {
    fn size(&self) -> u64 {
        self.len() as u64
    }

    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        let start = match usize::try_from(offset) {
            Ok(start) if start < self.len() => start,
            _ => return Ok(0),
        };
        let n = buf.len().min(self.len() - start);
        buf[..n].copy_from_slice(&self[start..start + n]);
        Ok(n)
    }
}

impl ByteSource for str {
    fn size(&self) -> u64 {
        self.as_bytes().size()
    }

    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        self.as_bytes().read_at(buf, offset)
    }
}

impl ByteSource for Vec<u8> {
    fn size(&self) -> u64 {
        self.as_slice().size()
    }

    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        self.as_slice().read_at(buf, offset)
    }
}

impl ByteSource for Bytes {
    fn size(&self) -> u64 {
        (**self).size()
    }

    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        (**self).read_at(buf, offset)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &S {
    fn size(&self) -> u64 {
        (**self).size()
    }

    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        (**self).read_at(buf, offset)
    }
}

/// Sequential reader over the span `[offset, offset + len)` of a source.
///
/// Reading stops at the end of the span even if the source continues. If the
/// source ends first, `read` returns `0` early; callers compare
/// [`SectionReader::position`] against the span length to detect that.
#[derive(Debug)]
pub struct SectionReader<'a, S: ?Sized> {
    source: &'a S,
    offset: u64,
    len: u64,
    pos: u64,
}

impl<'a, S: ByteSource + ?Sized> SectionReader<'a, S> {
    /// Creates a reader over `len` bytes of `source` starting at `offset`.
    pub fn new(source: &'a S, offset: u64, len: u64) -> Self {
        Self {
            source,
            offset,
            len,
            pos: 0,
        }
    }

    /// Creates a reader over the whole source.
    pub fn whole(source: &'a S) -> Self {
        Self::new(source, 0, source.size())
    }

    /// Returns the number of bytes read so far.
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Returns the length of the span.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns true if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the start offset of the span in the source.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl<S: ByteSource + ?Sized> io::Read for SectionReader<'_, S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = self.len - self.pos;
        if remaining == 0 {
            return Ok(0);
        }
        let want = buf.len().min(usize::try_from(remaining).unwrap_or(usize::MAX));
        let n = self
            .source
            .read_at(&mut buf[..want], self.offset + self.pos)?;
        self.pos += n as u64;
        Ok(n)
    }
}
