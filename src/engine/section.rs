//! Hashing one span of a source.

use std::io::{self, Read};

use crate::buffer::Buffer;
use crate::digest::BlockDigest;
use crate::error::EtagError;
use crate::hash::Sha1Hasher;
use crate::source::{ByteSource, SectionReader};

/// Computes the SHA-1 digest of `len` bytes of `source` starting at `offset`.
///
/// The span is streamed through a pooled read buffer. If the source ends
/// before `len` bytes were read the whole digest is discarded and
/// [`EtagError::ShortRead`] is returned.
pub(crate) fn digest_section<S: ByteSource + ?Sized>(
    source: &S,
    offset: u64,
    len: u64,
) -> Result<BlockDigest, EtagError> {
    let mut reader = SectionReader::new(source, offset, len);
    let mut buffer = Buffer::take();
    let buf = buffer.as_mut_slice();
    let mut hasher = Sha1Hasher::new();

    loop {
        match reader.read(buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    if reader.position() != len {
        return Err(EtagError::ShortRead {
            offset,
            expected: len,
            actual: reader.position(),
        });
    }

    Ok(hasher.finalize())
}
