//! The final etag value and its text encoding.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;

use super::BlockDigest;

/// Size of a raw etag in bytes: one marker byte plus a SHA-1 digest.
pub const ETAG_SIZE: usize = 1 + BlockDigest::SIZE;

const TINY_MARKER: u8 = 0x16;
const HUGE_MARKER: u8 = 0x96;

/// Which hashing path produced an etag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EtagKind {
    /// Input fit in one block and was hashed directly.
    Tiny,
    /// Input spanned several blocks; the block digests were hashed again.
    Huge,
}

impl EtagKind {
    /// Returns the leading marker byte for this kind.
    pub const fn marker(self) -> u8 {
        match self {
            EtagKind::Tiny => TINY_MARKER,
            EtagKind::Huge => HUGE_MARKER,
        }
    }

    fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            TINY_MARKER => Some(EtagKind::Tiny),
            HUGE_MARKER => Some(EtagKind::Huge),
            _ => None,
        }
    }
}

/// A computed etag: marker byte followed by a 20-byte SHA-1 digest.
///
/// [`Display`](fmt::Display) renders the URL-safe, padded base64 text form.
///
/// # Example
///
/// ```
/// use qetag::{Etag, EtagKind};
///
/// let etag = Etag::from_base64("Fq0jDGs_kz6eVL9Oiq_oCMZRsRkE").unwrap();
/// assert_eq!(etag.kind(), EtagKind::Tiny);
/// assert_eq!(etag.to_string(), "Fq0jDGs_kz6eVL9Oiq_oCMZRsRkE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Etag([u8; ETAG_SIZE]);

impl Etag {
    /// Creates an etag of the given kind from its digest.
    pub fn new(kind: EtagKind, digest: BlockDigest) -> Self {
        let mut bytes = [0u8; ETAG_SIZE];
        bytes[0] = kind.marker();
        bytes[1..].copy_from_slice(digest.as_bytes());
        Self(bytes)
    }

    /// Etag of an input hashed directly.
    pub fn tiny(digest: BlockDigest) -> Self {
        Self::new(EtagKind::Tiny, digest)
    }

    /// Etag of an input hashed block by block.
    pub fn huge(digest: BlockDigest) -> Self {
        Self::new(EtagKind::Huge, digest)
    }

    /// Returns the path that produced this etag.
    pub fn kind(&self) -> EtagKind {
        // Constructors only ever write a known marker.
        if self.0[0] == HUGE_MARKER {
            EtagKind::Huge
        } else {
            EtagKind::Tiny
        }
    }

    /// Returns the SHA-1 part of the etag.
    pub fn digest(&self) -> BlockDigest {
        let mut bytes = [0u8; BlockDigest::SIZE];
        bytes.copy_from_slice(&self.0[1..]);
        BlockDigest::new(bytes)
    }

    /// Returns the raw etag bytes.
    pub fn as_bytes(&self) -> &[u8; ETAG_SIZE] {
        &self.0
    }

    /// Encodes the etag as URL-safe base64 with padding.
    pub fn to_base64(&self) -> String {
        URL_SAFE.encode(self.0)
    }

    /// Parses the text form of an etag.
    ///
    /// Returns `None` unless the text decodes to exactly [`ETAG_SIZE`] bytes
    /// starting with a known marker byte.
    pub fn from_base64(text: &str) -> Option<Self> {
        let decoded = URL_SAFE.decode(text).ok()?;
        let bytes: [u8; ETAG_SIZE] = decoded.try_into().ok()?;
        EtagKind::from_marker(bytes[0])?;
        Some(Self(bytes))
    }
}

impl AsRef<[u8]> for Etag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Etag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}
