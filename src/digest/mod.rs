//! Digest types.
//!
//! - [`BlockDigest`] - 20-byte SHA-1 digest of one block
//! - [`Etag`] - marker byte + digest, the final fingerprint

mod block;
mod etag;

pub use block::BlockDigest;
pub use etag::{ETAG_SIZE, Etag, EtagKind};
