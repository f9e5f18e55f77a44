//! Strong hash implementation for block and etag digests.
//!
//! - [`Sha1Hasher`] - SHA-1, the only digest the etag scheme uses

mod sha1;

pub use self::sha1::Sha1Hasher;
