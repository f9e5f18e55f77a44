//! SHA-1 based digest implementation.

use sha1::{Digest, Sha1};

use crate::digest::BlockDigest;

/// A hasher that computes SHA-1 digests.
#[derive(Debug, Clone, Default)]
pub struct Sha1Hasher {
    state: Sha1,
}

impl Sha1Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self { state: Sha1::new() }
    }

    /// Updates the hasher with more data.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Finalizes and returns the digest.
    pub fn finalize(self) -> BlockDigest {
        let mut bytes = [0u8; BlockDigest::SIZE];
        bytes.copy_from_slice(&self.state.finalize());
        BlockDigest::new(bytes)
    }

    /// Convenience method to hash data in one shot.
    pub fn hash(data: &[u8]) -> BlockDigest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}
