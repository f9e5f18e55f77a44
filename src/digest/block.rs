//! Block digest type.

use std::fmt;

/// The SHA-1 digest of one block, or of a whole tiny input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockDigest([u8; 20]);

impl BlockDigest {
    /// The size of the digest in bytes.
    pub const SIZE: usize = 20;

    /// Creates a digest from a byte array.
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates a digest from a slice.
    ///
    /// Returns `None` if the slice is not exactly 20 bytes.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; 20] = slice.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Returns the digest as a byte array.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl AsRef<[u8]> for BlockDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for BlockDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice() {
        let bytes = vec![7u8; 20];
        let digest = BlockDigest::from_slice(&bytes).unwrap();
        assert_eq!(digest.as_bytes(), &[7u8; 20]);

        // Wrong size
        assert!(BlockDigest::from_slice(&[0u8; 19]).is_none());
        assert!(BlockDigest::from_slice(&[0u8; 21]).is_none());
    }

    #[test]
    fn test_to_hex() {
        let mut bytes = [0u8; 20];
        bytes[..4].copy_from_slice(&[0xda, 0x39, 0xa3, 0xee]);
        let hex = BlockDigest::new(bytes).to_hex();
        assert_eq!(hex.len(), 40);
        assert!(hex.starts_with("da39a3ee"));
    }
}
