//! Block partitioning.
//!
//! Inputs are split into fixed [`BLOCK_SIZE`] spans. Blocks are never
//! materialized; a [`Block`] is just `(index, offset, len)` arithmetic over
//! the total input size.

use std::ops::Range;

/// Size of one block in bytes (4 MiB). Fixed by the etag scheme.
pub const BLOCK_SIZE: u64 = 4 * 1024 * 1024;

/// Returns the number of blocks an input of `size` bytes is split into.
///
/// Any size up to and including [`BLOCK_SIZE`] (zero included) is one block.
/// Exact multiples of [`BLOCK_SIZE`] get no trailing empty block.
///
/// # Example
///
/// ```
/// use qetag::{block_count, BLOCK_SIZE};
///
/// assert_eq!(block_count(0), 1);
/// assert_eq!(block_count(BLOCK_SIZE), 1);
/// assert_eq!(block_count(BLOCK_SIZE + 1), 2);
/// assert_eq!(block_count(2 * BLOCK_SIZE), 2);
/// ```
pub fn block_count(size: u64) -> u64 {
    if size <= BLOCK_SIZE {
        return 1;
    }
    size.div_ceil(BLOCK_SIZE)
}

/// One contiguous span of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    /// Zero-based block index.
    pub index: u64,
    /// Byte offset of the block in the input.
    pub offset: u64,
    /// Length of the block; only the last block may be shorter than [`BLOCK_SIZE`].
    pub len: u64,
}

impl Block {
    /// Returns block `index` of an input of `size` bytes.
    ///
    /// The caller must pass `index < block_count(size)`.
    pub fn at(index: u64, size: u64) -> Self {
        let offset = index * BLOCK_SIZE;
        Self {
            index,
            offset,
            len: BLOCK_SIZE.min(size.saturating_sub(offset)),
        }
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.len
    }

    /// Returns the block as a byte range.
    pub fn range(&self) -> Range<u64> {
        self.offset..self.end()
    }
}

/// Iterates over every block of an input of `size` bytes, in index order.
pub fn blocks(size: u64) -> impl ExactSizeIterator<Item = Block> {
    (0..block_count(size) as usize).map(move |i| Block::at(i as u64, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_count_tiny() {
        assert_eq!(block_count(0), 1);
        assert_eq!(block_count(1), 1);
        assert_eq!(block_count(BLOCK_SIZE - 1), 1);
        assert_eq!(block_count(BLOCK_SIZE), 1);
    }

    #[test]
    fn test_block_count_huge() {
        assert_eq!(block_count(BLOCK_SIZE + 1), 2);
        assert_eq!(block_count(2 * BLOCK_SIZE - 1), 2);
        assert_eq!(block_count(2 * BLOCK_SIZE + 100), 3);
        assert_eq!(block_count(3 * BLOCK_SIZE + 1), 4);
    }

    #[test]
    fn test_block_count_exact_multiple() {
        // No spurious empty trailing block
        assert_eq!(block_count(2 * BLOCK_SIZE), 2);
        assert_eq!(block_count(3 * BLOCK_SIZE), 3);
        assert_eq!(block_count(10 * BLOCK_SIZE), 10);
    }

    #[test]
    fn test_block_at() {
        let size = 2 * BLOCK_SIZE + 100;
        assert_eq!(Block::at(0, size).len, BLOCK_SIZE);
        assert_eq!(Block::at(1, size).offset, BLOCK_SIZE);
        assert_eq!(Block::at(2, size).len, 100);
        assert_eq!(Block::at(2, size).end(), size);
    }

    #[test]
    fn test_blocks_cover_input() {
        let size = BLOCK_SIZE + 1;
        let all: Vec<_> = blocks(size).collect();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].range(), 0..BLOCK_SIZE);
        assert_eq!(all[1].range(), BLOCK_SIZE..BLOCK_SIZE + 1);
        assert_eq!(all[1].len, 1);
    }

    #[test]
    fn test_blocks_empty_input() {
        let all: Vec<_> = blocks(0).collect();
        assert_eq!(all, vec![Block { index: 0, offset: 0, len: 0 }]);
    }
}
