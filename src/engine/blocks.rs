//! Multi-block hashing.
//!
//! Each block is hashed into its own slot of a digest array pre-sized to the
//! block count. Slots are disjoint, so workers never contend and the array
//! is already in index order when every block is done.

use log::trace;

use super::section::digest_section;
use crate::block::Block;
use crate::digest::{BlockDigest, Etag};
use crate::error::EtagError;
use crate::hash::Sha1Hasher;
use crate::source::ByteSource;

/// Hashes every block of `source` and combines the digests into a huge etag.
pub(crate) fn huge_etag<S: ByteSource + Sync + ?Sized>(
    source: &S,
    size: u64,
    count: u64,
    workers: usize,
) -> Result<Etag, EtagError> {
    let mut slots = vec![BlockDigest::default(); count as usize];

    if workers > 1 {
        fill_parallel(source, size, &mut slots, workers)?;
    } else {
        fill_sequential(source, size, &mut slots)?;
    }

    Ok(combine(&slots))
}

/// Hashes the concatenated block digests and prefixes the huge marker.
pub(crate) fn combine(digests: &[BlockDigest]) -> Etag {
    let mut concatenated = Vec::with_capacity(digests.len() * BlockDigest::SIZE);
    for digest in digests {
        concatenated.extend_from_slice(digest.as_bytes());
    }
    Etag::huge(Sha1Hasher::hash(&concatenated))
}

fn digest_block<S: ByteSource + ?Sized>(
    source: &S,
    index: usize,
    size: u64,
) -> Result<BlockDigest, EtagError> {
    let block = Block::at(index as u64, size);
    let digest = digest_section(source, block.offset, block.len)?;
    trace!(
        "block {} [{}..{}) sha1={}",
        block.index,
        block.offset,
        block.end(),
        digest
    );
    Ok(digest)
}

fn fill_sequential<S: ByteSource + ?Sized>(
    source: &S,
    size: u64,
    slots: &mut [BlockDigest],
) -> Result<(), EtagError> {
    for (index, slot) in slots.iter_mut().enumerate() {
        *slot = digest_block(source, index, size)?;
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn fill_parallel<S: ByteSource + Sync + ?Sized>(
    source: &S,
    size: u64,
    slots: &mut [BlockDigest],
    workers: usize,
) -> Result<(), EtagError> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("qetag-worker-{}", i))
        .build()?;

    pool.install(|| {
        slots
            .par_iter_mut()
            .enumerate()
            .try_for_each(|(index, slot)| -> Result<(), EtagError> {
                *slot = digest_block(source, index, size)?;
                Ok(())
            })
    })
}

#[cfg(not(feature = "parallel"))]
fn fill_parallel<S: ByteSource + Sync + ?Sized>(
    source: &S,
    size: u64,
    slots: &mut [BlockDigest],
    _workers: usize,
) -> Result<(), EtagError> {
    fill_sequential(source, size, slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BLOCK_SIZE;

    fn reference(data: &[u8]) -> Etag {
        let digests: Vec<_> = data
            .chunks(BLOCK_SIZE as usize)
            .map(Sha1Hasher::hash)
            .collect();
        combine(&digests)
    }

    #[test]
    fn test_combine_is_order_sensitive() {
        let a = BlockDigest::new([1u8; 20]);
        let b = BlockDigest::new([2u8; 20]);
        assert_ne!(combine(&[a, b]), combine(&[b, a]));
    }

    #[test]
    fn test_sequential_matches_reference() {
        let data: Vec<u8> = (0..BLOCK_SIZE + 1).map(|i| (i % 251) as u8).collect();
        let etag = huge_etag(&data, data.len() as u64, 2, 1).unwrap();
        assert_eq!(etag, reference(&data));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let data: Vec<u8> = (0..2 * BLOCK_SIZE + 100).map(|i| (i % 241) as u8).collect();
        let size = data.len() as u64;
        let sequential = huge_etag(&data, size, 3, 1).unwrap();
        let parallel = huge_etag(&data, size, 3, 4).unwrap();
        assert_eq!(sequential, parallel);
    }
}
