//! Etag computation engine.
//!
//! [`EtagEngine`] classifies the input by size and routes it:
//!
//! - one block (up to [`BLOCK_SIZE`](crate::BLOCK_SIZE) bytes, empty input
//!   included): the whole input is hashed in one pass, marker `0x16`
//! - more than one block: each block is hashed on the worker pool, the
//!   digests are concatenated in block order and hashed again, marker `0x96`
//!
//! # Example
//!
//! ```
//! use qetag::{EtagConfig, EtagEngine};
//!
//! let engine = EtagEngine::new(EtagConfig::default());
//! let etag = engine.etag_of_str("Etag algorithm test string 0")?;
//! assert_eq!(etag, "Fq0jDGs_kz6eVL9Oiq_oCMZRsRkE");
//! # Ok::<(), qetag::EtagError>(())
//! ```

use std::path::Path;

use log::debug;

use crate::block::block_count;
use crate::config::EtagConfig;
use crate::digest::Etag;
use crate::error::EtagError;
use crate::source::{ByteSource, FileSource};

mod blocks;
mod section;

/// Computes etags with a fixed configuration.
///
/// An engine holds no per-input state; one instance can be shared and used
/// for any number of computations, from any thread.
///
/// # Determinism
///
/// The etag depends only on the input bytes. The worker count and the order
/// in which workers finish their blocks never change the result.
#[derive(Debug, Clone, Default)]
pub struct EtagEngine {
    config: EtagConfig,
}

impl EtagEngine {
    /// Creates a new engine with the given configuration.
    pub fn new(config: EtagConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this engine.
    pub fn config(&self) -> &EtagConfig {
        &self.config
    }

    /// Computes the etag of a random-access source.
    ///
    /// Multi-block sources are read concurrently from several threads, hence
    /// the `Sync` bound.
    ///
    /// # Errors
    ///
    /// Any read failure aborts the computation: [`EtagError::Io`] for errors
    /// reported by the source, [`EtagError::ShortRead`] if it holds fewer
    /// bytes than its declared size. Also fails with
    /// [`EtagError::InvalidConfig`] for a zero worker count.
    pub fn compute<S: ByteSource + Sync + ?Sized>(&self, source: &S) -> Result<Etag, EtagError> {
        self.config.validate()?;

        let size = source.size();
        let count = block_count(size);

        if count > 1 {
            let workers = self.config.workers().min(count as usize);
            debug!(
                "huge etag: {} bytes in {} blocks on {} workers",
                size, count, workers
            );
            blocks::huge_etag(source, size, count, workers)
        } else {
            debug!("tiny etag: {} bytes", size);
            Ok(Etag::tiny(section::digest_section(source, 0, size)?))
        }
    }

    /// Computes the etag of a string's UTF-8 bytes, as text.
    pub fn etag_of_str(&self, text: &str) -> Result<String, EtagError> {
        self.etag_of_bytes(text.as_bytes())
    }

    /// Computes the etag of a byte buffer, as text.
    pub fn etag_of_bytes(&self, content: impl AsRef<[u8]>) -> Result<String, EtagError> {
        Ok(self.compute(content.as_ref())?.to_base64())
    }

    /// Computes the etag of a file's contents, as text.
    ///
    /// # Errors
    ///
    /// Returns [`EtagError::SourceUnavailable`] if the file cannot be opened
    /// or stat'd, plus any error [`EtagEngine::compute`] can return.
    pub fn etag_of_path(&self, path: impl AsRef<Path>) -> Result<String, EtagError> {
        let source = FileSource::open(path)?;
        Ok(self.compute(&source)?.to_base64())
    }
}
