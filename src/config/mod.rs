//! Configuration for etag computation.
//!
//! The block size is fixed by the etag scheme (see [`crate::BLOCK_SIZE`]) and
//! cannot be changed. The only tunable is the size of the worker pool used
//! to hash the blocks of large inputs.
//!
//! # Example
//!
//! ```
//! use qetag::EtagConfig;
//!
//! // Pin the pool to a single worker
//! let config = EtagConfig::new(1)?;
//! assert_eq!(config.workers(), 1);
//!
//! // Builder pattern
//! let config = EtagConfig::default().with_workers(4);
//! assert_eq!(config.workers(), 4);
//! # Ok::<(), qetag::EtagError>(())
//! ```

use std::num::NonZeroUsize;
use std::thread;

use crate::error::EtagError;

/// Configuration for an [`EtagEngine`](crate::EtagEngine).
///
/// `workers` bounds how many blocks are hashed at once. The default is the
/// host's available parallelism. The value never affects the resulting etag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EtagConfig {
    /// Number of worker threads for block hashing.
    workers: usize,
}

impl EtagConfig {
    /// Creates a new configuration with the given worker pool size.
    ///
    /// # Errors
    ///
    /// Returns [`EtagError::InvalidConfig`] if `workers` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use qetag::EtagConfig;
    ///
    /// assert!(EtagConfig::new(8).is_ok());
    /// assert!(EtagConfig::new(0).is_err());
    /// ```
    pub fn new(workers: usize) -> Result<Self, EtagError> {
        if workers == 0 {
            return Err(EtagError::InvalidConfig {
                message: "worker count must be non-zero",
            });
        }

        Ok(Self { workers })
    }

    /// Sets the worker pool size.
    ///
    /// Note: This does not validate the configuration. Use [`EtagConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Returns the worker pool size.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), EtagError> {
        Self::new(self.workers).map(|_| ())
    }
}

impl Default for EtagConfig {
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}
