//! Error types for qetag.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while computing an etag.
///
/// Every variant is fatal to the computation that produced it: no partial
/// etag is ever returned alongside an error.
#[derive(Debug)]
pub enum EtagError {
    /// The input file could not be opened or stat'd.
    SourceUnavailable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An I/O error occurred while reading input data.
    Io(std::io::Error),

    /// The source ended before the declared length was read.
    ShortRead {
        /// Offset of the section being read.
        offset: u64,
        /// Number of bytes the section should contain.
        expected: u64,
        /// Number of bytes actually read.
        actual: u64,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The worker pool for block hashing could not be started.
    WorkerPool(String),
}

impl fmt::Display for EtagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtagError::SourceUnavailable { path, source } => {
                write!(f, "source unavailable: {}: {}", path.display(), source)
            }
            EtagError::Io(e) => write!(f, "io error: {}", e),
            EtagError::ShortRead {
                offset,
                expected,
                actual,
            } => write!(
                f,
                "short read at offset {}: expected {} bytes, got {}",
                offset, expected, actual
            ),
            EtagError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            EtagError::WorkerPool(message) => write!(f, "worker pool error: {}", message),
        }
    }
}

impl std::error::Error for EtagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EtagError::SourceUnavailable { source, .. } => Some(source),
            EtagError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EtagError {
    fn from(e: std::io::Error) -> Self {
        EtagError::Io(e)
    }
}

#[cfg(feature = "parallel")]
impl From<rayon::ThreadPoolBuildError> for EtagError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        EtagError::WorkerPool(e.to_string())
    }
}
