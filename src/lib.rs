//! qetag
//!
//! Qiniu-style content etags for Rust.
//!
//! An etag is a fixed 28-character, URL-safe base64 fingerprint of a byte
//! sequence:
//!
//! - inputs of at most 4 MiB are hashed with SHA-1 directly and prefixed
//!   with the marker byte `0x16`
//! - larger inputs are split into 4 MiB blocks, each block is hashed (in
//!   parallel), the block digests are concatenated in order and hashed
//!   again, and the result is prefixed with `0x96`
//!
//! The crate intentionally:
//! - does NOT offer a streaming / incremental API (the input size must be
//!   known up front)
//! - does NOT allow changing the block size
//!
//! # Quick start
//!
//! ```
//! let etag = qetag::etag_of_str("Etag algorithm test string 1")?;
//! assert_eq!(etag, "FpMJCDhrP6WCjIecfgjF0pNIPHZX");
//! # Ok::<(), qetag::EtagError>(())
//! ```
//!
//! # Files
//!
//! ```no_run
//! use qetag::{EtagConfig, EtagEngine, EtagError};
//!
//! fn main() -> Result<(), EtagError> {
//!     // Hash blocks on at most 4 threads
//!     let engine = EtagEngine::new(EtagConfig::new(4)?);
//!     println!("{}", engine.etag_of_path("data.bin")?);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::Path;

mod block;
mod config;
mod digest;
mod engine;
mod error;
mod source;

mod buffer; // internal (thread-local reuse)
mod hash; // internal sha1 wrapper

//
// Public surface
//

pub use block::{BLOCK_SIZE, Block, block_count, blocks};
pub use config::EtagConfig;
pub use digest::{BlockDigest, ETAG_SIZE, Etag, EtagKind};
pub use engine::EtagEngine;
pub use error::EtagError;
pub use source::{ByteSource, FileSource, SectionReader};

/// Computes the etag of a string's UTF-8 bytes.
pub fn etag_of_str(text: &str) -> Result<String, EtagError> {
    EtagEngine::default().etag_of_str(text)
}

/// Computes the etag of a byte buffer.
///
/// ```
/// let etag = qetag::etag_of_bytes(b"Etag algorithm test string 0")?;
/// assert_eq!(etag, "Fq0jDGs_kz6eVL9Oiq_oCMZRsRkE");
/// # Ok::<(), qetag::EtagError>(())
/// ```
pub fn etag_of_bytes(content: impl AsRef<[u8]>) -> Result<String, EtagError> {
    EtagEngine::default().etag_of_bytes(content)
}

/// Computes the etag of a file's contents.
///
/// Fails with [`EtagError::SourceUnavailable`] if the file cannot be opened
/// or stat'd.
pub fn etag_of_path(path: impl AsRef<Path>) -> Result<String, EtagError> {
    EtagEngine::default().etag_of_path(path)
}
