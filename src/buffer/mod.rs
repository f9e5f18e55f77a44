//! Internal read buffer management.
//!
//! Block reads stream through a fixed-size buffer taken from a thread-local
//! pool, so each worker thread reuses the same allocation for every block it
//! hashes. It is an implementation detail and not part of the public API.

mod pool;

pub(crate) use pool::Buffer;
