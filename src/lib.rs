//! chunkdelta
//!
//! Content-defined fingerprints and chunk-level deltas for Rust.
//!
//! `chunkdelta` splits a byte stream at content-derived boundaries found by a
//! Rabin-Karp rolling hash, keeps one digest byte per boundary as the
//! stream's *fingerprint*, and later classifies the digests of a new stream
//! against that fingerprint as new, changed or deleted. It is a building
//! block for:
//!
//! - rsync-style delta detection
//! - deduplication
//! - change detection in sync tools
//!
//! The crate intentionally:
//! - does NOT manage files or paths
//! - does NOT reconstruct files from a delta
//! - does NOT stream (inputs are fully buffered)
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use chunkdelta::{io, ChunkError, RollingConfig};
//!
//! fn main() -> Result<(), ChunkError> {
//!     let config = RollingConfig::default();
//!     io::signature(File::open("original.bin")?, File::create("fingerprint.bin")?, config)?;
//!
//!     let delta = io::delta(File::open("fingerprint.bin")?, File::open("modified.bin")?, config)?;
//!     println!("{delta}");
//!     Ok(())
//! }
//! ```
//!
//! # In memory
//!
//! ```
//! use chunkdelta::{build_fingerprint, compute_delta};
//!
//! let fingerprint = build_fingerprint(b"the quick brown fox jumps over the lazy dog")?;
//! let delta = compute_delta(
//!     fingerprint.as_bytes(),
//!     b"the quick brown fox jumps over the lazy dog and sleeps",
//! )?;
//!
//! assert_eq!(delta.new, vec![79, 14, 13]);
//! assert!(delta.changed.is_empty() && delta.deleted.is_empty());
//! # Ok::<(), chunkdelta::ChunkError>(())
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use chunkdelta::{async_io::delta_async, RollingConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<F: AsyncRead, R: AsyncRead>(fp: F, src: R) -> Result<(), chunkdelta::ChunkError> {
//!     let delta = delta_async(fp, src, RollingConfig::default()).await?;
//!     println!("{} new digests", delta.new.len());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod chunker;
mod config;
mod delta;
mod error;
mod fingerprint;

mod cdc; // internal rolling hash
mod hash; // internal blake3 impl

pub mod io;

#[cfg(feature = "async-io")]
pub mod async_io;

//
// Public surface
//

pub use chunk::{Chunk, ChunkHash};
pub use chunker::{Chunker, Chunking, MIN_BOUNDARIES};
pub use config::{
    DEFAULT_ALPHABET, DEFAULT_BOUNDARY_BITS, DEFAULT_DIVISOR, DEFAULT_MIN_WINDOW_SIZE,
    DEFAULT_PRIME, DEFAULT_WINDOW_SIZE, HashConfig, RollingConfig,
};
pub use delta::{Delta, compute_delta};
pub use error::ChunkError;
pub use fingerprint::{Fingerprint, build_fingerprint};
