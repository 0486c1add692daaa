//! Delta classification between a stored fingerprint and fresh chunks.
//!
//! - [`Delta`] - The fingerprint, the new chunk digests and their buckets
//! - [`compute_delta`] - Chunks a new source and classifies it

mod classify;

pub use classify::Delta;

use crate::chunker::Chunker;
use crate::error::ChunkError;

/// Chunks `new_source` with the default configuration and classifies its
/// digests against `fingerprint`.
///
/// `fingerprint` is the stored digest sequence, one byte per digest.
///
/// # Example
///
/// ```
/// use chunkdelta::{build_fingerprint, compute_delta};
///
/// let fingerprint = build_fingerprint(b"hello world")?;
/// let delta = compute_delta(fingerprint.as_bytes(), b"hello world")?;
/// assert!(delta.is_unchanged());
/// # Ok::<(), chunkdelta::ChunkError>(())
/// ```
pub fn compute_delta(fingerprint: &[u8], new_source: &[u8]) -> Result<Delta, ChunkError> {
    Chunker::default().delta(fingerprint, new_source)
}
