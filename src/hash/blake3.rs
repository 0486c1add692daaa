//! BLAKE3 hashing of chunk spans.

use crate::chunk::ChunkHash;

/// One-shot BLAKE3 hasher for chunk spans.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Blake3Hasher;

impl Blake3Hasher {
    /// Hashes a span in one shot.
    pub(crate) fn hash(data: &[u8]) -> ChunkHash {
        ChunkHash::new(blake3::hash(data).into())
    }
}
