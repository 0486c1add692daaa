//! Output of a single chunking run.

use bytes::Bytes;

use crate::chunk::Chunk;
use crate::config::HashConfig;
use crate::fingerprint::Fingerprint;

/// Chunk boundaries detected in a byte stream.
///
/// `boundaries[i]` is the offset just past the window whose rolling hash
/// produced `digests[i]`. Both vectors always have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunking {
    /// Offsets at which a boundary was detected, strictly increasing.
    pub boundaries: Vec<usize>,

    /// One-byte rolling digest captured at each boundary.
    pub digests: Vec<u8>,

    window_size: usize,
    boundary_bits: u32,
}

impl Chunking {
    pub(crate) fn empty(window_size: usize, boundary_bits: u32) -> Self {
        Self {
            boundaries: Vec::new(),
            digests: Vec::new(),
            window_size,
            boundary_bits,
        }
    }

    /// Returns the number of boundaries.
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    /// Returns true if no boundary was found.
    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    /// Returns the window size of the pass that produced this result.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the boundary mask bits of the pass that produced this result.
    pub fn boundary_bits(&self) -> u32 {
        self.boundary_bits
    }

    /// Returns the digests as a fingerprint.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::new(self.digests.clone())
    }

    /// Consumes the result and returns the digests as a fingerprint.
    pub fn into_fingerprint(self) -> Fingerprint {
        Fingerprint::new(self.digests)
    }

    /// Slices `source` into spans ending at each boundary.
    ///
    /// `source` must be the bytes this result was computed from. Bytes after
    /// the last boundary form a trailing span without a digest.
    pub fn spans(&self, source: Bytes, hash_config: &HashConfig) -> Vec<Chunk> {
        let mut spans = Vec::with_capacity(self.len() + 1);
        let mut start = 0;

        for (&end, &digest) in self.boundaries.iter().zip(&self.digests) {
            if end > source.len() {
                break;
            }
            let data = source.slice(start..end);
            spans.push(hashed(Chunk::new(data, start as u64), hash_config).with_digest(digest));
            start = end;
        }

        if start < source.len() {
            let data = source.slice(start..);
            spans.push(hashed(Chunk::new(data, start as u64), hash_config));
        }

        spans
    }
}

fn hashed(chunk: Chunk, hash_config: &HashConfig) -> Chunk {
    if !hash_config.enabled {
        return chunk;
    }
    #[cfg(feature = "hash-blake3")]
    let chunk = {
        let hash = crate::hash::Blake3Hasher::hash(&chunk.data);
        chunk.with_hash(hash)
    };
    chunk
}
