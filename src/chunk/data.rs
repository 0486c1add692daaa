//! The Chunk type - a span of the source ending at a detected boundary.

use bytes::Bytes;
use std::fmt;

use super::ChunkHash;

/// A span of the source stream between two chunk boundaries.
///
/// Spans ending at a detected boundary carry the one-byte rolling digest
/// captured there. The trailing remainder after the last boundary has no
/// digest: it never closed a chunk, so it is not part of the fingerprint.
///
/// # Example
///
/// ```
/// use chunkdelta::Chunk;
/// use bytes::Bytes;
///
/// let chunk = Chunk::new(Bytes::from_static(b"hello world"), 0).with_digest(76);
///
/// assert_eq!(chunk.len(), 11);
/// assert_eq!(chunk.digest, Some(76));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk data, zero-copy sliced from the source.
    pub data: Bytes,

    /// The offset of the first byte in the source.
    pub offset: u64,

    /// The rolling digest captured at the closing boundary.
    pub digest: Option<u8>,

    /// The strong content hash of this span (if computed).
    pub hash: Option<ChunkHash>,
}

impl Chunk {
    /// Creates a new span starting at `offset`.
    pub fn new(data: impl Into<Bytes>, offset: u64) -> Self {
        Self {
            data: data.into(),
            offset,
            digest: None,
            hash: None,
        }
    }

    /// Sets the boundary digest.
    pub fn with_digest(mut self, digest: u8) -> Self {
        self.digest = Some(digest);
        self
    }

    /// Sets the strong hash.
    pub fn with_hash(mut self, hash: ChunkHash) -> Self {
        self.hash = Some(hash);
        self
    }

    /// Returns the length of the chunk data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if this span follows the last boundary.
    pub fn is_trailing(&self) -> bool {
        self.digest.is_none()
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the chunk as a range of source offsets.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.offset..self.end()
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({} bytes @ {}", self.len(), self.offset)?;
        if let Some(digest) = self.digest {
            write!(f, ", digest={}", digest)?;
        }
        if let Some(hash) = self.hash {
            write!(f, ", hash={}", hash)?;
        }
        write!(f, ")")
    }
}
