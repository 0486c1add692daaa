//! Fingerprint of a byte stream.
//!
//! A fingerprint is the ordered sequence of chunk digests produced by the
//! chunker. Its persisted form is the digests themselves, one byte each, in
//! detection order: no header, no version tag, no length prefix.
//!
//! # Example
//!
//! ```
//! use chunkdelta::{build_fingerprint, Fingerprint};
//!
//! let fingerprint = build_fingerprint(b"hello world")?;
//! assert_eq!(fingerprint.as_bytes(), &[76, 11]);
//!
//! let mut stored = Vec::new();
//! fingerprint.write_to(&mut stored)?;
//! assert_eq!(Fingerprint::read_from(&stored[..])?, fingerprint);
//! # Ok::<(), chunkdelta::ChunkError>(())
//! ```

use std::fmt;
use std::io::{Read, Write};

use bytes::Bytes;

use crate::chunker::Chunker;
use crate::error::ChunkError;

/// Immutable ordered sequence of chunk digests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fingerprint(Bytes);

impl Fingerprint {
    /// Creates a fingerprint from raw digests.
    pub fn new(digests: impl Into<Bytes>) -> Self {
        Self(digests.into())
    }

    /// Creates a fingerprint by copying a stored digest sequence.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }

    /// Returns the digests.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the number of digests.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the fingerprint holds no digests.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the digests in detection order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Consumes the fingerprint and returns the digests.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Writes the digests verbatim to `sink`.
    pub fn write_to<W: Write>(&self, mut sink: W) -> Result<(), ChunkError> {
        sink.write_all(&self.0)?;
        sink.flush()?;
        Ok(())
    }

    /// Reads a stored fingerprint until end of input.
    ///
    /// Every byte read is a digest; the digest count is the byte count.
    pub fn read_from<R: Read>(mut source: R) -> Result<Self, ChunkError> {
        let mut digests = Vec::new();
        source.read_to_end(&mut digests)?;
        Ok(Self(digests.into()))
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Fingerprint {
    fn from(digests: Vec<u8>) -> Self {
        Self::new(digests)
    }
}

impl From<Bytes> for Fingerprint {
    fn from(digests: Bytes) -> Self {
        Self(digests)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_bytes())
    }
}

/// Computes the fingerprint of `source` with the default configuration.
///
/// # Errors
///
/// Returns [`ChunkError::ChunkingUnderflow`] for inputs too short to yield
/// two boundaries.
pub fn build_fingerprint(source: &[u8]) -> Result<Fingerprint, ChunkError> {
    Chunker::default().fingerprint(source)
}
