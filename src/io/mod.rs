//! Reader/writer boundary.
//!
//! The core never touches storage. These helpers read whole inputs from any
//! [`Read`], run the chunker, and persist fingerprints to any [`Write`].
//! I/O failures surface as [`ChunkError::Io`] and nothing is written when
//! chunking fails.
//!
//! # Example
//!
//! ```
//! use chunkdelta::{io, RollingConfig};
//!
//! let mut stored = Vec::new();
//! io::signature(&b"hello world"[..], &mut stored, RollingConfig::default())?;
//!
//! let delta = io::delta(&stored[..], &b"hello world"[..], RollingConfig::default())?;
//! assert!(delta.is_unchanged());
//! # Ok::<(), chunkdelta::ChunkError>(())
//! ```

use std::io::{Read, Write};

use crate::chunker::Chunker;
use crate::config::RollingConfig;
use crate::delta::Delta;
use crate::error::ChunkError;
use crate::fingerprint::Fingerprint;

/// Fingerprints everything readable from `source` and writes the digests to
/// `sink`.
///
/// Returns the fingerprint that was written.
pub fn signature<R: Read, W: Write>(
    mut source: R,
    sink: W,
    config: RollingConfig,
) -> Result<Fingerprint, ChunkError> {
    let mut data = Vec::new();
    source.read_to_end(&mut data)?;

    let fingerprint = Chunker::new(config).fingerprint(&data)?;
    fingerprint.write_to(sink)?;
    Ok(fingerprint)
}

/// Reads a stored fingerprint and a new source, and classifies the source's
/// chunk digests against the fingerprint.
pub fn delta<F: Read, R: Read>(
    fingerprint: F,
    mut source: R,
    config: RollingConfig,
) -> Result<Delta, ChunkError> {
    let fingerprint = Fingerprint::read_from(fingerprint)?;

    let mut data = Vec::new();
    source.read_to_end(&mut data)?;

    Chunker::new(config).delta(fingerprint.as_bytes(), &data)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
        }
    }

    #[test]
    fn test_signature_writes_digests() {
        let mut stored = Vec::new();
        let fingerprint =
            signature(&b"hello world"[..], &mut stored, RollingConfig::default()).unwrap();
        assert_eq!(stored, vec![76, 11]);
        assert_eq!(fingerprint.as_bytes(), &stored[..]);
    }

    #[test]
    fn test_signature_underflow_writes_nothing() {
        let mut stored = Vec::new();
        let err = signature(&b"ab"[..], &mut stored, RollingConfig::default()).unwrap_err();
        assert!(matches!(err, ChunkError::ChunkingUnderflow { .. }));
        assert!(stored.is_empty());
    }

    #[test]
    fn test_read_failures_propagate() {
        let err = signature(FailingReader, Vec::new(), RollingConfig::default()).unwrap_err();
        assert!(matches!(err, ChunkError::Io(_)));

        let err = delta(FailingReader, &b"hello world"[..], RollingConfig::default()).unwrap_err();
        assert!(matches!(err, ChunkError::Io(_)));

        let err = delta(&[76u8, 11][..], FailingReader, RollingConfig::default()).unwrap_err();
        assert!(matches!(err, ChunkError::Io(_)));
    }
}
