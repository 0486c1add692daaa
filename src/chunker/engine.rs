//! Core chunking engine - Chunker with adaptive window retry.
//!
//! The engine slides a window of `window_size` bytes across the input and
//! tests the last byte of every window. At each boundary it records
//! the offset just past the window and the low byte of the rolling hash of
//! the window.
//!
//! If a pass finds fewer than [`MIN_BOUNDARIES`] boundaries, both the window
//! size and the boundary mask bits shrink by one and the whole input is
//! scanned again. The loop ends with [`ChunkError::ChunkingUnderflow`] once
//! the window would drop below the configured minimum.
//!
//! # Example
//!
//! ```
//! use chunkdelta::{Chunker, RollingConfig};
//!
//! let chunker = Chunker::new(RollingConfig::default());
//! let chunking = chunker.chunk_bytes(b"hello world")?;
//!
//! assert_eq!(chunking.boundaries, vec![5, 8]);
//! assert_eq!(chunking.digests, vec![76, 11]);
//! # Ok::<(), chunkdelta::ChunkError>(())
//! ```

use bytes::Bytes;
use tracing::{debug, trace};

use crate::cdc::{BoundaryTest, RollingHash};
use crate::chunk::Chunk;
use crate::chunker::Chunking;
use crate::config::RollingConfig;
use crate::delta::Delta;
use crate::error::ChunkError;
use crate::fingerprint::Fingerprint;

/// Fewest boundaries a successful chunking must contain.
pub const MIN_BOUNDARIES: usize = 2;

/// A rolling-hash chunker over fully-buffered input.
///
/// `Chunker` holds only its configuration. Every call rescans its input from
/// scratch, so a single instance can be shared freely across threads.
///
/// # Determinism
///
/// The same bytes and configuration always produce the same boundaries and
/// digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chunker {
    config: RollingConfig,
}

impl Chunker {
    /// Creates a new chunker with the given configuration.
    pub fn new(config: RollingConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this chunker.
    pub fn config(&self) -> &RollingConfig {
        &self.config
    }

    /// Detects chunk boundaries in `data`.
    ///
    /// # Errors
    ///
    /// - [`ChunkError::InvalidConfig`] if the configuration does not validate
    /// - [`ChunkError::ChunkingUnderflow`] if no window size down to the
    ///   minimum yields at least two boundaries (for the default
    ///   configuration, any input shorter than 3 bytes)
    pub fn chunk_bytes(&self, data: &[u8]) -> Result<Chunking, ChunkError> {
        self.config.validate()?;

        let mut window_size = self.config.window_size();
        let mut boundary_bits = self.config.boundary_bits();

        loop {
            let chunking = self.scan(data, window_size, boundary_bits);
            trace!(
                len = data.len(),
                window_size,
                boundary_bits,
                boundaries = chunking.len(),
                "chunking pass complete"
            );

            if chunking.len() >= MIN_BOUNDARIES {
                return Ok(chunking);
            }

            if window_size <= self.config.min_window_size() {
                return Err(ChunkError::ChunkingUnderflow {
                    len: data.len(),
                    window_size,
                });
            }

            // Windows at or above the input length find nothing, so skip
            // straight to the widest one that can test a position.
            let next = if data.len() <= window_size {
                data.len()
                    .saturating_sub(1)
                    .max(self.config.min_window_size())
            } else {
                window_size - 1
            };
            let steps = u32::try_from(window_size - next).unwrap_or(u32::MAX);
            window_size = next;
            boundary_bits = boundary_bits.saturating_sub(steps);
            debug!(
                found = chunking.len(),
                window_size, boundary_bits, "too few boundaries, shrinking window"
            );
        }
    }

    /// Runs one pass over `data` with fixed parameters.
    fn scan(&self, data: &[u8], window_size: usize, boundary_bits: u32) -> Chunking {
        let mut chunking = Chunking::empty(window_size, boundary_bits);

        // Input no longer than the window has no position to test.
        if data.len() <= window_size {
            return chunking;
        }

        let test = BoundaryTest::new(
            self.config.alphabet(),
            self.config.prime(),
            self.config.divisor(),
            boundary_bits,
        );
        let mut hash = RollingHash::new(
            &data[..window_size],
            self.config.alphabet(),
            self.config.prime(),
        );

        for i in 0..data.len() - window_size {
            if test.is_boundary(data[i + window_size - 1]) {
                chunking.boundaries.push(i + window_size);
                chunking.digests.push(hash.digest());
            }
            hash.roll(data[i], data[i + window_size]);
        }

        chunking
    }

    /// Computes the fingerprint of `data`.
    pub fn fingerprint(&self, data: &[u8]) -> Result<Fingerprint, ChunkError> {
        Ok(self.chunk_bytes(data)?.into_fingerprint())
    }

    /// Chunks `data` and classifies its digests against `fingerprint`.
    pub fn delta(&self, fingerprint: &[u8], data: &[u8]) -> Result<Delta, ChunkError> {
        let chunks = self.chunk_bytes(data)?.digests;
        Ok(Delta::classify(fingerprint, &chunks))
    }

    /// Chunks `data` and returns zero-copy spans, hashed per the config.
    pub fn chunks(&self, data: Bytes) -> Result<Vec<Chunk>, ChunkError> {
        let chunking = self.chunk_bytes(&data)?;
        Ok(chunking.spans(data, self.config.hash_config()))
    }
}
