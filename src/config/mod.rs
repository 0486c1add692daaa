//! Configuration for the rolling-hash chunker.
//!
//! - [`RollingConfig`] - Hash constants, starting window and adaptive retry floor
//! - [`HashConfig`] - Strong hash computation for chunk spans

use crate::error::ChunkError;

/// Default alphabet size (the polynomial base of the rolling hash).
pub const DEFAULT_ALPHABET: u32 = 26;

/// Default prime modulus for all hash arithmetic.
pub const DEFAULT_PRIME: u32 = 101;

/// Default divisor applied to the boundary fingerprint before masking.
pub const DEFAULT_DIVISOR: u32 = 10;

/// Default starting window size in bytes.
pub const DEFAULT_WINDOW_SIZE: usize = 4;

/// Default starting number of boundary mask bits.
pub const DEFAULT_BOUNDARY_BITS: u32 = 3;

/// Smallest window the adaptive retry may shrink to.
pub const DEFAULT_MIN_WINDOW_SIZE: usize = 1;

/// Configuration for rolling-hash chunking.
///
/// The arithmetic constants (`alphabet`, `prime`, `divisor`) are fixed for the
/// lifetime of a fingerprint: two fingerprints are only comparable when they
/// were produced with the same values.
///
/// `window_size` and `boundary_bits` are *starting* values. When an attempt
/// finds fewer than two boundaries, the chunker decrements both and tries
/// again, down to `min_window_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollingConfig {
    alphabet: u32,
    prime: u32,
    divisor: u32,
    window_size: usize,
    boundary_bits: u32,
    min_window_size: usize,
    hash_config: HashConfig,
}

impl RollingConfig {
    /// Creates a configuration with the given starting window and mask bits.
    ///
    /// Returns error if the window is zero or the mask would not fit in 32 bits.
    pub fn new(window_size: usize, boundary_bits: u32) -> Result<Self, ChunkError> {
        let config = Self {
            window_size,
            boundary_bits,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the alphabet size.
    pub fn with_alphabet(mut self, alphabet: u32) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Sets the prime modulus.
    pub fn with_prime(mut self, prime: u32) -> Self {
        self.prime = prime;
        self
    }

    /// Sets the boundary divisor.
    pub fn with_divisor(mut self, divisor: u32) -> Self {
        self.divisor = divisor;
        self
    }

    /// Sets the starting window size.
    pub fn with_window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    /// Sets the starting boundary mask bits.
    pub fn with_boundary_bits(mut self, bits: u32) -> Self {
        self.boundary_bits = bits;
        self
    }

    /// Sets the smallest window the adaptive retry may use.
    pub fn with_min_window_size(mut self, size: usize) -> Self {
        self.min_window_size = size;
        self
    }

    /// Sets the hash configuration.
    pub fn with_hash_config(mut self, config: HashConfig) -> Self {
        self.hash_config = config;
        self
    }

    /// Returns the alphabet size.
    pub fn alphabet(&self) -> u32 {
        self.alphabet
    }

    /// Returns the prime modulus.
    pub fn prime(&self) -> u32 {
        self.prime
    }

    /// Returns the boundary divisor.
    pub fn divisor(&self) -> u32 {
        self.divisor
    }

    /// Returns the starting window size.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the starting boundary mask bits.
    pub fn boundary_bits(&self) -> u32 {
        self.boundary_bits
    }

    /// Returns the minimum window size.
    pub fn min_window_size(&self) -> usize {
        self.min_window_size
    }

    /// Returns the hash configuration.
    pub fn hash_config(&self) -> &HashConfig {
        &self.hash_config
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.alphabet == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "alphabet must be non-zero",
            });
        }

        if self.prime < 2 {
            return Err(ChunkError::InvalidConfig {
                message: "prime modulus must be at least 2",
            });
        }

        if self.divisor == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "divisor must be non-zero",
            });
        }

        if self.window_size == 0 || self.min_window_size == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "window sizes must be non-zero",
            });
        }

        if self.min_window_size > self.window_size {
            return Err(ChunkError::InvalidConfig {
                message: "min_window_size cannot be greater than window_size",
            });
        }

        if self.boundary_bits >= u32::BITS {
            return Err(ChunkError::InvalidConfig {
                message: "boundary_bits must be less than 32",
            });
        }

        Ok(())
    }
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET,
            prime: DEFAULT_PRIME,
            divisor: DEFAULT_DIVISOR,
            window_size: DEFAULT_WINDOW_SIZE,
            boundary_bits: DEFAULT_BOUNDARY_BITS,
            min_window_size: DEFAULT_MIN_WINDOW_SIZE,
            hash_config: HashConfig::default(),
        }
    }
}

/// Configuration for chunk span hashing.
///
/// Controls whether BLAKE3 hashes are computed for each chunk span. Has no
/// effect on digests or fingerprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashConfig {
    /// Whether to compute BLAKE3 hashes.
    pub enabled: bool,
}

impl HashConfig {
    /// Creates a new hash configuration.
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enables hashing.
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Disables hashing.
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
