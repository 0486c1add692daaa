//! Error types for chunkdelta.

use std::fmt;

/// Errors that can occur while fingerprinting or comparing byte streams.
#[derive(Debug)]
pub enum ChunkError {
    /// An I/O error occurred while reading input or writing a fingerprint.
    Io(std::io::Error),

    /// The adaptive retry shrank the window to nothing without finding
    /// at least two chunk boundaries.
    ChunkingUnderflow {
        /// Length of the input in bytes.
        len: usize,
        /// The last window size that was attempted.
        window_size: usize,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for ChunkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkError::Io(e) => write!(f, "io error: {}", e),
            ChunkError::ChunkingUnderflow { len, window_size } => {
                write!(
                    f,
                    "chunking underflow: {} bytes yield fewer than 2 boundaries (last window {})",
                    len, window_size
                )
            }
            ChunkError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for ChunkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChunkError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ChunkError {
    fn from(e: std::io::Error) -> Self {
        ChunkError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ChunkError = io_err.into();
        assert!(matches!(err, ChunkError::Io(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = ChunkError::ChunkingUnderflow {
            len: 2,
            window_size: 1,
        };
        assert!(err.to_string().contains("chunking underflow"));
        assert!(err.source().is_none());

        let err = ChunkError::InvalidConfig { message: "bad" };
        assert_eq!(err.to_string(), "invalid config: bad");
    }
}
