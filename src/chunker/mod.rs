//! Chunking engine for fully-buffered byte streams.
//!
//! - [`Chunker`] - Adaptive rolling-hash boundary detector
//! - [`Chunking`] - Boundaries and digests produced by one run

mod chunking;
mod engine;

pub use chunking::Chunking;
pub use engine::{Chunker, MIN_BOUNDARIES};
