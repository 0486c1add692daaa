//! Rolling-hash primitives shared by the chunker.
//!
//! - [`RollingHash`] - Rabin-Karp polynomial hash over a sliding window
//! - [`BoundaryTest`] - Decides whether a window position is a chunk boundary

mod rabin_karp;

pub use rabin_karp::{BoundaryTest, RollingHash};
