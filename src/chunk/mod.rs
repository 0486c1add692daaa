//! Chunk types.
//!
//! - [`Chunk`] - Span of the source between two boundaries, with its digest
//! - [`ChunkHash`] - 32-byte strong hash of a span

mod data;
mod hash;

pub use data::Chunk;
pub use hash::ChunkHash;
