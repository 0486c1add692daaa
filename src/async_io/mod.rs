//! Async reader boundary.
//!
//! This module mirrors [`crate::io`] over `futures_io::AsyncRead`, so it is
//! runtime-agnostic and works with tokio (through `tokio-util` compat),
//! async-std, smol, and others. Inputs are read fully before chunking.
//!
//! - [`signature_async`] - Fingerprints an async reader
//! - [`delta_async`] - Classifies an async source against a stored fingerprint
//! - [`read_to_end`] - Future buffering a whole reader
//!
//! This module requires the `async-io` feature to be enabled.

mod read;

pub use read::{ReadToEnd, delta_async, read_to_end, signature_async};
