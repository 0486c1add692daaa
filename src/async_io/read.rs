//! Async read adapters for fingerprinting.
//!
//! # Example
//!
//! ```ignore
//! use chunkdelta::{RollingConfig, async_io::signature_async};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead>(reader: R) -> Result<(), chunkdelta::ChunkError> {
//!     let fingerprint = signature_async(reader, RollingConfig::default()).await?;
//!     println!("{} digests", fingerprint.len());
//!     Ok(())
//! }
//! ```

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::chunker::Chunker;
use crate::config::RollingConfig;
use crate::delta::Delta;
use crate::error::ChunkError;
use crate::fingerprint::Fingerprint;

const READ_BUFFER_SIZE: usize = 8192;

pin_project! {
    /// A future that reads an async reader to completion.
    ///
    /// Resolves to every byte read, or the first I/O error other than
    /// `Interrupted`.
    pub struct ReadToEnd<R> {
        #[pin]
        reader: R,
        data: Vec<u8>,
        buffer: Box<[u8]>,
    }
}

/// Creates a future that buffers everything readable from `reader`.
pub fn read_to_end<R: AsyncRead>(reader: R) -> ReadToEnd<R> {
    ReadToEnd {
        reader,
        data: Vec::new(),
        buffer: vec![0u8; READ_BUFFER_SIZE].into_boxed_slice(),
    }
}

impl<R: AsyncRead> Future for ReadToEnd<R> {
    type Output = io::Result<Vec<u8>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            match ready!(this.reader.as_mut().poll_read(cx, &mut this.buffer[..])) {
                Ok(0) => return Poll::Ready(Ok(std::mem::take(this.data))),
                Ok(n) => this.data.extend_from_slice(&this.buffer[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Poll::Ready(Err(e)),
            }
        }
    }
}

/// Fingerprints everything readable from `reader`.
///
/// Persisting the result is left to the caller; see
/// [`Fingerprint::as_bytes`] for the wire form.
pub async fn signature_async<R: AsyncRead>(
    reader: R,
    config: RollingConfig,
) -> Result<Fingerprint, ChunkError> {
    let data = read_to_end(reader).await?;
    Chunker::new(config).fingerprint(&data)
}

/// Reads a stored fingerprint and a new source, and classifies the source's
/// chunk digests against the fingerprint.
pub async fn delta_async<F: AsyncRead, R: AsyncRead>(
    fingerprint: F,
    source: R,
    config: RollingConfig,
) -> Result<Delta, ChunkError> {
    let fingerprint = read_to_end(fingerprint).await?;
    let data = read_to_end(source).await?;
    Chunker::new(config).delta(&fingerprint, &data)
}
