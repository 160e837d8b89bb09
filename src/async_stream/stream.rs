//! Async stream adapter for fixed-size block reading.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use chainseal::{block_stream, ChainConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), chainseal::ChainError> {
//!     let mut stream = block_stream(reader, ChainConfig::default());
//!
//!     while let Some(block) = stream.next().await {
//!         let block = block?;
//!         println!("block #{}: {} bytes", block.index, block.len());
//!     }
//!     Ok(())
//! }
//! ```

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::block::Block;
use crate::config::ChainConfig;
use crate::error::ChainError;

pin_project! {
    /// A stream that yields fixed-size blocks from an async reader.
    ///
    /// This uses `futures_io::AsyncRead` which is runtime-agnostic.
    /// Works with tokio (via `tokio_util::compat`), async-std, smol, or any
    /// futures-compatible runtime.
    ///
    /// Blocks are exactly the configured size except possibly the final
    /// one, which is emitted as-is when the reader signals end of stream.
    pub struct BlockStream<R> {
        #[pin]
        reader: R,
        block_size: usize,
        read_buf: Vec<u8>,
        pending: Vec<u8>,
        index: u64,
        finished: bool,
    }
}

impl<R: AsyncRead> Stream for BlockStream<R> {
    type Item = Result<Block, ChainError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        loop {
            // Emit a full block if we have one buffered.
            if this.pending.len() >= *this.block_size {
                let data = Bytes::copy_from_slice(&this.pending[..*this.block_size]);
                let rest = this.pending.len() - *this.block_size;
                this.pending.copy_within(*this.block_size.., 0);
                this.pending.truncate(rest);

                let block = Block::new(*this.index, data);
                *this.index += 1;
                return Poll::Ready(Some(Ok(block)));
            }

            match this.reader.as_mut().poll_read(cx, this.read_buf.as_mut_slice()) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(ChainError::Io(e))));
                }
                Poll::Ready(Ok(0)) => {
                    // End of stream - flush the partial tail, if any.
                    *this.finished = true;
                    if this.pending.is_empty() {
                        return Poll::Ready(None);
                    }
                    let data = Bytes::copy_from_slice(this.pending);
                    this.pending.clear();

                    let block = Block::new(*this.index, data);
                    *this.index += 1;
                    return Poll::Ready(Some(Ok(block)));
                }
                Poll::Ready(Ok(n)) => {
                    this.pending.extend_from_slice(&this.read_buf[..n]);
                }
            }
        }
    }
}

/// Creates a block stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O. For tokio
/// readers, convert with `tokio_util::compat`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use chainseal::{block_stream, ChainConfig};
///
/// let file = tokio::fs::File::open("file").await?;
/// let stream = block_stream(file.compat(), ChainConfig::default());
/// ```
///
/// # Returns
///
/// A [`BlockStream`] that implements `Stream<Item = Result<Block, ChainError>>`,
/// yielding blocks in forward file order with sequential indices.
pub fn block_stream<R: AsyncRead>(reader: R, config: ChainConfig) -> BlockStream<R> {
    BlockStream {
        reader,
        block_size: config.block_size(),
        read_buf: vec![0u8; 8192],
        pending: Vec::with_capacity(config.block_size()),
        index: 0,
        finished: false,
    }
}
