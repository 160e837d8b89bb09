//! Fixed-size chunking engine - Chunker and BlockIter.
//!
//! This module partitions file content into the ordered, fixed-size blocks
//! the chain is built over. It provides two entry points:
//!
//! - [`Chunker::split`] - Splits an in-memory byte sequence
//! - [`Chunker::blocks`] - Iterator that yields blocks from a [`std::io::Read`] source
//!
//! # Example
//!
//! ```
//! use chainseal::{ChainConfig, Chunker};
//!
//! let chunker = Chunker::new(ChainConfig::new(1024)?);
//! let blocks = chunker.split(&vec![0u8; 2500]);
//!
//! assert_eq!(blocks.len(), 3);
//! assert_eq!(blocks[2].len(), 452);
//! # Ok::<(), chainseal::ChainError>(())
//! ```

use std::io::Read;

use bytes::Bytes;

use crate::block::Block;
use crate::config::ChainConfig;
use crate::error::ChainError;

/// Splits byte sequences into consecutive fixed-size blocks.
///
/// Blocks are non-overlapping runs of exactly the configured block size;
/// the final block is shorter iff the input length is not a multiple of the
/// block size. No block is empty unless the input itself is empty, in which
/// case no blocks are produced at all.
///
/// Splitting is pure: identical input always yields identical blocks.
///
/// # Example
///
/// ```
/// use chainseal::{ChainConfig, Chunker};
///
/// let chunker = Chunker::new(ChainConfig::default());
/// let blocks = chunker.split(b"hello world");
/// assert_eq!(blocks.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChainConfig,
}

impl Chunker {
    /// Creates a new chunker with the given configuration.
    pub fn new(config: ChainConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this chunker.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Splits `data` into ordered fixed-size blocks.
    ///
    /// Empty input produces an empty sequence. Indices are assigned in
    /// forward file order starting at zero.
    pub fn split(&self, data: &[u8]) -> Vec<Block> {
        if data.is_empty() {
            return Vec::new();
        }

        data.chunks(self.config.block_size())
            .enumerate()
            .map(|(index, slice)| Block::new(index as u64, Bytes::copy_from_slice(slice)))
            .collect()
    }

    /// Creates a block iterator over a reader.
    ///
    /// Reads lazily, one block at a time; useful when the file should not
    /// be held in memory whole. I/O errors surface as [`ChainError::Io`]
    /// and end the iteration.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Cursor;
    /// use chainseal::{ChainConfig, Chunker};
    ///
    /// let chunker = Chunker::new(ChainConfig::new(4)?);
    /// let blocks: Vec<_> = chunker
    ///     .blocks(Cursor::new(b"abcdefghij"))
    ///     .collect::<Result<_, _>>()?;
    ///
    /// assert_eq!(blocks.len(), 3);
    /// # Ok::<(), chainseal::ChainError>(())
    /// ```
    pub fn blocks<R: Read>(&self, reader: R) -> BlockIter<R> {
        BlockIter {
            reader,
            block_size: self.config.block_size(),
            index: 0,
            done: false,
        }
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(ChainConfig::default())
    }
}

/// Iterator that reads fixed-size blocks off a [`std::io::Read`] source.
///
/// Yields `Result<Block, ChainError>`. Short reads are retried until the
/// block is full or the stream ends; a final partial block is yielded
/// as-is. After an error or end of stream the iterator is fused.
#[derive(Debug)]
pub struct BlockIter<R> {
    reader: R,
    block_size: usize,
    index: u64,
    done: bool,
}

impl<R: Read> Iterator for BlockIter<R> {
    type Item = Result<Block, ChainError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = vec![0u8; self.block_size];
        let mut filled = 0;

        while filled < self.block_size {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(ChainError::Io(e)));
                }
            }
        }

        if filled == 0 {
            self.done = true;
            return None;
        }

        if filled < self.block_size {
            // Stream ended inside this block: it is the last one.
            self.done = true;
            buf.truncate(filled);
        }

        let block = Block::new(self.index, Bytes::from(buf));
        self.index += 1;
        Some(Ok(block))
    }
}
