//! Chain construction - the backward pass over a block sequence.
//!
//! [`ChainBuilder`] consumes blocks in reverse order, appending to each
//! block the digest of everything after it, and surfaces the digest of the
//! first augmented block as the chain's root.
//!
//! # Example
//!
//! ```
//! use chainseal::{Blake3Hasher, ChainBuilder, ChainConfig};
//!
//! let builder = ChainBuilder::<Blake3Hasher>::new();
//! let chain = builder.seal(&vec![0u8; 2500], &ChainConfig::default())?;
//!
//! println!("root: {}", chain.root());
//! assert_eq!(chain.block_count(), 3);
//! # Ok::<(), chainseal::ChainError>(())
//! ```

use std::marker::PhantomData;

use crate::block::{AugmentedBlock, Block, Chain, Digest};
use crate::chunker::Chunker;
use crate::config::ChainConfig;
use crate::error::ChainError;
use crate::hash::BlockHasher;
use crate::util;

/// Builds a hash chain over an ordered block sequence.
///
/// Construction walks the blocks from last to first. Each block's augmented
/// payload is its content followed by the digest of its successor's
/// augmented payload; the last block's payload is its content alone. The
/// digest of the first augmented payload is the root - the one value a
/// receiver must obtain over an authenticated channel.
///
/// Building is deterministic and does not mutate block content; identical
/// input yields a byte-identical chain.
///
/// The hasher is a type parameter so builder and verifier can be pinned to
/// the same primitive at compile time.
#[derive(Debug, Clone)]
pub struct ChainBuilder<H: BlockHasher> {
    _hasher: PhantomData<H>,
}

impl<H: BlockHasher> Default for ChainBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: BlockHasher> ChainBuilder<H> {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            _hasher: PhantomData,
        }
    }

    /// Builds a chain over `blocks`, assumed already in forward file order.
    ///
    /// Returns [`ChainError::EmptyInput`] for an empty sequence: a chain
    /// over nothing has no authentication meaning.
    pub fn build(&self, blocks: Vec<Block>) -> Result<Chain, ChainError> {
        let mut augmented: Vec<AugmentedBlock> = Vec::with_capacity(blocks.len());
        let mut trailing: Option<Digest> = None;

        for block in blocks.into_iter().rev() {
            let payload = match &trailing {
                // The last file block travels as-is, no digest appended.
                None => block.data,
                Some(digest) => util::append_digest(&block.data, digest),
            };

            let digest = H::digest(&payload);
            augmented.push(AugmentedBlock::new(block.index, payload, trailing.is_none()));
            trailing = Some(digest);
        }

        // The digest carried out of the loop covers the first augmented
        // block: it is the root.
        let root = match trailing {
            Some(digest) => digest,
            None => return Err(ChainError::EmptyInput),
        };

        augmented.reverse();
        Ok(Chain::new(root, augmented))
    }

    /// Splits `data` into blocks and builds the chain in one call.
    ///
    /// Equivalent to [`Chunker::split`] followed by [`ChainBuilder::build`];
    /// empty input is [`ChainError::EmptyInput`].
    pub fn seal(&self, data: &[u8], config: &ChainConfig) -> Result<Chain, ChainError> {
        self.build(Chunker::new(*config).split(data))
    }
}
