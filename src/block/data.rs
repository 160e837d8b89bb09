//! Block types - the units the chain is built from and verified over.

use bytes::Bytes;
use std::fmt;

use super::Digest;

/// An ordered chunk of raw bytes from the source file.
///
/// On the construction side a `Block` holds plain file content produced by
/// the chunker. On the verification side it holds a block exactly as
/// received off the wire, trailing digest included.
///
/// # Example
///
/// ```
/// use chainseal::Block;
/// use bytes::Bytes;
///
/// let block = Block::new(0, Bytes::from_static(b"hello world"));
/// assert_eq!(block.len(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Zero-based position in the block sequence.
    pub index: u64,

    /// The block payload (may be owned or borrowed).
    pub data: Bytes,
}

impl Block {
    /// Creates a new block with the given index and payload.
    pub fn new(index: u64, data: impl Into<Bytes>) -> Self {
        Self {
            index,
            data: data.into(),
        }
    }

    /// Returns the length of the payload in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the block has no payload.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the block and returns the payload.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block #{} ({} bytes)", self.index, self.len())
    }
}

/// A block with its successor's digest appended, ready for distribution.
///
/// The payload is raw content immediately followed by 32 raw digest bytes;
/// the final block of a chain carries no trailing digest. That layout is
/// also the wire format: no length prefix, no delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedBlock {
    index: u64,
    payload: Bytes,
    last: bool,
}

impl AugmentedBlock {
    pub(crate) fn new(index: u64, payload: Bytes, last: bool) -> Self {
        Self {
            index,
            payload,
            last,
        }
    }

    /// Returns the zero-based position in the block sequence.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Returns the full payload: content plus trailing digest, if any.
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Returns the payload length in bytes.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Returns true if this is the final block of its chain.
    pub fn is_last(&self) -> bool {
        self.last
    }

    /// Returns the content with the trailing digest stripped.
    ///
    /// Zero-copy slice of the payload.
    pub fn content(&self) -> Bytes {
        if self.last {
            self.payload.clone()
        } else {
            self.payload.slice(..self.payload.len() - Digest::SIZE)
        }
    }

    /// Returns the embedded digest of the next block's payload, or `None`
    /// for the final block.
    pub fn trailing_digest(&self) -> Option<Digest> {
        if self.last {
            return None;
        }
        Digest::from_slice(&self.payload[self.payload.len() - Digest::SIZE..])
    }

    /// Consumes the block and returns the full payload.
    pub fn into_payload(self) -> Bytes {
        self.payload
    }
}

impl fmt::Display for AugmentedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AugmentedBlock #{} ({} bytes", self.index, self.len())?;
        if self.last {
            write!(f, ", last")?;
        }
        write!(f, ")")
    }
}

impl From<AugmentedBlock> for Block {
    /// Re-views an augmented block as a wire block for verification.
    fn from(block: AugmentedBlock) -> Self {
        Block::new(block.index, block.payload)
    }
}

/// The output of chain construction: the root digest plus the augmented
/// block sequence.
///
/// The root digest is the single value that must reach the receiver over an
/// authenticated channel; the blocks travel over any untrusted transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    root: Digest,
    blocks: Vec<AugmentedBlock>,
}

impl Chain {
    pub(crate) fn new(root: Digest, blocks: Vec<AugmentedBlock>) -> Self {
        Self { root, blocks }
    }

    /// Returns the root digest.
    pub fn root(&self) -> Digest {
        self.root
    }

    /// Returns the augmented blocks in forward file order.
    pub fn blocks(&self) -> &[AugmentedBlock] {
        &self.blocks
    }

    /// Returns the number of blocks in the chain.
    ///
    /// Never zero: building over zero blocks is an error.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Consumes the chain and returns the blocks for distribution.
    pub fn into_blocks(self) -> Vec<AugmentedBlock> {
        self.blocks
    }
}
