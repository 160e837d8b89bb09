//! Incremental verification - the forward pass over arriving blocks.
//!
//! [`ChainVerifier`] holds a single expected-digest register seeded with
//! the trusted root and advances it one block at a time, producing a
//! [`Verdict`] per block without buffering the rest of the file.
//!
//! # Example
//!
//! ```
//! use chainseal::{Blake3Hasher, ChainBuilder, ChainConfig, ChainVerifier, Verdict};
//!
//! let chain = ChainBuilder::<Blake3Hasher>::new()
//!     .seal(&vec![7u8; 2500], &ChainConfig::default())?;
//!
//! let mut verifier = ChainVerifier::<Blake3Hasher>::with_total_blocks(
//!     chain.root(),
//!     chain.block_count() as u64,
//! );
//!
//! for block in chain.into_blocks() {
//!     match verifier.verify(block.into())? {
//!         Verdict::Authenticated { content } => { /* safe to consume */ let _ = content; }
//!         Verdict::Rejected => break,
//!     }
//! }
//! assert!(verifier.is_completed());
//! # Ok::<(), chainseal::ChainError>(())
//! ```

use std::marker::PhantomData;

use bytes::Bytes;

use crate::block::{Block, Digest};
use crate::error::ChainError;
use crate::hash::BlockHasher;

/// The outcome of verifying a single block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The block is authentic; `content` is safe to consume immediately.
    Authenticated {
        /// The block's content with the trailing digest stripped.
        content: Bytes,
    },

    /// The block does not match the expected digest, or the session had
    /// already ended. The session is failed; no later block can recover it.
    Rejected,
}

impl Verdict {
    /// Returns true for [`Verdict::Authenticated`].
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Verdict::Authenticated { .. })
    }

    /// Returns the authenticated content, or `None` if rejected.
    pub fn into_content(self) -> Option<Bytes> {
        match self {
            Verdict::Authenticated { content } => Some(content),
            Verdict::Rejected => None,
        }
    }
}

/// Per-session verification state.
///
/// `Completed` and `Failed` are terminal; every call in a terminal state
/// rejects without re-hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Active { expected: Digest, next_index: u64 },
    Completed,
    Failed,
}

/// Verifies blocks one at a time against a trusted root digest.
///
/// A successful verdict on block `i` authenticates both its content and the
/// digest it carries, hence transitively every later block's place in the
/// chain - collision resistance of the hash primitive is what makes forged
/// substitutions computationally infeasible.
///
/// Blocks must be presented in strictly increasing index order; the
/// verifier has no mechanism to reorder or buffer. One session verifies one
/// file; `&mut self` makes a session single-writer by construction.
/// Dropping a session mid-stream simply leaves the tail unverified, which
/// is an expected outcome, not an error.
#[derive(Debug, Clone)]
pub struct ChainVerifier<H: BlockHasher> {
    state: SessionState,
    total_blocks: Option<u64>,
    _hasher: PhantomData<H>,
}

impl<H: BlockHasher> ChainVerifier<H> {
    /// Starts a session from the trusted root digest.
    ///
    /// The caller must flag the final block via the `is_last` argument of
    /// [`verify_next`](Self::verify_next); use
    /// [`with_total_blocks`](Self::with_total_blocks) to infer it instead.
    pub fn new(root: Digest) -> Self {
        Self {
            state: SessionState::Active {
                expected: root,
                next_index: 0,
            },
            total_blocks: None,
            _hasher: PhantomData,
        }
    }

    /// Starts a session that knows the block count up front.
    ///
    /// The count is used only to recognize the final block, which carries
    /// no trailing digest; [`verify`](Self::verify) then needs no explicit
    /// last-block flag.
    pub fn with_total_blocks(root: Digest, total_blocks: u64) -> Self {
        Self {
            total_blocks: Some(total_blocks),
            ..Self::new(root)
        }
    }

    /// Verifies the next block of the session.
    ///
    /// `block.data` must be the payload exactly as transmitted - content
    /// plus trailing digest, if any. `is_last` tells the verifier this
    /// block closes the file and therefore carries no trailing digest.
    ///
    /// Returns [`Verdict::Rejected`] on a digest mismatch and fails the
    /// session permanently; returns [`ChainError::OutOfOrder`] (also fatal)
    /// if `block.index` is not the next expected index. In a terminal state
    /// the call returns `Rejected` immediately without hashing.
    pub fn verify_next(&mut self, block: Block, is_last: bool) -> Result<Verdict, ChainError> {
        let (expected, next_index) = match self.state {
            SessionState::Active {
                expected,
                next_index,
            } => (expected, next_index),
            SessionState::Completed | SessionState::Failed => return Ok(Verdict::Rejected),
        };

        if block.index != next_index {
            self.state = SessionState::Failed;
            return Err(ChainError::OutOfOrder {
                expected: next_index,
                got: block.index,
            });
        }

        if H::digest(&block.data) != expected {
            self.state = SessionState::Failed;
            return Ok(Verdict::Rejected);
        }

        if is_last {
            self.state = SessionState::Completed;
            return Ok(Verdict::Authenticated {
                content: block.data,
            });
        }

        // A non-final block must carry its successor's digest; anything
        // shorter contradicts the caller's length signalling and the chain
        // cannot continue past it.
        if block.data.len() < Digest::SIZE {
            self.state = SessionState::Failed;
            return Ok(Verdict::Rejected);
        }

        let split = block.data.len() - Digest::SIZE;
        let mut next_expected = [0u8; Digest::SIZE];
        next_expected.copy_from_slice(&block.data[split..]);

        self.state = SessionState::Active {
            expected: Digest::new(next_expected),
            next_index: next_index + 1,
        };

        Ok(Verdict::Authenticated {
            content: block.data.slice(..split),
        })
    }

    /// Verifies the next block, inferring the last-block flag.
    ///
    /// Requires the session to have been started with
    /// [`with_total_blocks`](Self::with_total_blocks); otherwise returns
    /// [`ChainError::InvalidConfig`] without touching the session.
    pub fn verify(&mut self, block: Block) -> Result<Verdict, ChainError> {
        let total = self.total_blocks.ok_or(ChainError::InvalidConfig {
            message: "total block count required to infer the final block",
        })?;
        let is_last = block.index + 1 == total;
        self.verify_next(block, is_last)
    }

    /// Returns true while the session can still accept blocks.
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    /// Returns true once the declared final block has been authenticated.
    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// Returns true once the session has permanently failed.
    pub fn is_failed(&self) -> bool {
        self.state == SessionState::Failed
    }

    /// Returns the index the verifier expects next, or `None` in a
    /// terminal state.
    pub fn next_index(&self) -> Option<u64> {
        match self.state {
            SessionState::Active { next_index, .. } => Some(next_index),
            _ => None,
        }
    }
}

#[cfg(test)]
#[cfg(feature = "hash-blake3")]
mod tests {
    use super::*;
    use crate::block::Chain;
    use crate::builder::ChainBuilder;
    use crate::config::ChainConfig;
    use crate::hash::Blake3Hasher;

    fn seal(data: &[u8], block_size: usize) -> Chain {
        ChainBuilder::<Blake3Hasher>::new()
            .seal(data, &ChainConfig::new(block_size).unwrap())
            .unwrap()
    }

    fn wire_blocks(chain: &Chain) -> Vec<Block> {
        chain.blocks().iter().cloned().map(Block::from).collect()
    }

    #[test]
    fn test_replay_authenticates_every_block() {
        let data: Vec<u8> = (0..2500).map(|i| (i % 256) as u8).collect();
        let chain = seal(&data, 1024);
        let mut verifier = ChainVerifier::<Blake3Hasher>::new(chain.root());

        let blocks = wire_blocks(&chain);
        let last = blocks.len() - 1;
        let mut replayed = Vec::new();

        for (i, block) in blocks.into_iter().enumerate() {
            let verdict = verifier.verify_next(block, i == last).unwrap();
            match verdict {
                Verdict::Authenticated { content } => replayed.extend_from_slice(&content),
                Verdict::Rejected => panic!("authentic block {} rejected", i),
            }
        }

        assert!(verifier.is_completed());
        // Stripped contents reassemble to the original file.
        assert_eq!(replayed, data);
    }

    #[test]
    fn test_single_block_completes_immediately() {
        let chain = seal(&[0x42u8; 500], 1024);
        let mut verifier = ChainVerifier::<Blake3Hasher>::new(chain.root());

        let verdict = verifier
            .verify_next(wire_blocks(&chain).remove(0), true)
            .unwrap();

        assert!(verdict.is_authenticated());
        assert!(verifier.is_completed());
    }

    #[test]
    fn test_tampered_content_rejected_and_sticky() {
        let chain = seal(&vec![1u8; 4096], 1024);
        let mut blocks = wire_blocks(&chain);

        // Flip one bit of block 1's content.
        let mut tampered = blocks[1].data.to_vec();
        tampered[10] ^= 0x01;
        blocks[1] = Block::new(1, tampered);

        let mut verifier = ChainVerifier::<Blake3Hasher>::new(chain.root());
        assert!(verifier.verify_next(blocks.remove(0), false).unwrap().is_authenticated());
        assert_eq!(verifier.verify_next(blocks.remove(0), false).unwrap(), Verdict::Rejected);
        assert!(verifier.is_failed());

        // Fail-closed: the untampered remainder is rejected without rehashing.
        for block in blocks {
            assert_eq!(verifier.verify_next(block, false).unwrap(), Verdict::Rejected);
        }
        assert!(verifier.is_failed());
    }

    #[test]
    fn test_tampered_trailing_digest_rejected() {
        let chain = seal(&vec![2u8; 4096], 1024);
        let mut blocks = wire_blocks(&chain);

        // Corrupt the embedded digest of block 0; the payload hash no
        // longer matches the root.
        let mut tampered = blocks[0].data.to_vec();
        let last = tampered.len() - 1;
        tampered[last] ^= 0x80;
        blocks[0] = Block::new(0, tampered);

        let mut verifier = ChainVerifier::<Blake3Hasher>::new(chain.root());
        assert_eq!(verifier.verify_next(blocks.remove(0), false).unwrap(), Verdict::Rejected);
        assert!(verifier.is_failed());
    }

    #[test]
    fn test_out_of_order_is_fatal() {
        let chain = seal(&vec![3u8; 4096], 1024);
        let blocks = wire_blocks(&chain);

        let mut verifier = ChainVerifier::<Blake3Hasher>::new(chain.root());
        let err = verifier.verify_next(blocks[2].clone(), false).unwrap_err();

        assert!(matches!(err, ChainError::OutOfOrder { expected: 0, got: 2 }));
        assert!(verifier.is_failed());

        // Even the correct first block is rejected now.
        assert_eq!(
            verifier.verify_next(blocks[0].clone(), false).unwrap(),
            Verdict::Rejected
        );
    }

    #[test]
    fn test_truncation_is_not_an_error() {
        let chain = seal(&vec![4u8; 4096], 1024);
        let mut verifier = ChainVerifier::<Blake3Hasher>::new(chain.root());

        // Verify only the first two blocks, then abandon the session.
        for block in wire_blocks(&chain).into_iter().take(2) {
            assert!(verifier.verify_next(block, false).unwrap().is_authenticated());
        }
        assert!(verifier.is_active());
        assert_eq!(verifier.next_index(), Some(2));
    }

    #[test]
    fn test_block_after_completion_rejected() {
        let chain = seal(&[5u8; 100], 1024);
        let mut verifier = ChainVerifier::<Blake3Hasher>::new(chain.root());

        let block = wire_blocks(&chain).remove(0);
        assert!(verifier.verify_next(block.clone(), true).unwrap().is_authenticated());
        assert!(verifier.is_completed());

        assert_eq!(verifier.verify_next(block, true).unwrap(), Verdict::Rejected);
        // A spurious extra block does not demote a completed session.
        assert!(verifier.is_completed());
    }

    #[test]
    fn test_total_blocks_infers_last() {
        let data = vec![6u8; 2500];
        let chain = seal(&data, 1024);
        let mut verifier = ChainVerifier::<Blake3Hasher>::with_total_blocks(
            chain.root(),
            chain.block_count() as u64,
        );

        for block in wire_blocks(&chain) {
            assert!(verifier.verify(block).unwrap().is_authenticated());
        }
        assert!(verifier.is_completed());
    }

    #[test]
    fn test_verify_without_total_is_config_error() {
        let chain = seal(&[7u8; 100], 1024);
        let mut verifier = ChainVerifier::<Blake3Hasher>::new(chain.root());

        let err = verifier.verify(wire_blocks(&chain).remove(0)).unwrap_err();
        assert!(matches!(err, ChainError::InvalidConfig { .. }));
        // The session itself is untouched and still usable.
        assert!(verifier.is_active());
    }

    #[test]
    fn test_mislabeled_short_final_block() {
        // A genuine final block shorter than a digest, presented with
        // is_last = false: the hash matches but the chain cannot continue.
        let chain = seal(&[8u8; 10], 1024);
        let mut verifier = ChainVerifier::<Blake3Hasher>::new(chain.root());

        let verdict = verifier
            .verify_next(wire_blocks(&chain).remove(0), false)
            .unwrap();
        assert_eq!(verdict, Verdict::Rejected);
        assert!(verifier.is_failed());
    }

    #[test]
    fn test_wrong_root_rejects_first_block() {
        let chain = seal(&vec![9u8; 2048], 1024);
        let mut verifier = ChainVerifier::<Blake3Hasher>::new(Digest::new([0u8; 32]));

        assert_eq!(
            verifier.verify_next(wire_blocks(&chain).remove(0), false).unwrap(),
            Verdict::Rejected
        );
        assert!(verifier.is_failed());
    }
}
