//! BLAKE3-based hash primitive.

use crate::block::Digest;
use crate::hash::BlockHasher;

/// A hasher that computes BLAKE3 digests.
///
/// The incremental API (`update`/`finalize`) exists for callers that hash
/// data arriving in pieces; the chain itself only needs [`BlockHasher`].
#[derive(Debug, Clone)]
pub struct Blake3Hasher {
    state: blake3::Hasher,
}

impl Blake3Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: blake3::Hasher::new(),
        }
    }

    /// Updates the hasher with more data.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Finalizes and returns the digest.
    pub fn finalize(&self) -> Digest {
        Digest::new(self.state.finalize().into())
    }

    /// Resets the hasher to its initial state.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for Blake3Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockHasher for Blake3Hasher {
    fn digest(data: &[u8]) -> Digest {
        Digest::new(blake3::hash(data).into())
    }
}
