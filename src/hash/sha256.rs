//! SHA-256-based hash primitive.
//!
//! The original deployment of this protocol hashed with SHA-256; this
//! adapter reproduces its digests bit-for-bit for interoperability.

use sha2::Digest as _;
use sha2::Sha256;

use crate::block::Digest;
use crate::hash::BlockHasher;

/// A hasher that computes SHA-256 digests.
#[derive(Debug, Clone, Default)]
pub struct Sha256Hasher {
    state: Sha256,
}

impl Sha256Hasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self {
            state: Sha256::new(),
        }
    }

    /// Updates the hasher with more data.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Finalizes and returns the digest.
    pub fn finalize(&self) -> Digest {
        let bytes: [u8; 32] = self.state.clone().finalize().into();
        Digest::new(bytes)
    }

    /// Resets the hasher to its initial state.
    pub fn reset(&mut self) {
        self.state = Sha256::new();
    }
}

impl BlockHasher for Sha256Hasher {
    fn digest(data: &[u8]) -> Digest {
        let bytes: [u8; 32] = Sha256::digest(data).into();
        Digest::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // FIPS 180-4 test vector: SHA-256("abc")
        let digest = Sha256Hasher::digest(b"abc");
        assert_eq!(
            digest.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_empty_input() {
        let digest = Sha256Hasher::digest(b"");
        assert_eq!(
            digest.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let mut hasher = Sha256Hasher::new();
        hasher.update(b"hello ");
        hasher.update(b"world");
        assert_eq!(hasher.finalize(), Sha256Hasher::digest(b"hello world"));
    }

    #[test]
    fn test_reset() {
        let mut hasher = Sha256Hasher::new();
        hasher.update(b"garbage");
        hasher.reset();
        hasher.update(b"abc");
        assert_eq!(hasher.finalize(), Sha256Hasher::digest(b"abc"));
    }
}
