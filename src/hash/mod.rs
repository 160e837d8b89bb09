//! Hash primitive adapters for chain construction and verification.
//!
//! The chain is agnostic to the concrete algorithm: anything that maps an
//! arbitrary byte sequence to a deterministic, collision-resistant 32-byte
//! digest will do, as long as builder and verifier agree on it.
//!
//! - [`BlockHasher`] - The hash primitive contract
//! - [`Blake3Hasher`] - BLAKE3 implementation (feature `hash-blake3`, default)
//! - [`Sha256Hasher`] - SHA-256 implementation (feature `hash-sha2`)

use crate::block::Digest;

#[cfg(feature = "hash-blake3")]
mod blake3;

#[cfg(feature = "hash-sha2")]
mod sha256;

#[cfg(feature = "hash-blake3")]
pub use blake3::Blake3Hasher;

#[cfg(feature = "hash-sha2")]
pub use sha256::Sha256Hasher;

/// A collision-resistant hash primitive with 32-byte output.
///
/// Implementations must be deterministic: identical input bytes always
/// yield the identical digest. Builder and verifier of the same chain must
/// use the same implementation; mixing them fails every block.
pub trait BlockHasher {
    /// Hashes the full byte sequence in one shot.
    fn digest(data: &[u8]) -> Digest;
}
