//! chainseal
//!
//! Backward-built, forward-verifiable hash chains over fixed-size blocks.
//!
//! `chainseal` authenticates a large file in chunks so a receiver can
//! verify and start consuming the earliest blocks without waiting for the
//! whole download. The publisher splits the file into blocks, appends to
//! each block the digest of everything after it (working backward from the
//! end), and distributes the digest of the first augmented block - the
//! *root* - over an authenticated channel. The receiver then checks each
//! arriving block against a single expected digest, one hash per block.
//!
//! The crate intentionally:
//! - does NOT manage files or paths
//! - does NOT transport blocks over a network
//! - does NOT distribute the root digest (that channel is assumed given)
//! - does NOT implement a hash function (BLAKE3/SHA-256 come from crates)
//!
//! It only does one thing: **blocks in → root digest and verdicts out**
//!
//! # Sealing
//!
//! ```
//! use chainseal::{Blake3Hasher, ChainBuilder, ChainConfig};
//!
//! fn main() -> Result<(), chainseal::ChainError> {
//!     let file = vec![0u8; 2500];
//!
//!     let builder = ChainBuilder::<Blake3Hasher>::new();
//!     let chain = builder.seal(&file, &ChainConfig::default())?;
//!
//!     // 64 hex chars for the authenticated channel
//!     println!("root: {}", chain.root());
//!     Ok(())
//! }
//! ```
//!
//! # Verifying
//!
//! ```
//! use chainseal::{Blake3Hasher, ChainBuilder, ChainConfig, ChainVerifier, Verdict};
//!
//! fn main() -> Result<(), chainseal::ChainError> {
//!     let file = vec![0u8; 2500];
//!     let chain = ChainBuilder::<Blake3Hasher>::new().seal(&file, &ChainConfig::default())?;
//!     let total = chain.block_count() as u64;
//!
//!     // Receiver side: only the root is trusted a priori.
//!     let mut verifier = ChainVerifier::<Blake3Hasher>::with_total_blocks(chain.root(), total);
//!
//!     for block in chain.into_blocks() {
//!         match verifier.verify(block.into())? {
//!             Verdict::Authenticated { content } => {
//!                 // safe to play/consume immediately
//!                 let _ = content;
//!             }
//!             Verdict::Rejected => break,
//!         }
//!     }
//!     assert!(verifier.is_completed());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod block;
mod builder;
mod chunker;
mod config;
mod error;
mod hash;
mod verifier;

mod util; // internal

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface (intentionally tiny)
//

pub use block::{AugmentedBlock, Block, Chain, Digest};
pub use builder::ChainBuilder;
pub use chunker::{BlockIter, Chunker};
pub use config::{ChainConfig, DEFAULT_BLOCK_SIZE};
pub use error::ChainError;
pub use hash::BlockHasher;
pub use verifier::{ChainVerifier, Verdict};

#[cfg(feature = "hash-blake3")]
pub use hash::Blake3Hasher;

#[cfg(feature = "hash-sha2")]
pub use hash::Sha256Hasher;

#[cfg(feature = "async-io")]
pub use async_stream::{BlockStream, block_stream};
