//! Block and digest types.
//!
//! - [`Block`] - Raw chunk of file content with its sequence index
//! - [`AugmentedBlock`] - Block with its successor's digest appended
//! - [`Chain`] - Root digest plus the augmented block sequence
//! - [`Digest`] - 32-byte hash primitive output

mod data;
mod digest;

pub use data::{AugmentedBlock, Block, Chain};
pub use digest::Digest;
