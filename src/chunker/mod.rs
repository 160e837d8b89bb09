//! Fixed-size block splitting.
//!
//! - [`Chunker`] - Splits byte sequences and readers into ordered blocks

mod engine;

pub use engine::{BlockIter, Chunker};
