//! Async streaming block source.
//!
//! This module reads fixed-size blocks using the `futures-io::AsyncRead`
//! trait, making it runtime-agnostic and compatible with tokio, async-std,
//! smol, and other async runtimes. Only the block *source* is asynchronous;
//! chain construction and verification stay synchronous.
//!
//! - [`block_stream`] - Creates an async stream of blocks from an async reader
//!
//! This module requires the `async-io` feature to be enabled.

mod stream;

pub use stream::{BlockStream, block_stream};
