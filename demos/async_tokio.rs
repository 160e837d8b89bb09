//! Seals a file using the async block source with tokio.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io -- <path>

use futures_util::StreamExt;
use tokio_util::compat::TokioAsyncReadCompatExt;

use chainseal::{Blake3Hasher, ChainBuilder, ChainConfig, block_stream};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: async_tokio <path>")?;

    let file = tokio::fs::File::open(&path).await?;
    let mut stream = block_stream(file.compat(), ChainConfig::default());

    // The chain is built backward, so collect the blocks first; only the
    // reading is asynchronous.
    let mut blocks = Vec::new();
    while let Some(block) = stream.next().await {
        blocks.push(block?);
    }

    let chain = ChainBuilder::<Blake3Hasher>::new().build(blocks)?;
    println!("{}  {}", chain.root(), path);

    Ok(())
}
