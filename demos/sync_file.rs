//! Computes the root digest of a file on disk.
//!
//! The hex line this prints is the value a publisher would hand to an
//! authenticated channel alongside the blocks themselves.
//!
//! Run with:
//!     cargo run --example sync_file -- <path> [block_size]

use std::fs::File;

use chainseal::{Blake3Hasher, ChainBuilder, ChainConfig, Chunker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or("usage: sync_file <path> [block_size]")?;
    let block_size: usize = match args.next() {
        Some(raw) => raw.parse()?,
        None => chainseal::DEFAULT_BLOCK_SIZE,
    };

    let config = ChainConfig::new(block_size)?;
    let chunker = Chunker::new(config);

    // Stream blocks off the file rather than reading it whole.
    let blocks = chunker
        .blocks(File::open(&path)?)
        .collect::<Result<Vec<_>, _>>()?;

    let chain = ChainBuilder::<Blake3Hasher>::new().build(blocks)?;

    println!("{}  {}", chain.root().to_hex(), path);
    println!(
        "{} blocks of {} bytes (last: {} bytes)",
        chain.block_count(),
        block_size,
        chain.blocks().last().map(|b| b.len()).unwrap_or(0),
    );

    Ok(())
}
