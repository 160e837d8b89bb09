//! Basic seal-then-verify walkthrough on in-memory data.
//!
//! Run with:
//!     cargo run --example sync_basic

use chainseal::{Blake3Hasher, Block, ChainBuilder, ChainConfig, ChainVerifier, Verdict};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create some sample data
    let data: Vec<u8> = (0..100_000).map(|i| (i % 256) as u8).collect();

    // Publisher side: seal the file into a chain
    let builder = ChainBuilder::<Blake3Hasher>::new();
    let chain = builder.seal(&data, &ChainConfig::default())?;

    println!("Sealed {} bytes into {} blocks", data.len(), chain.block_count());
    println!("Root digest (authenticated channel): {}\n", chain.root());

    for block in chain.blocks().iter().take(3) {
        println!("{}", block);
    }
    println!("...\n");

    // Receiver side: verify blocks as they "arrive", in order
    let total = chain.block_count() as u64;
    let mut verifier = ChainVerifier::<Blake3Hasher>::with_total_blocks(chain.root(), total);

    let mut verified_bytes = 0;
    for block in chain.into_blocks() {
        let index = block.index();
        match verifier.verify(Block::from(block))? {
            Verdict::Authenticated { content } => {
                verified_bytes += content.len();
                if index < 3 {
                    println!("block #{index}: authenticated, {} content bytes", content.len());
                }
            }
            Verdict::Rejected => {
                println!("block #{index}: REJECTED - aborting");
                break;
            }
        }
    }

    println!("\nVerified {} of {} bytes", verified_bytes, data.len());
    println!("Session completed: {}", verifier.is_completed());

    Ok(())
}
