#![no_main]

use libfuzzer_sys::fuzz_target;

use chainseal::{Blake3Hasher, Block, ChainBuilder, ChainConfig, ChainVerifier, Chunker, Verdict};

fuzz_target!(|input: (Vec<u8>, u16)| {
    let (data, raw_size) = input;
    let block_size = (raw_size as usize % 4096) + 1;

    let config = ChainConfig::new(block_size).unwrap();
    let chunker = Chunker::new(config);
    let blocks = chunker.split(&data);

    // Verify: blocks reassemble to the input
    let total_bytes: usize = blocks.iter().map(|b| b.len()).sum();
    assert_eq!(total_bytes, data.len());

    // Verify: indices are sequential and only the last block is short
    for (i, block) in blocks.iter().enumerate() {
        assert_eq!(block.index, i as u64);
        if i < blocks.len() - 1 {
            assert_eq!(block.len(), block_size);
        }
    }

    if blocks.is_empty() {
        return;
    }

    let builder = ChainBuilder::<Blake3Hasher>::new();
    let chain = builder.build(blocks.clone()).unwrap();

    // Verify: determinism - building twice yields the same chain
    let chain2 = builder.build(blocks).unwrap();
    assert_eq!(chain.root(), chain2.root());
    assert_eq!(chain.blocks(), chain2.blocks());

    // Verify: a full in-order replay authenticates every block
    let total = chain.block_count() as u64;
    let mut verifier = ChainVerifier::<Blake3Hasher>::with_total_blocks(chain.root(), total);
    let mut played = Vec::with_capacity(data.len());

    for block in chain.into_blocks() {
        match verifier.verify(Block::from(block)).unwrap() {
            Verdict::Authenticated { content } => played.extend_from_slice(&content),
            Verdict::Rejected => panic!("authentic block rejected"),
        }
    }

    assert!(verifier.is_completed());
    assert_eq!(played, data);
});
