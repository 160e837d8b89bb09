#![no_main]

use libfuzzer_sys::fuzz_target;

use chainseal::{Blake3Hasher, Block, ChainBuilder, ChainConfig, ChainVerifier, Verdict};

fuzz_target!(|input: (Vec<u8>, u16, u32)| {
    let (data, raw_size, seed) = input;
    if data.is_empty() {
        return;
    }
    let block_size = (raw_size as usize % 2048) + 1;

    let chain = ChainBuilder::<Blake3Hasher>::new()
        .seal(&data, &ChainConfig::new(block_size).unwrap())
        .unwrap();
    let root = chain.root();
    let total = chain.block_count() as u64;

    let mut blocks: Vec<Block> = chain.into_blocks().into_iter().map(Block::from).collect();

    // Flip one fuzzer-chosen bit somewhere in one block's payload.
    let victim = (seed as usize) % blocks.len();
    let mut payload = blocks[victim].data.to_vec();
    let byte = (seed >> 8) as usize % payload.len();
    payload[byte] ^= 1 << (seed >> 29);
    blocks[victim] = Block::new(victim as u64, payload);

    let mut verifier = ChainVerifier::<Blake3Hasher>::with_total_blocks(root, total);
    let mut first_rejection = None;

    for block in blocks {
        let index = block.index;
        match verifier.verify(block).expect("in-order replay must not error") {
            Verdict::Authenticated { .. } => {
                // Nothing at or past the tampered block may authenticate.
                assert!(index < victim as u64);
            }
            Verdict::Rejected => {
                if first_rejection.is_none() {
                    // Rejection starts exactly at the tampered block.
                    assert_eq!(index, victim as u64);
                    first_rejection = Some(index);
                }
            }
        }
    }

    assert!(first_rejection.is_some(), "flipped bit must be detected");
    assert!(verifier.is_failed());
});
