//! Benchmarks for chainseal.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use chainseal::{Blake3Hasher, Block, ChainBuilder, ChainConfig, ChainVerifier};

fn bench_seal(c: &mut Criterion) {
    let mut group = c.benchmark_group("seal");

    // Different file sizes
    for size in [64 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        // Deterministic pseudo-random data
        let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            format!("file_{}kb", size / 1024),
            &data,
            |b, data| {
                let builder = ChainBuilder::<Blake3Hasher>::new();
                let config = ChainConfig::default();
                b.iter(|| {
                    let chain = builder.seal(black_box(data), &config).unwrap();
                    black_box(chain.root())
                });
            },
        );
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

    let chain = ChainBuilder::<Blake3Hasher>::new()
        .seal(&data, &ChainConfig::default())
        .unwrap();
    let total = chain.block_count() as u64;
    let blocks: Vec<Block> = chain.blocks().iter().cloned().map(Block::from).collect();

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("replay_1mb", |b| {
        b.iter(|| {
            let mut verifier =
                ChainVerifier::<Blake3Hasher>::with_total_blocks(chain.root(), total);
            for block in blocks.iter().cloned() {
                let verdict = verifier.verify(black_box(block)).unwrap();
                black_box(verdict.is_authenticated());
            }
            black_box(verifier.is_completed())
        });
    });

    group.finish();
}

fn bench_block_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_sizes");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

    for block_size in [512, 1024, 8192, 65536] {
        group.bench_function(format!("seal_{}b_blocks", block_size), |b| {
            let builder = ChainBuilder::<Blake3Hasher>::new();
            let config = ChainConfig::new(block_size).unwrap();
            b.iter(|| {
                let chain = builder.seal(black_box(&data), &config).unwrap();
                black_box(chain.block_count())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_seal, bench_verify, bench_block_sizes);
criterion_main!(benches);
