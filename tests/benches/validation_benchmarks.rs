//! # Validation Benchmarks
//!
//! | Stage | Work per block |
//! |-------|----------------|
//! | validate_body | uncle rules, two Merkle roots, ancestor lookup |
//! | validate_state | bloom union, receipt Merkle root, state root |
//! | merkle_root | Keccak tree over RLP leaves |

use ac_01_block_validation::{BlockValidationApi, ChainHasher, GasLimitCalculator, KeccakHasher};
use ac_tests::fixtures::{encode_all, transfer, BlockBuilder, FixedState, TestNode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use shared_types::H256;
use std::time::Duration;

const BLOCK_SIZES: [u64; 4] = [10, 100, 500, 1_000];

fn random_transfers(count: u64) -> Vec<shared_types::Transaction> {
    let mut rng = rand::thread_rng();
    (0..count).map(|n| transfer(n, rng.gen())).collect()
}

fn bench_validate_body(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_body");
    group.measurement_time(Duration::from_secs(5));

    let node = TestNode::new(1);
    for size in BLOCK_SIZES {
        let (block, _) = BlockBuilder::new()
            .transactions(random_transfers(size))
            .build_on(&node.genesis);

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &block, |b, block| {
            b.iter(|| black_box(node.validator.validate_body(block).is_ok()))
        });
    }
    group.finish();
}

fn bench_validate_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_state");
    group.measurement_time(Duration::from_secs(5));

    let node = TestNode::new(1);
    let root = H256::repeat_byte(0x42);
    let state = FixedState(root);
    for size in BLOCK_SIZES {
        let (block, receipts) = BlockBuilder::new()
            .transactions(random_transfers(size))
            .state_root(root)
            .build_on(&node.genesis);

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(block, receipts),
            |b, (block, receipts)| {
                b.iter(|| {
                    black_box(
                        node.validator
                            .validate_state(block, &state, receipts, block.gas_used())
                            .is_ok(),
                    )
                })
            },
        );
    }
    group.finish();
}

fn bench_merkle_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("merkle_root");
    let hasher = KeccakHasher::new();

    for size in BLOCK_SIZES {
        let leaves = encode_all(&random_transfers(size));
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &leaves, |b, leaves| {
            b.iter(|| black_box(hasher.merkle_root(leaves)))
        });
    }
    group.finish();
}

fn bench_gas_limit(c: &mut Criterion) {
    let calc = GasLimitCalculator::default();
    c.bench_function("calc_gas_limit", |b| {
        b.iter(|| {
            black_box(calc.calc_gas_limit(
                black_box(9_000_000),
                black_box(10_000_000),
                8_000_000,
                12_000_000,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_validate_body,
    bench_validate_state,
    bench_merkle_root,
    bench_gas_limit
);
criterion_main!(benches);
