//! Benchmarks for Tango puzzle generation.
//!
//! Measures the complete generation pipeline — full-grid fill, carving,
//! hint selection, and pruning — per difficulty level.
//!
//! Uses fixed seeds so runs are reproducible while still covering several
//! cases per difficulty.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use tango_generator::{Difficulty, PuzzleGenerator};

const SEEDS: [u64; 3] = [0xc1d4_4bd6_afaf_8af6, 0xa2b3_c4d5_e6f7_a8b9, 0x1234_5678_90ab_cdef];

fn bench_generator(c: &mut Criterion) {
    for difficulty in Difficulty::ALL {
        for (i, seed) in SEEDS.into_iter().enumerate() {
            c.bench_with_input(
                BenchmarkId::new(format!("generator_{difficulty}"), format!("seed_{i}")),
                &seed,
                |b, &seed| {
                    b.iter_batched(
                        || hint::black_box(PuzzleGenerator::with_seed(seed)),
                        |mut generator| generator.generate(difficulty),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(12));
    targets = bench_generator
);
criterion_main!(benches);
