//! Benchmarks for board shuffling.
//!
//! Measures the complete shuffle: constructing a solved board and performing the
//! random walk with a deterministic generator.
//!
//! # Benchmarks
//!
//! - **`shuffle_classic`**: 4x4 boards with the default 1000-step budget.
//! - **`shuffle_large`**: 8x8 boards with a 4000-step budget.
//!
//! Uses three fixed seeds so runs are reproducible while still covering multiple
//! walks.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench shuffle
//! ```

use std::{hint, str::FromStr as _};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fifteen_shuffle::{BoardShuffler, ShuffleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_shuffle_classic(c: &mut Criterion) {
    let shuffler = BoardShuffler::new(4);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = ShuffleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("shuffle_classic", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter(|| shuffler.shuffle_with_seed(hint::black_box(*seed)));
            },
        );
    }
}

fn bench_shuffle_large(c: &mut Criterion) {
    let shuffler = BoardShuffler::new(8).steps(4000);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = ShuffleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("shuffle_large", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter(|| shuffler.shuffle_with_seed(hint::black_box(*seed)));
            },
        );
    }
}

criterion_group!(benches, bench_shuffle_classic, bench_shuffle_large);
criterion_main!(benches);
