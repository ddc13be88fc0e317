//! Benchmarks for board generation.
//!
//! Measures the complete generation loop (path carving, solution
//! generation, reveal partitioning, and the solvability check) for both
//! board styles.
//!
//! # Test Data
//!
//! Uses three fixed seeds so each run measures the same boards:
//!
//! - **`seed_0`**: `6f1d8a2c4b9e03577530e9b4c2a8d1f66f1d8a2c4b9e03577530e9b4c2a8d1f6`
//! - **`seed_1`**: `00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff`
//! - **`seed_2`**: `deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use towerdoku_generator::{BoardGenerator, BoardSeed, BoardStyle, Difficulty};

const SEEDS: [&str; 3] = [
    "6f1d8a2c4b9e03577530e9b4c2a8d1f66f1d8a2c4b9e03577530e9b4c2a8d1f6",
    "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff",
    "deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef",
];

fn bench_generate_defense(c: &mut Criterion) {
    let generator = BoardGenerator::new();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = BoardSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate_defense", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter(|| {
                    generator.generate_with_seed(
                        hint::black_box(*seed),
                        Difficulty::Medium,
                        BoardStyle::Defense,
                    )
                });
            },
        );
    }
}

fn bench_generate_basic(c: &mut Criterion) {
    let generator = BoardGenerator::new();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = BoardSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate_basic", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter(|| {
                    generator.generate_with_seed(
                        hint::black_box(*seed),
                        Difficulty::Medium,
                        BoardStyle::Basic,
                    )
                });
            },
        );
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = bench_generate_defense, bench_generate_basic
);
criterion_main!(benches);
