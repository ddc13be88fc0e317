//! Benchmarks for the backtracking solver.
//!
//! Measures the two shapes the board engine exercises: completing an empty
//! grid (the generation role) and re-solving a partially revealed puzzle
//! (the solvability-validation role).
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench backtrack
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use towerdoku_core::DigitGrid;

const PUZZLE: &str = "\
    1.345.78.\
    45678912.\
    .891.3456\
    2345678.1\
    5678.1234\
    891..4567\
    34567891.\
    6.8912345\
    91.345678";

fn bench_solve_empty(c: &mut Criterion) {
    c.bench_function("solve_empty", |b| {
        b.iter(|| {
            let mut grid = hint::black_box(DigitGrid::new());
            towerdoku_solver::solve(&mut grid)
        });
    });
}

fn bench_solve_puzzle(c: &mut Criterion) {
    let puzzle: DigitGrid = PUZZLE.parse().expect("valid puzzle literal");
    c.bench_function("solve_puzzle", |b| {
        b.iter(|| {
            let mut grid = hint::black_box(puzzle);
            towerdoku_solver::solve(&mut grid)
        });
    });
}

criterion_group!(benches, bench_solve_empty, bench_solve_puzzle);
criterion_main!(benches);
