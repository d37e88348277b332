//! Benchmarks for the 15-puzzle solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fifteen::config::DEMO_BOARD;
use fifteen::moves::neighbors;
use fifteen::node::{NodeId, SearchNode};
use fifteen::shuffle::shuffled;
use fifteen::solvability::is_solvable;
use fifteen::{solve, Board};

/// Benchmark solving the demo board (30 slides).
fn bench_solve_demo(c: &mut Criterion) {
    let board = Board::new(DEMO_BOARD).unwrap();
    let mut group = c.benchmark_group("demo");
    group.sample_size(20);
    group.bench_function("solve", |b| b.iter(|| solve(black_box(&board))));
    group.finish();
}

/// Benchmark solving a short scramble.
fn bench_solve_short(c: &mut Criterion) {
    let board: Board = "1 6 2 3 5 10 11 4 7 12 0 8 9 13 14 15".parse().unwrap();
    c.bench_function("solve_22_slides", |b| b.iter(|| solve(black_box(&board))));
}

/// Benchmark the parity test on a scrambled board.
fn bench_is_solvable(c: &mut Criterion) {
    let board = shuffled(1000, Some(1));
    c.bench_function("is_solvable", |b| b.iter(|| is_solvable(black_box(&board))));
}

/// Benchmark expanding a node with the blank in the middle.
fn bench_neighbors(c: &mut Criterion) {
    let board: Board = "1 2 3 4 5 6 7 8 9 10 0 11 13 14 15 12".parse().unwrap();
    let node = SearchNode::root(board);

    c.bench_function("neighbors", |b| {
        b.iter(|| neighbors(black_box(&node), NodeId::ROOT).count())
    });
}

criterion_group!(
    benches,
    bench_solve_demo,
    bench_solve_short,
    bench_is_solvable,
    bench_neighbors
);
criterion_main!(benches);
