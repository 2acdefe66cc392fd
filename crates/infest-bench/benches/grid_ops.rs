//! Criterion micro-benchmarks for grid operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use infest_bench::scatter_grid;
use infest_grid::parse_grid;
use infest_test_utils::REFERENCE_INITIAL;

/// Benchmark: count_adjacent() on every cell of a full-capacity 8x8 grid.
fn bench_count_adjacent_8x8(c: &mut Criterion) {
    let grid = scatter_grid(8, 42).unwrap();
    let cells: Vec<_> = grid.coords().collect();

    c.bench_function("count_adjacent_8x8", |b| {
        b.iter(|| {
            for &pos in &cells {
                black_box(grid.count_adjacent(pos));
            }
        });
    });
}

/// Benchmark: render() of the 5x5 reference grid.
fn bench_render_5x5(c: &mut Criterion) {
    let grid = parse_grid(REFERENCE_INITIAL).unwrap();

    c.bench_function("render_5x5", |b| {
        b.iter(|| black_box(grid.render()));
    });
}

/// Benchmark: parse_grid() of the 5x5 reference text.
fn bench_parse_5x5(c: &mut Criterion) {
    c.bench_function("parse_5x5", |b| {
        b.iter(|| black_box(parse_grid(black_box(REFERENCE_INITIAL)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_count_adjacent_8x8,
    bench_render_5x5,
    bench_parse_5x5
);
criterion_main!(benches);
