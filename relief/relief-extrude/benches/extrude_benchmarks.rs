//! Benchmarks for the extrusion pipeline.
//!
//! Run with: cargo bench -p relief-extrude

#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use relief_extrude::{extrude_grid, BitGrid, ExtrudeParams};

/// Checkerboard grid, the worst case for per-cell emission: half the
/// cells are active and no two active cells share a row run.
fn checkerboard(side: usize) -> BitGrid {
    BitGrid::from_fn(side, side, |row, col| (row + col) % 2 == 0)
}

fn bench_extrude(c: &mut Criterion) {
    let params = ExtrudeParams::default();

    let mut group = c.benchmark_group("extrude_checkerboard");
    for side in [64_usize, 256] {
        let grid = checkerboard(side);
        let active = grid.active_cells(false).count();
        group.throughput(Throughput::Elements(active as u64));
        group.bench_function(format!("{side}x{side}"), |b| {
            b.iter(|| extrude_grid(black_box(&grid), black_box(&params)).unwrap());
        });
    }
    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let grid = checkerboard(256);

    c.bench_function("active_cells_256", |b| {
        b.iter(|| black_box(&grid).active_cells(false).count());
    });
}

criterion_group!(benches, bench_extrude, bench_extract);
criterion_main!(benches);
