// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for the interleave drill
//!
//! Run with: cargo bench
//!
//! The only hot path is the cyclic shuffler; these benchmarks measure
//! per-item cost and the reshuffle that starts each pass.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use interleave::catalog;
use interleave::shuffle::CycleShuffler;

/// Benchmark pulling items across pass boundaries
fn bench_shuffler_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffler_next");

    for size in [16, 256, 4096].iter() {
        group.bench_with_input(BenchmarkId::new("full_pass", size), size, |b, &size| {
            let items: Vec<u32> = (0..size).collect();
            let mut shuffler = CycleShuffler::with_seed(items, 42).unwrap();
            b.iter(|| {
                let mut last = 0;
                for _ in 0..size {
                    last = shuffler.next();
                }
                black_box(last)
            })
        });
    }

    group.finish();
}

/// Benchmark a pass over a realistic catalog piece
fn bench_catalog_piece(c: &mut Criterion) {
    let pieces = catalog::builtin();
    let piece = &pieces[0];

    c.bench_function("catalog_pass", |b| {
        let mut shuffler = CycleShuffler::with_seed(piece.phrases().to_vec(), 42).unwrap();
        b.iter(|| {
            let mut measures = 0;
            for _ in 0..piece.phrase_count() {
                measures += shuffler.next().measure_count();
            }
            black_box(measures)
        })
    });
}

criterion_group!(benches, bench_shuffler_next, bench_catalog_piece);
criterion_main!(benches);
