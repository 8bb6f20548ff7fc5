// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use parterre_focus::{
    AxisBandPolicy, DEFAULT_FOCUS_CELL_SIZE, DEFAULT_TOLERANCE, Direction, FocusEntry, FocusSpace,
    GridFocusIndex,
};

/// Staggered theater rows: odd rows shifted by half a pitch.
fn gen_rows(rows: usize, cols: usize, pitch: f64) -> Vec<FocusEntry<u32>> {
    let mut out = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        let shift = if r % 2 == 1 { pitch * 0.5 } else { 0.0 };
        for c in 0..cols {
            out.push(FocusEntry {
                id: (r * cols + c) as u32,
                point: Point::new(c as f64 * pitch + shift, r as f64 * pitch),
            });
        }
    }
    out
}

/// Random points scattered over a square, like a general-admission floor.
fn gen_scatter(count: usize, extent: f64) -> Vec<FocusEntry<u32>> {
    let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
    (0..count)
        .map(|i| FocusEntry {
            id: i as u32,
            point: Point::new(rng.next_f64() * extent, rng.next_f64() * extent),
        })
        .collect()
}

fn starts(len: usize, count: usize) -> Vec<usize> {
    let mut rng = Rng::new(0xD1B5_4A32_D192_ED03);
    (0..count)
        .map(|_| (rng.next_u64() % len as u64) as usize)
        .collect()
}

fn bench_navigate(
    c: &mut Criterion,
    benchmark_group_name: &str,
    make_nodes: impl Fn(usize) -> Vec<FocusEntry<u32>>,
) {
    let mut group = c.benchmark_group(benchmark_group_name);
    let policy = AxisBandPolicy::default();
    for &n in &[256usize, 1_024, 4_096] {
        let nodes = make_nodes(n);
        let space = FocusSpace { nodes: &nodes };
        let index = GridFocusIndex::new(&space, DEFAULT_TOLERANCE, DEFAULT_FOCUS_CELL_SIZE);
        let from = starts(nodes.len(), 64);

        group.throughput(Throughput::Elements((from.len() * Direction::ALL.len()) as u64));
        group.bench_function(BenchmarkId::new("AxisBand", nodes.len()), |b| {
            b.iter(|| {
                let mut hits = 0;
                for &i in &from {
                    for dir in Direction::ALL {
                        hits += usize::from(policy.next_index(i, dir, &space).is_some());
                    }
                }
                black_box(hits)
            });
        });
        group.bench_function(BenchmarkId::new("Grid", nodes.len()), |b| {
            b.iter(|| {
                let mut hits = 0;
                for &i in &from {
                    for dir in Direction::ALL {
                        hits += usize::from(index.next_index(i, dir).is_some());
                    }
                }
                black_box(hits)
            });
        });
    }
    group.finish();
}

fn bench_navigate_rows(c: &mut Criterion) {
    bench_navigate(c, "focus/rows", |n| {
        let cols = (n as f64).sqrt() as usize;
        gen_rows(n / cols, cols, 30.0)
    });
}

fn bench_navigate_scatter(c: &mut Criterion) {
    bench_navigate(c, "focus/scatter", |n| gen_scatter(n, (n as f64).sqrt() * 30.0));
}

fn bench_build_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("focus/build");
    for &n in &[1_024usize, 4_096] {
        let nodes = gen_rows(n / 64, 64, 30.0);
        group.throughput(Throughput::Elements(nodes.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(nodes.len()), |b| {
            b.iter_batched(
                || nodes.clone(),
                |nodes| {
                    let space = FocusSpace { nodes: &nodes };
                    black_box(
                        GridFocusIndex::new(&space, DEFAULT_TOLERANCE, DEFAULT_FOCUS_CELL_SIZE)
                            .len(),
                    )
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

criterion_group!(
    benches,
    bench_navigate_rows,
    bench_navigate_scatter,
    bench_build_grid
);
criterion_main!(benches);
