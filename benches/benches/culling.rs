// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use parterre_index::backends::GridF64;
use parterre_index::{Aabb2D, Backend};
use parterre_view::{
    CullParams, DEFAULT_CELL_SIZE, IndexedCuller, MapFit, ScrollViewport, visible_indices,
};

/// Seats on a square theater grid, `pitch` units apart, with a little jitter.
fn gen_theater(side: usize, pitch: f64) -> Vec<Point> {
    let mut rng = Rng::new(0x5EA7_0FCA_FE00_0001);
    let mut out = Vec::with_capacity(side * side);
    for r in 0..side {
        for c in 0..side {
            let jx = (rng.next_f64() - 0.5) * 4.0;
            let jy = (rng.next_f64() - 0.5) * 4.0;
            out.push(Point::new(
                (c as f64 + 1.0) * pitch + jx,
                (r as f64 + 1.0) * pitch + jy,
            ));
        }
    }
    out
}

/// Scroll offsets covering the container, in container pixels.
fn gen_scrolls(count: usize, container: Size, view: Size) -> Vec<ScrollViewport> {
    let mut rng = Rng::new(0x0BAD_5EED_1234_5678);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * (container.width - view.width).max(0.0);
            let y = rng.next_f64() * (container.height - view.height).max(0.0);
            ScrollViewport::new(x, y, view.width, view.height)
        })
        .collect()
}

fn bench_scroll_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("cull/scroll");
    let params = CullParams::default();
    let view = Size::new(1280.0, 720.0);
    for &side in &[32usize, 64, 128] {
        let seats = gen_theater(side, 30.0);
        let extent = (side as f64 + 1.0) * 30.0;
        let map = Size::new(extent, extent);
        // Container at map scale so the viewport covers a fixed slice.
        let fit = MapFit::new(map, map);
        let scrolls = gen_scrolls(64, map, view);
        let culler = IndexedCuller::new(&seats, params, DEFAULT_CELL_SIZE);

        group.throughput(Throughput::Elements(scrolls.len() as u64));
        group.bench_function(BenchmarkId::new("linear", seats.len()), |b| {
            b.iter(|| {
                let mut n = 0;
                for vp in &scrolls {
                    n += visible_indices(&seats, vp, &fit, &params).len();
                }
                black_box(n)
            });
        });
        group.bench_function(BenchmarkId::new("indexed", seats.len()), |b| {
            b.iter(|| {
                let mut n = 0;
                for vp in &scrolls {
                    n += culler.visible_indices(vp, &fit).len();
                }
                black_box(n)
            });
        });
    }
    group.finish();
}

fn bench_build_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("cull/build");
    let params = CullParams::default();
    for &side in &[64usize, 128] {
        let seats = gen_theater(side, 30.0);
        group.throughput(Throughput::Elements(seats.len() as u64));
        for &cell in &[64.0, DEFAULT_CELL_SIZE, 256.0] {
            group.bench_function(
                BenchmarkId::new(format!("Grid({cell})"), seats.len()),
                |b| {
                    b.iter_batched(
                        || seats.clone(),
                        |seats| black_box(IndexedCuller::new(&seats, params, cell)),
                        BatchSize::LargeInput,
                    );
                },
            );
        }
    }
    group.finish();
}

fn bench_grid_backend(c: &mut Criterion) {
    let mut group = c.benchmark_group("cull/grid_backend");
    let radius = CullParams::default().item_radius;
    for &side in &[64usize, 128] {
        let seats = gen_theater(side, 30.0);
        let boxes: Vec<Aabb2D<f64>> = seats
            .iter()
            .map(|p| Aabb2D::around_circle(p.x, p.y, radius))
            .collect();
        group.throughput(Throughput::Elements(boxes.len() as u64));
        group.bench_function(BenchmarkId::new("insert", boxes.len()), |b| {
            b.iter_batched(
                || GridF64::new(DEFAULT_CELL_SIZE),
                |mut grid| {
                    for (slot, aabb) in boxes.iter().copied().enumerate() {
                        grid.insert(slot, aabb);
                    }
                    grid
                },
                BatchSize::LargeInput,
            );
        });

        let mut grid = GridF64::new(DEFAULT_CELL_SIZE);
        for (slot, aabb) in boxes.iter().copied().enumerate() {
            grid.insert(slot, aabb);
        }
        let extent = (side as f64 + 1.0) * 30.0;
        let map = Size::new(extent, extent);
        let queries: Vec<Aabb2D<f64>> = gen_scrolls(64, map, Size::new(1280.0, 720.0))
            .iter()
            .map(|vp| {
                Aabb2D::from_xywh(
                    vp.x - 100.0,
                    vp.y - 100.0,
                    vp.width + 200.0,
                    vp.height + 200.0,
                )
            })
            .collect();
        group.bench_function(BenchmarkId::new("query_rect_sorted", boxes.len()), |b| {
            b.iter(|| {
                let mut n = 0;
                for q in &queries {
                    n += grid.query_rect_sorted(*q).len();
                }
                black_box(n)
            });
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
    bench_scroll_queries,
    bench_build_index,
    bench_grid_backend
);
criterion_main!(benches);
