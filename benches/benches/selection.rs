// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use parterre_selection::{DEFAULT_LIMIT, Selection};

/// Seat-like string ids, as a venue would hand them out.
fn seat_ids(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("S{}-{}-{}", i / 400, (i / 20) % 20 + 1, i % 20 + 1))
        .collect()
}

fn bench_toggle_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/toggle");
    // Clicking around a venue: most toggles hit a full selection.
    for &limit in &[DEFAULT_LIMIT, 64] {
        let ids = seat_ids(1_024);
        let mut rng = Rng::new(0x2545_F491_4F6C_DD1D);
        let clicks: Vec<usize> = (0..4_096)
            .map(|_| (rng.next_u64() % ids.len() as u64) as usize)
            .collect();
        group.throughput(Throughput::Elements(clicks.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(limit), &clicks, |b, clicks| {
            b.iter_batched(
                || Selection::<&str>::with_limit(limit),
                |mut sel| {
                    for &i in clicks {
                        black_box(sel.toggle(ids[i].as_str()));
                    }
                    sel
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_restore(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/restore");
    // Restoring a stored list, possibly oversized or with repeats.
    for &len in &[8usize, 32, 256] {
        let mut stored = seat_ids(len);
        let repeats = stored[..len / 4].to_vec();
        stored.extend(repeats);
        group.throughput(Throughput::Elements(stored.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("replace_truncated", len),
            &stored,
            |b, stored| {
                b.iter_batched(
                    Selection::<String>::new,
                    |mut sel| {
                        black_box(sel.replace_truncated(stored.iter().cloned()));
                        sel
                    },
                    BatchSize::SmallInput,
                );
            },
        );
        group.bench_with_input(
            BenchmarkId::new("try_replace_with", len),
            &stored,
            |b, stored| {
                b.iter_batched(
                    Selection::<String>::new,
                    |mut sel| {
                        black_box(sel.try_replace_with(stored.iter().cloned()));
                        sel
                    },
                    BatchSize::SmallInput,
                );
            },
        );
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
}

criterion_group!(benches, bench_toggle_churn, bench_restore);
criterion_main!(benches);
