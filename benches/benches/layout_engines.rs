// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the four `tempora_layout` engines.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tempora_benches::synthetic_timeline;
use tempora_layout::{
    LayoutCache, LayoutKey, ViewConfigs, ViewKind, ViewUiState, compute_view,
};

fn bench_engines(c: &mut Criterion) {
    let configs = ViewConfigs::default();
    let ui = ViewUiState::default();

    for kind in ViewKind::ALL {
        let mut group = c.benchmark_group(format!("layout_{}", kind.name()));
        for (n, span) in [(100_usize, 200_u32), (1_000, 2_000), (10_000, 5_000)] {
            let timeline = synthetic_timeline(n, span, 12, 42);
            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(BenchmarkId::from_parameter(n), &timeline, |b, t| {
                b.iter(|| compute_view(kind, black_box(t), &configs, &ui));
            });
        }
        group.finish();
    }
}

fn bench_cache(c: &mut Criterion) {
    let configs = ViewConfigs::default();
    let ui = ViewUiState::default();
    let timeline = synthetic_timeline(5_000, 3_000, 12, 9);
    let mut cache = LayoutCache::new();
    let key = LayoutKey {
        kind: ViewKind::Tree,
        data_revision: 1,
        ui_revision: 1,
    };
    c.bench_function("layout_cache_hit", |b| {
        b.iter(|| cache.get_or_compute(black_box(key), &timeline, &configs, &ui).placed_events());
    });
}

criterion_group!(benches, bench_engines, bench_cache);
criterion_main!(benches);
