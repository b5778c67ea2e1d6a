// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `tempora_date` parsing and `tempora_timeline` loading.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tempora_benches::synthetic_timeline;
use tempora_date::parse_date;
use tempora_timeline::{Timeline, chronological};

fn bench_parse(c: &mut Criterion) {
    let inputs = [
        ("year", "1969"),
        ("bce_year", "-3000"),
        ("month", "1969-07"),
        ("day", "1969-07-20"),
        ("time_suffix", "1969-07-20T20:17:40Z"),
        ("fallback", "the late bronze age"),
    ];
    let mut group = c.benchmark_group("parse_date");
    for (name, input) in inputs {
        group.bench_function(name, |b| b.iter(|| parse_date(black_box(input))));
    }
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline");
    for n in [100_usize, 1_000, 10_000] {
        let timeline = synthetic_timeline(n, 500, 8, 7);
        let json = serde_json::to_string(&timeline).expect("serialize synthetic timeline");
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("from_json", n), &json, |b, json| {
            b.iter(|| Timeline::from_json(black_box(json)).expect("valid timeline"));
        });
        group.bench_with_input(BenchmarkId::new("chronological", n), &timeline, |b, t| {
            b.iter(|| chronological(black_box(&t.events)).len());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_load);
criterion_main!(benches);
