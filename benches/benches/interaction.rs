// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `tempora_interaction` hot paths: drag streams and minimap markers.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tempora_interaction::{Minimap, MinimapDrag, NoCapture, Scrubber, ScrubberTrack};

fn bench_scrubber_drag(c: &mut Criterion) {
    c.bench_function("scrubber_drag_1000_moves", |b| {
        b.iter(|| {
            let mut scrubber = Scrubber::new(ScrubberTrack::new(0.0, 800.0), NoCapture);
            scrubber.press(black_box(10.0));
            let mut last = 0.0;
            for i in 0..1_000 {
                last = scrubber.drag_to(f64::from(i) - 100.0).unwrap_or(last);
            }
            scrubber.release();
            last
        });
    });
}

fn bench_minimap(c: &mut Criterion) {
    let minimap = Minimap::new(250_000.0, 1_280.0, 400.0);
    let xs: Vec<f64> = (0..10_000).map(|i| f64::from(i) * 25.0).collect();
    c.bench_function("minimap_markers_10k", |b| {
        b.iter(|| minimap.markers(black_box(&xs)).sum::<f64>());
    });
    c.bench_function("minimap_drag_1000_moves", |b| {
        b.iter(|| {
            let mut drag = MinimapDrag::new(NoCapture);
            drag.begin(20.0, 0.0);
            let mut scroll = 0.0;
            for i in 0..1_000 {
                scroll = drag.drag_to(&minimap, 20.0 + f64::from(i) * 0.4).unwrap_or(scroll);
            }
            drag.end();
            scroll
        });
    });
}

criterion_group!(benches, bench_scrubber_drag, bench_minimap);
criterion_main!(benches);
