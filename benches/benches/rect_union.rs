// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_rect_union::{UnionOptions, line_highlight_rects};

/// Line rectangles of a ragged-right paragraph, stacked without gaps.
fn paragraph_lines(count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            let y = i as f64 * 18.0;
            let width = 200.0 + ((i * 37) % 11) as f64 * 31.0;
            Rect::new(0.0, y, width, y + 18.0)
        })
        .collect()
}

/// Overlapping boxes scattered by a small linear congruential generator.
fn scattered_boxes(count: usize) -> Vec<Rect> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move |range: f64| {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((state >> 33) % 10_000) as f64 / 10_000.0 * range
    };
    let side = (count as f64).sqrt() * 40.0;
    (0..count)
        .map(|_| {
            let x = next(side).round();
            let y = next(side).round();
            let w = 10.0 + next(60.0).round();
            let h = 10.0 + next(60.0).round();
            Rect::new(x, y, x + w, y + h)
        })
        .collect()
}

fn bench_text_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect_union/text_highlight");
    let options = UnionOptions::new().with_corner_radius(4.0);

    for len in [8_usize, 64, 512, 4_096] {
        let rects = line_highlight_rects(paragraph_lines(len), kurbo::Vec2::ZERO, -2.0);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &rects, |b, rects| {
            b.iter(|| black_box(options.rounded_union(black_box(rects))));
        });
    }

    group.finish();
}

fn bench_scattered(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect_union/scattered");
    let options = UnionOptions::new().with_corner_radius(6.0);

    // Boundary extraction alone versus the full pipeline with path emission.
    for len in [16_usize, 256, 2_048] {
        let rects = scattered_boxes(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("contours", len), &rects, |b, rects| {
            b.iter(|| black_box(options.contours(black_box(rects))));
        });
        group.bench_with_input(BenchmarkId::new("rounded_union", len), &rects, |b, rects| {
            b.iter(|| black_box(options.rounded_union(black_box(rects))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_highlight, bench_scattered);
criterion_main!(benches);
