//! Benchmarks for the placement engine.
//!
//! Run with: cargo bench -p cascade-layout --bench placement_bench

use cascade_layout::{Anchor, Point, Rect, Size, place_with_report};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/place");
    let viewport = Rect::from_size(1920, 1080);

    let cases = [
        ("fits", Anchor::Point(Point::new(100, 100))),
        ("right_overflow", Anchor::Point(Point::new(1900, 10))),
        ("corner_overflow", Anchor::Point(Point::new(1900, 1000))),
        ("submenu", Anchor::Rect(Rect::new(1750, 400, 160, 24))),
    ];

    for (name, anchor) in cases {
        group.bench_with_input(BenchmarkId::new("anchor", name), &anchor, |b, anchor| {
            b.iter(|| black_box(place_with_report(Size::new(200, 300), *anchor, viewport)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_place);
criterion_main!(benches);
