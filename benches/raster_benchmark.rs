#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for the line rasterizers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridline::prelude::*;

fn interpolation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolation");

    for length in [10, 100, 1_000, 10_000] {
        let p1 = GridPoint::new(length, length / 3);

        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, _| {
            b.iter(|| rasterize(black_box(GridPoint::ORIGIN), black_box(p1)));
        });
    }

    group.finish();
}

fn supercover_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("supercover");

    for factor in [1, 10, 50] {
        let bounds = GridBounds::square(1_024).expect("non-zero grid");
        let sc = Supercover::with_factor(bounds, factor).expect("non-zero factor");
        let segment = Segment::from_coords(3, 7, 1_000, 611);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("k_{factor}")),
            &factor,
            |b, _| {
                b.iter(|| sc.rasterize_segment(black_box(segment)));
            },
        );
    }

    group.finish();
}

fn orthogonal_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("orthogonal");

    for length in [10, 100, 1_000, 10_000] {
        let p1 = GridPoint::new(length, length / 3);

        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, _| {
            b.iter(|| rasterize_orthogonal(black_box(GridPoint::ORIGIN), black_box(p1)));
        });
    }

    group.finish();
}

fn interaction_benchmark(c: &mut Criterion) {
    c.bench_function("drag_and_rasterize", |b| {
        b.iter(|| {
            let mut state = InteractionState::default();
            state.apply(PointerEvent::Down(GridPoint::new(2, 2)));
            for i in 0..12 {
                state.apply(PointerEvent::Move(black_box(GridPoint::new(i, 11 - i))));
                black_box(rasterize(state.a(), state.b()));
            }
            state.apply(PointerEvent::Up);
        });
    });
}

criterion_group!(
    benches,
    interpolation_benchmark,
    supercover_benchmark,
    orthogonal_benchmark,
    interaction_benchmark
);
criterion_main!(benches);
