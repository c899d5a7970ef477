#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for naive, length-preserving and searching rotations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use discrete_geom::prelude::*;

fn rectangle_rotation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rectangle_rotation");
    let rect = Rectangle::from_corners(Point::new(0, 0), Point::new(1_000, 400));
    let center = rect.midpoint();

    for degrees in [15.0, 45.0, 90.0] {
        let angle = Angle::degrees(degrees);

        group.bench_with_input(BenchmarkId::new("naive", degrees), &angle, |b, &angle| {
            b.iter(|| black_box(&rect).rotate(angle, center));
        });
        group.bench_with_input(BenchmarkId::new("pixel_count", degrees), &angle, |b, &angle| {
            b.iter(|| black_box(&rect).rotate_preserving(angle, center, LengthMode::PixelCount));
        });
        group.bench_with_input(BenchmarkId::new("distance", degrees), &angle, |b, &angle| {
            b.iter(|| black_box(&rect).rotate_preserving(angle, center, LengthMode::Distance));
        });
        group.bench_with_input(BenchmarkId::new("search", degrees), &angle, |b, &angle| {
            let search = AngleSearch::default();
            b.iter(|| black_box(&rect).rotate_searching(angle, center, &search));
        });
    }

    group.finish();
}

fn chain_rotation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_rotation");

    for size in [10, 100, 1_000] {
        let chain: Vec<Point> = (0..size).map(|i| Point::new(i * 7, (i * 13) % 50)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &chain, |b, chain| {
            b.iter(|| {
                discrete_geom::rotate::rotate_chain(
                    black_box(chain),
                    Angle::degrees(33.0),
                    Point::ORIGIN,
                    RotationMode::default(),
                )
                .expect("chain is not empty")
            });
        });
    }

    group.finish();
}

fn canvas_plan_benchmark(c: &mut Criterion) {
    let config = KernelConfig::default();

    c.bench_function("canvas_plan_mapping_256", |b| {
        b.iter(|| {
            let plan = RotatedCanvas::plan(
                256,
                256,
                Angle::degrees(30.0),
                RotationMode::Naive,
                black_box(&config),
            )
            .expect("plan fits the default resolution");
            plan.mapping().filter(|(_, src)| src.is_some()).count()
        });
    });
}

criterion_group!(
    benches,
    rectangle_rotation_benchmark,
    chain_rotation_benchmark,
    canvas_plan_benchmark
);
criterion_main!(benches);
