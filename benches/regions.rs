//! Benchmarks for region enumeration and union.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use deltoid::regions::{overlap, CircleRegion, RectangleRegion, Region, SphereRegion};
use deltoid::{Vec2, Vec3};

/// Generates deterministic circles for union benchmarks.
fn generate_circles(count: usize, seed: u64) -> Vec<CircleRegion<f64>> {
    let mut circles = Vec::with_capacity(count);
    let mut state = seed;
    let mut next = move || {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state as f64 / u64::MAX as f64
    };

    for _ in 0..count {
        let centre = Vec2::new(next() * 100.0, next() * 100.0).unwrap();
        circles.push(CircleRegion::new(centre, next() * 10.0 + 0.5).unwrap());
    }
    circles
}

fn bench_circle_enclosed_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_enclosed_points");

    for radius in [4.0, 16.0, 64.0] {
        let circle = CircleRegion::new(Vec2::new(0.25, -0.75).unwrap(), radius).unwrap();
        let cells = (2.0 * radius + 1.0) * (2.0 * radius + 1.0);
        group.throughput(Throughput::Elements(cells as u64));

        group.bench_with_input(BenchmarkId::new("radius", radius), &circle, |b, circle| {
            b.iter(|| black_box(circle).enclosed_points())
        });
    }

    group.finish();
}

fn bench_sphere_enclosed_points(c: &mut Criterion) {
    let sphere = SphereRegion::new(Vec3::origin(), 12.0).unwrap();
    c.bench_function("sphere_enclosed_points_r12", |b| {
        b.iter(|| black_box(&sphere).enclosed_points())
    });
}

fn bench_overlap(c: &mut Criterion) {
    let circle = CircleRegion::new(Vec2::origin(), 32.0).unwrap();
    let window = RectangleRegion::new(Vec2::origin(), Vec2::new(48.0, 48.0).unwrap());

    c.bench_function("overlap_quadrant_r32", |b| {
        b.iter(|| overlap(black_box(&window), black_box(&circle)))
    });
}

fn bench_circle_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_union");
    let circles = generate_circles(1000, 12345);

    group.throughput(Throughput::Elements(circles.len() as u64));
    group.bench_function("fold_1000", |b| {
        b.iter(|| {
            circles
                .iter()
                .try_fold(circles[0], |acc, c| acc.union(black_box(c)))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_circle_enclosed_points,
    bench_sphere_enclosed_points,
    bench_overlap,
    bench_circle_union
);
criterion_main!(benches);
