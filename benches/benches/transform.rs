// Copyright 2025 the Ledmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ledmap_transform::{FixedPointTransform, FloatTransform, PointXY};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u16(&mut self) -> u16 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 48) as u16
    }

    fn next_unit(&mut self) -> f32 {
        f32::from(self.next_u16()) / 65535.0
    }
}

fn fixed_points(n: usize, seed: u64) -> Vec<PointXY<u16>> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| PointXY::new(rng.next_u16(), rng.next_u16()))
        .collect()
}

fn float_points(n: usize, seed: u64) -> Vec<PointXY<f32>> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| PointXY::new(rng.next_unit(), rng.next_unit()))
        .collect()
}

fn bench_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/fixed");
    let points = fixed_points(4096, 0x5EED);
    group.throughput(Throughput::Elements(points.len() as u64));

    let cases = [
        ("identity", FixedPointTransform::IDENTITY),
        ("from_size", FixedPointTransform::from_size(320, 240)),
        (
            "rotated",
            FixedPointTransform::to_bounds_rect(
                PointXY::new(100, 100),
                PointXY::new(60_000, 60_000),
                0x1000,
            ),
        ),
    ];

    for (name, tx) in cases {
        group.bench_with_input(BenchmarkId::new("transform", name), &tx, |b, tx| {
            b.iter(|| {
                for &p in &points {
                    black_box(tx.transform(black_box(p)));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("transform_general", name), &tx, |b, tx| {
            b.iter(|| {
                for &p in &points {
                    black_box(tx.transform_general(black_box(p)));
                }
            });
        });
    }

    group.finish();
}

fn bench_float(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/float");
    let points = float_points(4096, 0xF10A7);
    group.throughput(Throughput::Elements(points.len() as u64));

    let identity = FloatTransform::new();
    let scaled = FloatTransform::new();
    scaled.set_scale(0.5);
    scaled.set_offset_x(0.25);
    let rotated = scaled.detached();
    rotated.set_rotation(0.125);

    for (name, tx) in [("identity", identity), ("scaled", scaled), ("rotated", rotated)] {
        let state = tx.state();
        group.bench_with_input(BenchmarkId::new("transform", name), &tx, |b, tx| {
            b.iter(|| {
                for &p in &points {
                    black_box(tx.transform(black_box(p)));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("transform_general", name), &state, |b, state| {
            b.iter(|| {
                for &p in &points {
                    black_box(state.transform_general(black_box(p)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fixed, bench_float);
criterion_main!(benches);
