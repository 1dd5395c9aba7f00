// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `tumble_physics`: the per-brick step and whole-frame integration.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use tumble_model::{Kinematics, Manipulation, ModelTable, SharedAcceleration, VELOCITY, Vec3};
use tumble_physics::{FaultPolicy, Geometry, Integrator, PhysicsConfig, integrate};
use tumble_surface::{HeadlessView, Marker, Surface, SurfaceConfig, View};

const BOUNDS: Rect = Rect::new(0.0, 0.0, 1024.0, 768.0);

struct Uniform;

impl Geometry<u32> for Uniform {
    fn size_of(&self, _: &u32) -> Option<Size> {
        Some(Size::new(24.0, 24.0))
    }

    fn container_bounds(&self, _: &u32) -> Option<Rect> {
        Some(BOUNDS)
    }
}

fn seeded_table(n: u32, accel: &SharedAcceleration) -> ModelTable<u32> {
    let mut models = ModelTable::new();
    for i in 0..n {
        let x = f64::from(i % 40) * 25.0;
        let y = f64::from(i / 40 % 30) * 25.0;
        models.init_free_brick(i, Point::new(x + 1.0, y + 1.0), accel);
        models
            .entry(i)
            .set(VELOCITY, Vec3::new(f64::from(i % 7) - 3.0, f64::from(i % 5) - 2.0, 0.0));
    }
    models
}

fn bench_integrate(c: &mut Criterion) {
    let config = PhysicsConfig::default();
    let mut group = c.benchmark_group("physics/integrate");

    group.bench_function("free_flight", |b| {
        let mut k = Kinematics {
            position: Point::new(500.0, 400.0),
            velocity: Vec3::new(0.5, -0.25, 0.0),
            acceleration: Vec3::new(0.1, 0.1, 0.0),
            manipulation: Manipulation::Free,
        };
        b.iter(|| black_box(integrate(&mut k, Size::new(24.0, 24.0), BOUNDS, &config)));
    });

    group.bench_function("wall_bounce", |b| {
        let start = Kinematics {
            position: Point::new(0.5, 0.5),
            velocity: Vec3::new(-3.0, 3.0, 0.0),
            acceleration: Vec3::ZERO,
            manipulation: Manipulation::Free,
        };
        b.iter_batched(
            || start,
            |mut k| black_box(integrate(&mut k, Size::new(24.0, 24.0), BOUNDS, &config)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let integrator = Integrator::new(PhysicsConfig::default()).with_fault_policy(FaultPolicy::Skip);
    let mut group = c.benchmark_group("physics/step");

    for n in [16_u32, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("model_table", n), &n, |b, &n| {
            let accel = SharedAcceleration::with_value(Vec3::new(0.3, -9.8, 0.0));
            let mut models = seeded_table(n, &accel);
            b.iter(|| black_box(integrator.step(&mut models, &Uniform, 0..n).integrated));
        });
    }

    for n in [16_u32, 256] {
        group.bench_with_input(BenchmarkId::new("surface_headless", n), &n, |b, &n| {
            let mut view = HeadlessView::new();
            let area = view.create_root(Point::ZERO, Size::new(1024.0, 768.0));
            for i in 0..n {
                let at = Point::new(f64::from(i % 40) * 25.0 + 1.0, f64::from(i / 40) * 25.0 + 1.0);
                if let Some(brick) = view.create_child(area, at, Size::new(24.0, 24.0)) {
                    view.add_class(brick, Marker::Brick);
                }
            }
            let Ok(mut surface) = Surface::new(view, SurfaceConfig::default()) else {
                return;
            };
            surface.activate([area]);
            b.iter(|| black_box(surface.step().integrated));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_integrate, bench_step);
criterion_main!(benches);
