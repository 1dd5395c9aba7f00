// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for gesture tracking and touch dispatch.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use tumble_gesture::{GestureTable, TouchId};
use tumble_surface::{HeadlessView, Surface, SurfaceConfig, TouchBatch, TouchPhase, TouchPoint};

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/table");

    group.bench_function("track_draw", |b| {
        let mut table = GestureTable::new();
        let _ = table.begin_draw(1_u32, TouchId(0), Point::new(100.0, 100.0), 2);
        let mut x = 0.0;
        b.iter(|| {
            x = (x + 1.0) % 200.0;
            black_box(table.track(&1, TouchId(0), Point::new(x, 50.0)))
        });
    });

    group.bench_function("begin_end_move", |b| {
        let mut table = GestureTable::new();
        b.iter(|| {
            let _ = table.begin_move(7_u32, TouchId(3), Point::new(10.0, 10.0), Point::ZERO);
            black_box(table.end(&7, TouchId(3)))
        });
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/dispatch");

    group.bench_function("draw_cycle", |b| {
        b.iter_batched(
            || {
                let mut view = HeadlessView::new();
                let area = view.create_root(Point::ZERO, Size::new(800.0, 600.0));
                let surface = Surface::new(view, SurfaceConfig::default()).ok();
                (surface, area)
            },
            |(surface, area)| {
                let Some(mut surface) = surface else {
                    return;
                };
                surface.activate([area]);
                let finger = TouchId(1);
                for (phase, at) in [
                    (TouchPhase::Start, Point::new(100.0, 100.0)),
                    (TouchPhase::Move, Point::new(150.0, 120.0)),
                    (TouchPhase::Move, Point::new(180.0, 160.0)),
                    (TouchPhase::End, Point::new(180.0, 160.0)),
                ] {
                    black_box(surface.handle_touch(&TouchBatch::single(phase, finger, area, at)));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("ten_finger_move_batch", |b| {
        let mut view = HeadlessView::new();
        let areas: Vec<_> = (0..10)
            .map(|i| view.create_root(Point::new(80.0 * f64::from(i), 0.0), Size::new(80.0, 600.0)))
            .collect();
        let Ok(mut surface) = Surface::new(view, SurfaceConfig::default()) else {
            return;
        };
        surface.activate(areas.iter().copied());
        let mut batch = TouchBatch::new(TouchPhase::Move);
        for (i, &area) in (0_u32..).zip(&areas) {
            let finger = TouchId(u64::from(i));
            let at = Point::new(80.0 * f64::from(i) + 10.0, 10.0);
            surface.handle_touch(&TouchBatch::single(TouchPhase::Start, finger, area, at));
            batch.push(TouchPoint::new(finger, area, at + Vec2::new(40.0, 200.0)));
        }
        b.iter(|| black_box(surface.handle_touch(&batch)));
    });

    group.finish();
}

criterion_group!(benches, bench_table, bench_dispatch);
criterion_main!(benches);
