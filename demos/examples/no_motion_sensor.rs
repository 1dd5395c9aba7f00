// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surfaces without a motion sensor.
//!
//! Bricks keep whatever momentum they have and coast to a stop under friction.
//!
//! Run:
//! - `cargo run -p tumble_demos --example no_motion_sensor`

use kurbo::{Point, Size};
use tumble_demos::{init_logging, print_bricks, run_frames};
use tumble_model::{VELOCITY, Vec3};
use tumble_motion::{MotionCapability, MotionSample};
use tumble_surface::{HeadlessView, Marker, Surface, SurfaceConfig, View};

fn main() {
    init_logging();

    // A container that already holds one brick before activation.
    let mut view = HeadlessView::new();
    let area = view.create_root(Point::new(20.0, 20.0), Size::new(200.0, 200.0));
    let brick = view
        .create_child(area, Point::new(100.0, 100.0), Size::new(30.0, 30.0))
        .expect("area exists");
    view.add_class(brick, Marker::Brick);

    let config = SurfaceConfig::default().with_motion(MotionCapability::Unsupported);
    let mut surface = Surface::new(view, config).expect("default physics is valid");
    surface.activate([area]);

    // Give it a shove; no sensor samples will ever arrive.
    surface
        .models_mut()
        .entry(brick)
        .set(VELOCITY, Vec3::new(6.0, 3.0, 0.0));
    let accepted = surface.on_motion(MotionSample::new(9.8, 9.8, 9.8));
    println!("sample accepted: {accepted}");

    let mut t = 0.0;
    for half_second in 1..=6 {
        t = run_frames(&mut surface, t, 500.0, 120.0);
        println!("after {}ms:", half_second * 500);
        print_bricks(&surface);
    }
}
