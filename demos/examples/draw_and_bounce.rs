// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw, drag and bounce.
//!
//! Draws two bricks on a headless surface, drags one of them, then tilts the
//! "device" and lets the frame loop bounce them off the walls.
//!
//! Run:
//! - `cargo run -p tumble_demos --example draw_and_bounce`
//! - `RUST_LOG=tumble_surface=trace cargo run -p tumble_demos --example draw_and_bounce`

use kurbo::{Point, Size};
use tumble_demos::{init_logging, print_bricks, run_frames, touch};
use tumble_gesture::TouchId;
use tumble_motion::MotionSample;
use tumble_surface::{HeadlessView, Surface, SurfaceConfig, TouchPhase};

fn main() {
    init_logging();

    let mut view = HeadlessView::new();
    let area = view.create_root(Point::new(0.0, 0.0), Size::new(320.0, 480.0));
    let mut surface =
        Surface::new(view, SurfaceConfig::default()).expect("default config is valid");
    let activation = surface.activate([area]);
    println!("activated: {activation:?}");

    // One finger draws up-left of its anchor, another down-right.
    let (a, b) = (TouchId(0), TouchId(1));
    touch(&mut surface, TouchPhase::Start, a, area, Point::new(120.0, 120.0));
    touch(&mut surface, TouchPhase::Move, a, area, Point::new(60.0, 80.0));
    touch(&mut surface, TouchPhase::End, a, area, Point::new(60.0, 80.0));
    touch(&mut surface, TouchPhase::Start, b, area, Point::new(200.0, 300.0));
    touch(&mut surface, TouchPhase::Move, b, area, Point::new(260.0, 350.0));
    touch(&mut surface, TouchPhase::End, b, area, Point::new(260.0, 350.0));
    println!("after drawing:");
    print_bricks(&surface);

    // Drag the first brick by its middle.
    let first = surface.bricks().next().expect("a brick was drawn");
    touch(&mut surface, TouchPhase::Start, a, first, Point::new(90.0, 100.0));
    touch(&mut surface, TouchPhase::Move, a, first, Point::new(150.0, 220.0));
    touch(&mut surface, TouchPhase::End, a, first, Point::new(150.0, 220.0));
    println!("after dragging {first:?}:");
    print_bricks(&surface);

    // Tilt left and toward the user: gravity pulls bricks to the bottom-left.
    surface.on_motion(MotionSample::new(-4.0, -9.0, 0.5));
    let mut t = 0.0;
    for second in 1..=3 {
        t = run_frames(&mut surface, t, 1000.0, 60.0);
        println!("after {second}s:");
        print_bricks(&surface);
    }

    surface.stop();
    println!("loop running: {}", surface.is_running());
}
