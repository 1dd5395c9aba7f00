// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the runnable demos under `demos/examples/`.

use kurbo::Point;
use tumble_gesture::TouchId;
use tumble_surface::{ElementId, HeadlessView, Surface, TouchBatch, TouchPhase, View};

/// Installs `env_logger`, defaulting to `debug` for the tumble crates.
///
/// Override with `RUST_LOG`, for example `RUST_LOG=tumble_surface=trace`.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("tumble=debug");
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Sends a single-touch batch.
pub fn touch(
    surface: &mut Surface<HeadlessView>,
    phase: TouchPhase,
    finger: TouchId,
    target: ElementId,
    at: Point,
) {
    let control = surface.handle_touch(&TouchBatch::single(phase, finger, target, at));
    log::debug!("{phase:?} {finger:?} on {target:?} at {at:?} -> {control:?}");
}

/// Feeds frame callbacks at `hz` for `duration_ms`, starting at `start_ms`.
///
/// Returns the timestamp after the last callback.
pub fn run_frames(
    surface: &mut Surface<HeadlessView>,
    start_ms: f64,
    duration_ms: f64,
    hz: f64,
) -> f64 {
    let mut t = start_ms;
    while t < start_ms + duration_ms {
        if !surface.on_frame(t).rearm() {
            break;
        }
        t += 1000.0 / hz;
    }
    t
}

/// Prints every finalized brick with its position and velocity.
pub fn print_bricks(surface: &Surface<HeadlessView>) {
    for brick in surface.bricks() {
        let size = surface.view().size(brick).unwrap_or_default();
        match surface.models().kinematics(&brick) {
            Ok(k) => println!(
                "  {brick:?} {:.0}x{:.0} at ({:.2}, {:.2}) v=({:.3}, {:.3}) {:?}",
                size.width,
                size.height,
                k.position.x,
                k.position.y,
                k.velocity.x,
                k.velocity.y,
                k.manipulation
            ),
            Err(err) => println!("  {brick:?}: {err}"),
        }
    }
}
