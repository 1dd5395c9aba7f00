// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tumble Physics: a frame-gated integrator for free bricks.
//!
//! Every brick that no finger owns is advanced once per executed frame:
//!
//! ```text
//! velocity += acceleration * acceleration_coefficient   (default 0.05)
//! velocity *= friction                                  (default 0.99)
//! left     += velocity.x
//! top      -= velocity.y
//! ```
//!
//! then bounced off the walls of its container: a brick whose near edge is at
//! or past a bound, or whose far edge is past one, is clamped back inside and
//! has that velocity component negated. Reflection loses no energy; friction is
//! the only damping.
//!
//! ## Pieces
//!
//! - [`integrate`]: one brick, one step. Pure function over [`Kinematics`](tumble_model::Kinematics).
//! - [`Integrator`]: one step over many bricks, reading live sizes and container
//!   bounds through [`Geometry`] and writing back through
//!   [`ModelTable`](tumble_model::ModelTable).
//! - [`FrameGate`]: turns host callback timestamps into step/skip decisions at
//!   the target rate (default 120 Hz). Skipped callbacks do no work and build up
//!   no catch-up debt.
//! - [`FrameScheduler`]: owns `running` and the gate, with explicit
//!   [`start`](FrameScheduler::start) and [`stop`](FrameScheduler::stop).
//!
//! ## Driving it
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use tumble_model::{ModelTable, SharedAcceleration, Vec3};
//! use tumble_physics::{FrameScheduler, Geometry, Integrator, PhysicsConfig};
//!
//! struct Box10;
//! impl Geometry<u32> for Box10 {
//!     fn size_of(&self, _: &u32) -> Option<Size> { Some(Size::new(10.0, 10.0)) }
//!     fn container_bounds(&self, _: &u32) -> Option<Rect> { Some(Rect::new(0.0, 0.0, 320.0, 480.0)) }
//! }
//!
//! let config = PhysicsConfig::default();
//! let integrator = Integrator::new(config);
//! let mut scheduler = FrameScheduler::new(config.frame_duration_ms());
//! let gravity = SharedAcceleration::with_value(Vec3::new(0.0, -9.8, 0.0));
//! let mut models = ModelTable::new();
//! models.init_free_brick(1_u32, Point::new(100.0, 100.0), &gravity);
//!
//! scheduler.start();
//! let mut t = 0.0;
//! while t < 250.0 {
//!     let tick = scheduler.tick(t);
//!     if tick.is_step() {
//!         integrator.step(&mut models, &Box10, [1]);
//!     }
//!     t += 1000.0 / 60.0;
//! }
//! // Gravity pulls the brick toward the bottom of the page.
//! assert!(models.kinematics(&1).unwrap().position.y > 100.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod gate;
mod integrate;
mod integrator;
mod scheduler;

pub use config::{
    ACCELERATION_COEFFICIENT, ConfigError, FRAME_RATE, FRICTION_FACTOR, FaultPolicy, PhysicsConfig,
};
pub use gate::{FrameDecision, FrameGate};
pub use integrate::{Contact, integrate};
pub use integrator::{Geometry, Integrator, StepReport};
pub use scheduler::{FrameScheduler, Tick};
