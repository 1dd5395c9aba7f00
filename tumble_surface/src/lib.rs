// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tumble Surface: draw boxes with your fingers, then tilt the device and watch
//! them bounce.
//!
//! A [`Surface`] sits between three host callbacks and a [`View`]:
//!
//! - **Touch** ([`Surface::handle_touch`]): a finger landing on an activated
//!   container draws a new brick that spans the landing point and the finger;
//!   a finger landing on a finished brick drags it, keeping the grab point under
//!   the finger. Every finger is tracked independently.
//! - **Device motion** ([`Surface::on_motion`]): each sample overwrites the
//!   acceleration shared by all bricks.
//! - **Animation frame** ([`Surface::on_frame`]): at most once per frame
//!   duration (120 Hz by default), every brick not under a finger is
//!   accelerated, damped, moved and bounced off its container's walls.
//!
//! The pieces live in their own crates and can be used on their own:
//! [`tumble_model`] (per-element data), [`tumble_gesture`] (the per-target
//! draw/move state machine), [`tumble_physics`] (integrator and frame gate) and
//! [`tumble_motion`] (device-motion adapter).
//!
//! ## Quick Start
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use tumble_gesture::TouchId;
//! use tumble_motion::MotionSample;
//! use tumble_surface::{
//!     EventControl, HeadlessView, Marker, Surface, SurfaceConfig, TouchBatch, TouchPhase, View,
//! };
//!
//! let mut view = HeadlessView::new();
//! let area = view.create_root(Point::ZERO, Size::new(320.0, 480.0));
//! let mut surface = Surface::new(view, SurfaceConfig::default()).unwrap();
//! let activation = surface.activate([area]);
//! assert!(activation.started);
//! assert!(surface.view().has_class(area, Marker::DrawingArea));
//!
//! // Draw a 40x40 brick.
//! let finger = TouchId(7);
//! let at = |x, y| Point::new(x, y);
//! surface.handle_touch(&TouchBatch::single(TouchPhase::Start, finger, area, at(100.0, 100.0)));
//! let control =
//!     surface.handle_touch(&TouchBatch::single(TouchPhase::Move, finger, area, at(140.0, 140.0)));
//! assert!(control.contains(EventControl::PREVENT_DEFAULT));
//! surface.handle_touch(&TouchBatch::single(TouchPhase::End, finger, area, at(140.0, 140.0)));
//! let brick = surface.bricks().next().unwrap();
//!
//! // Tilt: gravity points toward the right edge.
//! surface.on_motion(MotionSample::new(9.8, 0.0, 0.0));
//! let mut t = 0.0;
//! while t < 250.0 {
//!     surface.on_frame(t);
//!     t += 1000.0 / 60.0;
//! }
//! assert!(surface.view().offset(brick).unwrap().x > 100.0);
//! ```
//!
//! ## Hosting
//!
//! Implement [`View`] for your element tree, translate platform touch events
//! into [`TouchBatch`]es and apply the returned [`EventControl`], forward
//! device-motion samples, and call [`Surface::on_frame`] from the display's
//! frame callback, requesting another callback while [`Tick::rearm`] is true.
//! [`HeadlessView`] is a complete in-memory implementation for tests.
//!
//! Nothing here returns an error at runtime: malformed touches, bricks with
//! missing data and absent sensors are logged through the `log` facade and
//! skipped.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod headless;
mod input;
mod routing;
mod surface;
mod view;

pub use config::SurfaceConfig;
pub use headless::{ElementId, HeadlessView};
pub use input::{EventControl, TouchBatch, TouchPhase, TouchPoint};
pub use surface::{Activation, Surface};
pub use view::{Marker, View};

pub use tumble_physics::Tick;
