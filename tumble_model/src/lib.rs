// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tumble Model: per-element model storage for touch-driven physics surfaces.
//!
//! A view layer owns rectangles on screen; this crate owns what those rectangles
//! *mean*. Every element that takes part in gestures or physics has a small
//! key→value store attached to it, holding:
//!
//! - **Position**: the model-space top-left corner. This is the single source of
//!   truth for where a brick is; the view is always updated from it.
//! - **Velocity**: signed per-axis speed. `z` is carried for symmetry with the
//!   motion input and never applied to a position axis.
//! - **Acceleration**: a handle to the one [`SharedAcceleration`] value that
//!   every free brick reads.
//! - **Manipulation**: whether a finger currently owns the brick
//!   ([`Manipulation`]). Physics only touches [`Manipulation::Free`] bricks.
//!
//! Width and height are not stored here; they belong to the view and are read
//! on demand.
//!
//! ## Quick Start
//!
//! ```rust
//! use kurbo::Point;
//! use tumble_model::{
//!     Manipulation, ModelTable, SharedAcceleration, Vec3, POSITION, VELOCITY,
//! };
//!
//! let acceleration = SharedAcceleration::new();
//! let mut models = ModelTable::<u32>::new();
//!
//! // A brick found in the view at (10, 20).
//! models.init_free_brick(7, Point::new(10.0, 20.0), &acceleration);
//!
//! let store = models.get(&7).unwrap();
//! assert_eq!(store.get(POSITION), Some(&Point::new(10.0, 20.0)));
//! assert_eq!(store.get(VELOCITY), Some(&Vec3::ZERO));
//!
//! // One write is seen by every brick holding the handle.
//! acceleration.set(Vec3::new(0.0, -9.8, 0.0));
//! let k = store.kinematics().unwrap();
//! assert_eq!(k.acceleration.y, -9.8);
//! assert_eq!(k.manipulation, Manipulation::Free);
//! ```
//!
//! ## Storage
//!
//! [`ModelStore`] keeps its entries in a sorted inline `SmallVec` and looks
//! them up by binary search. The four built-in fields fit inline.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod field;
mod manipulation;
mod shared;
mod store;
mod table;
mod vector;

pub use error::ModelError;
pub use field::{
    ACCELERATION, Field, FieldId, FieldValue, MANIPULATION, ModelValue, POSITION, VELOCITY,
};
pub use manipulation::Manipulation;
pub use shared::SharedAcceleration;
pub use store::{Kinematics, ModelStore};
pub use table::ModelTable;
pub use vector::Vec3;
