// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tumble Gesture: the touch gesture state machine for drawing and moving bricks.
//!
//! Each touch target (a drawing surface, or an existing brick) is in one of
//! three states:
//!
//! - **Idle**: no entry in the [`GestureTable`].
//! - **Drawing**: a new brick is being sized between a fixed anchor and the
//!   finger. Any of the four diagonal directions works.
//! - **Moving**: an existing brick follows the finger, with the grabbed point
//!   kept fixed under it (see [`GrabOffset`]).
//!
//! Transitions:
//!
//! | From | Trigger | To | Event |
//! |------|---------|----|-------|
//! | Idle | start on surface | Drawing | [`GestureEvent::DrawStarted`] |
//! | Drawing | move | Drawing | [`GestureEvent::DrawResized`] |
//! | Drawing | end | Idle | [`GestureEvent::DrawFinished`] |
//! | Idle(brick) | start on brick | Moving | [`GestureEvent::MoveStarted`] |
//! | Moving | move | Moving | [`GestureEvent::Moved`] |
//! | Moving | end | Idle | [`GestureEvent::MoveFinished`] |
//!
//! The table never assumes a single active touch. Every target has its own
//! slot, and each slot belongs to the finger that opened it, so concurrent
//! gestures on different targets never interfere.
//!
//! ## Design
//!
//! The table is a pure state machine. It does not create elements, move them,
//! or decide which element a touch landed on; callers do that and then apply
//! the returned [`GestureEvent`]s to their model and view. This keeps gesture
//! state in one table owned by the interaction layer instead of scattered over
//! view objects.
//!
//! This crate is `no_std`; the table allocates through `hashbrown`.

#![no_std]

mod error;
mod event;
pub mod grab;
pub mod table;

pub use error::GestureError;
pub use event::{GestureEvent, TouchId};
pub use grab::GrabOffset;
pub use table::{GestureSlot, GestureTable};
