// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Rect};

/// Identifier of one finger, as reported by the platform.
///
/// Stable from touch-start to touch-end of that finger.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TouchId(pub u64);

impl fmt::Debug for TouchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TouchId({})", self.0)
    }
}

/// A transition produced by the gesture table.
///
/// Callers apply these to their model and view; the table itself owns neither.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent<E> {
    /// A draw started; `rect` is the zero-size rectangle at the anchor.
    DrawStarted {
        /// The brick being drawn.
        brick: E,
        /// Current extent.
        rect: Rect,
    },
    /// The drawing finger moved.
    DrawResized {
        /// The brick being drawn.
        brick: E,
        /// Spans the anchor and the finger.
        rect: Rect,
    },
    /// The drawing finger lifted; the brick is final.
    DrawFinished {
        /// The finalized brick.
        brick: E,
        /// Its last extent.
        rect: Rect,
    },
    /// A move started on an existing brick.
    MoveStarted {
        /// The grabbed brick.
        brick: E,
        /// Its top-left corner when grabbed.
        origin: Point,
    },
    /// The moving finger moved.
    Moved {
        /// The grabbed brick.
        brick: E,
        /// New top-left corner.
        origin: Point,
    },
    /// The moving finger lifted.
    MoveFinished {
        /// The released brick.
        brick: E,
    },
}

impl<E: Copy> GestureEvent<E> {
    /// The brick this event concerns.
    pub fn brick(&self) -> E {
        match *self {
            Self::DrawStarted { brick, .. }
            | Self::DrawResized { brick, .. }
            | Self::DrawFinished { brick, .. }
            | Self::MoveStarted { brick, .. }
            | Self::Moved { brick, .. }
            | Self::MoveFinished { brick } => brick,
        }
    }
}
