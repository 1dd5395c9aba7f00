// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch input as the platform delivers it.

use kurbo::Point;
use smallvec::SmallVec;
use tumble_gesture::TouchId;

/// Which touch callback a batch came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Fingers landed.
    Start,
    /// Fingers moved.
    Move,
    /// Fingers lifted.
    End,
    /// The platform aborted the touches; handled like [`TouchPhase::End`].
    Cancel,
}

/// One changed touch in a batch.
///
/// `target` is the element the finger first landed on; it does not change as
/// the finger moves. Platforms occasionally deliver touches without a target or
/// coordinates; those are skipped individually.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchPoint<E> {
    /// Finger identity.
    pub touch: TouchId,
    /// Element the touch started on.
    pub target: Option<E>,
    /// Page coordinates.
    pub page: Option<Point>,
}

impl<E: Copy> TouchPoint<E> {
    /// A well-formed touch.
    pub fn new(touch: TouchId, target: E, page: Point) -> Self {
        Self {
            touch,
            target: Some(target),
            page: Some(page),
        }
    }

    /// Target and finite page position, or `None` if the touch is malformed.
    pub fn resolved(&self) -> Option<(E, Point)> {
        let page = self.page.filter(|p| p.is_finite())?;
        Some((self.target?, page))
    }
}

/// The changed touches of one platform touch event.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchBatch<E> {
    /// Callback kind.
    pub phase: TouchPhase,
    /// Changed touches, in platform order.
    pub touches: SmallVec<[TouchPoint<E>; 4]>,
}

impl<E: Copy> TouchBatch<E> {
    /// An empty batch.
    pub fn new(phase: TouchPhase) -> Self {
        Self {
            phase,
            touches: SmallVec::new(),
        }
    }

    /// A batch holding a single well-formed touch.
    pub fn single(phase: TouchPhase, touch: TouchId, target: E, page: Point) -> Self {
        Self::new(phase).with(TouchPoint::new(touch, target, page))
    }

    /// Appends a touch.
    #[must_use]
    pub fn with(mut self, point: TouchPoint<E>) -> Self {
        self.touches.push(point);
        self
    }

    /// Appends a touch.
    pub fn push(&mut self, point: TouchPoint<E>) {
        self.touches.push(point);
    }
}

bitflags::bitflags! {
    /// Event-level controls the host should apply after dispatch.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventControl: u8 {
        /// Suppress the platform default (scrolling).
        const PREVENT_DEFAULT  = 0b0000_0001;
        /// Do not deliver this event to ancestor handlers.
        const STOP_PROPAGATION = 0b0000_0010;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_touches_do_not_resolve() {
        let ok = TouchPoint::new(TouchId(1), 7_u32, Point::new(1.0, 2.0));
        assert_eq!(ok.resolved(), Some((7, Point::new(1.0, 2.0))));

        let no_target = TouchPoint::<u32> {
            target: None,
            ..ok
        };
        let no_page = TouchPoint { page: None, ..ok };
        let nan = TouchPoint {
            page: Some(Point::new(f64::NAN, 0.0)),
            ..ok
        };
        assert_eq!(no_target.resolved(), None);
        assert_eq!(no_page.resolved(), None);
        assert_eq!(nan.resolved(), None);
    }

    #[test]
    fn batches_keep_platform_order() {
        let batch = TouchBatch::new(TouchPhase::Move)
            .with(TouchPoint::new(TouchId(2), 1_u32, Point::ZERO))
            .with(TouchPoint::new(TouchId(1), 1_u32, Point::ZERO));
        let ids: SmallVec<[u64; 2]> = batch.touches.iter().map(|t| t.touch.0).collect();
        assert_eq!(ids.as_slice(), &[2, 1]);
    }
}
