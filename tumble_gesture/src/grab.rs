// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grab offset helper: keep the grabbed point of a brick fixed under the finger.
//!
//! ## Usage
//!
//! 1) When a move gesture starts, call [`GrabOffset::capture`] with the finger
//!    position and the brick's current top-left corner.
//! 2) On each move event, call [`GrabOffset::origin_for`] with the new finger
//!    position to get the brick's new top-left corner.
//!
//! The delta is fixed for the gesture's lifetime; it is never re-derived from
//! later finger positions.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tumble_gesture::GrabOffset;
//!
//! // Finger lands 5px right and 3px below the brick's corner.
//! let grab = GrabOffset::capture(Point::new(15.0, 23.0), Point::new(10.0, 20.0));
//!
//! // Finger moves; the corner follows at the same offset.
//! assert_eq!(grab.origin_for(Point::new(50.0, 50.0)), Point::new(45.0, 47.0));
//! ```

use kurbo::{Point, Vec2};

/// Finger-minus-origin offset captured at the start of a move gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GrabOffset {
    delta: Vec2,
}

impl GrabOffset {
    /// Capture the offset between the finger and the brick's top-left corner.
    pub fn capture(finger: Point, origin: Point) -> Self {
        Self {
            delta: finger - origin,
        }
    }

    /// The captured finger-minus-origin offset.
    pub fn delta(self) -> Vec2 {
        self.delta
    }

    /// The brick's top-left corner for a given finger position.
    pub fn origin_for(self, finger: Point) -> Point {
        finger - self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_records_finger_minus_origin() {
        let grab = GrabOffset::capture(Point::new(15.0, 25.0), Point::new(10.0, 20.0));
        assert_eq!(grab.delta(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn first_finger_position_maps_back_to_the_origin() {
        let origin = Point::new(40.0, 70.0);
        let finger = Point::new(52.5, 71.0);
        let grab = GrabOffset::capture(finger, origin);
        assert_eq!(grab.origin_for(finger), origin);
    }

    #[test]
    fn point_under_finger_is_invariant_across_moves() {
        let grab = GrabOffset::capture(Point::new(10.0, 10.0), Point::new(0.0, 0.0));
        for finger in [
            Point::new(20.0, 30.0),
            Point::new(-5.0, 100.0),
            Point::new(10.0, 10.0),
        ] {
            let origin = grab.origin_for(finger);
            assert_eq!(finger - origin, grab.delta());
        }
    }

    #[test]
    fn finger_left_of_and_above_origin_gives_negative_delta() {
        // Touch events can land just outside a brick's rendered edge.
        let grab = GrabOffset::capture(Point::new(90.0, 85.0), Point::new(100.0, 100.0));
        assert_eq!(grab.delta(), Vec2::new(-10.0, -15.0));
        assert_eq!(grab.origin_for(Point::new(0.0, 0.0)), Point::new(10.0, 15.0));
    }

    #[test]
    fn fractional_coordinates() {
        let grab = GrabOffset::capture(Point::new(3.2, 4.1), Point::new(1.5, 2.7));
        let expected = Vec2::new(1.7, 1.4);
        assert!((grab.delta().x - expected.x).abs() < f64::EPSILON * 10.0);
        assert!((grab.delta().y - expected.y).abs() < f64::EPSILON * 10.0);
    }

    #[test]
    fn large_coordinate_values() {
        let grab = GrabOffset::capture(
            Point::new(1000001.0, 2000002.0),
            Point::new(1000000.0, 2000000.0),
        );
        assert_eq!(grab.delta(), Vec2::new(1.0, 2.0));
    }
}
