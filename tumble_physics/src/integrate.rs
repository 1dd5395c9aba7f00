// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-brick integration step.

use kurbo::{Rect, Size};
use tumble_model::Kinematics;

use crate::config::PhysicsConfig;

bitflags::bitflags! {
    /// Container walls a brick hit during one step.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Contact: u8 {
        /// Left edge at or beyond the container's left bound.
        const LEFT   = 0b0000_0001;
        /// Right edge beyond the container's right bound.
        const RIGHT  = 0b0000_0010;
        /// Top edge at or beyond the container's top bound.
        const TOP    = 0b0000_0100;
        /// Bottom edge beyond the container's bottom bound.
        const BOTTOM = 0b0000_1000;
    }
}

/// Advance one brick by one step and resolve wall collisions.
///
/// The order is fixed:
///
/// 1. `velocity += acceleration * acceleration_coefficient`
/// 2. `velocity *= friction`
/// 3. `left += velocity.x`, `top -= velocity.y`
/// 4. Per axis, independently: if the near edge is at or past the near bound,
///    or the far edge is past the far bound, clamp and negate that velocity
///    component.
///
/// `velocity.z` is damped and accelerated but never moves the brick. The
/// vertical axis is inverted: device `y` points up, page `top` grows downward.
///
/// `bounds` is the container's current page-space rectangle and `size` the
/// brick's current rendered size; both are read fresh by the caller each step.
///
/// ```rust
/// use kurbo::{Point, Rect, Size};
/// use tumble_model::{Kinematics, Manipulation, Vec3};
/// use tumble_physics::{Contact, PhysicsConfig, integrate};
///
/// let mut k = Kinematics {
///     position: Point::new(0.0, 0.0),
///     velocity: Vec3::new(-2.0, 0.0, 0.0),
///     acceleration: Vec3::ZERO,
///     manipulation: Manipulation::Free,
/// };
/// let contact = integrate(
///     &mut k,
///     Size::new(10.0, 10.0),
///     Rect::new(0.0, 0.0, 100.0, 100.0),
///     &PhysicsConfig::default(),
/// );
/// assert!(contact.contains(Contact::LEFT));
/// assert_eq!(k.position.x, 0.0);
/// assert!((k.velocity.x - 1.98).abs() < 1e-12);
/// ```
pub fn integrate(k: &mut Kinematics, size: Size, bounds: Rect, config: &PhysicsConfig) -> Contact {
    k.velocity += k.acceleration * config.acceleration_coefficient;
    k.velocity *= config.friction;

    k.position.x += k.velocity.x;
    k.position.y -= k.velocity.y;

    let mut contact = Contact::empty();

    let left_hit = k.position.x <= bounds.x0;
    if left_hit || k.position.x + size.width > bounds.x1 {
        if left_hit {
            k.position.x = bounds.x0;
            contact |= Contact::LEFT;
        } else {
            k.position.x = bounds.x1 - size.width;
            contact |= Contact::RIGHT;
        }
        k.velocity.x = -k.velocity.x;
    }

    let top_hit = k.position.y <= bounds.y0;
    if top_hit || k.position.y + size.height > bounds.y1 {
        if top_hit {
            k.position.y = bounds.y0;
            contact |= Contact::TOP;
        } else {
            k.position.y = bounds.y1 - size.height;
            contact |= Contact::BOTTOM;
        }
        k.velocity.y = -k.velocity.y;
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use tumble_model::{Manipulation, Vec3};

    const EPS: f64 = 1e-9;
    const BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    const SIZE: Size = Size::new(10.0, 10.0);

    fn kin(position: Point, velocity: Vec3) -> Kinematics {
        Kinematics {
            position,
            velocity,
            acceleration: Vec3::ZERO,
            manipulation: Manipulation::Free,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn left_wall_reflects_after_friction() {
        let mut k = kin(Point::new(0.0, 50.0), Vec3::new(-2.0, 0.0, 0.0));
        let c = integrate(&mut k, SIZE, BOUNDS, &PhysicsConfig::default());
        assert_eq!(c, Contact::LEFT);
        assert_eq!(k.position.x, 0.0);
        assert!(close(k.velocity.x, 1.98));
    }

    #[test]
    fn right_wall_clamps_far_edge() {
        let mut k = kin(Point::new(85.0, 50.0), Vec3::new(10.0, 0.0, 0.0));
        let c = integrate(&mut k, SIZE, BOUNDS, &PhysicsConfig::default());
        assert_eq!(c, Contact::RIGHT);
        assert_eq!(k.position.x, 90.0);
        assert!(close(k.velocity.x, -9.9));
    }

    #[test]
    fn positive_y_velocity_moves_up_and_hits_top() {
        let mut k = kin(Point::new(50.0, 1.0), Vec3::new(0.0, 5.0, 0.0));
        let c = integrate(&mut k, SIZE, BOUNDS, &PhysicsConfig::default());
        assert_eq!(c, Contact::TOP);
        assert_eq!(k.position.y, 0.0);
        assert!(close(k.velocity.y, -4.95));
    }

    #[test]
    fn negative_y_velocity_moves_down_and_hits_bottom() {
        let mut k = kin(Point::new(50.0, 88.0), Vec3::new(0.0, -5.0, 0.0));
        let c = integrate(&mut k, SIZE, BOUNDS, &PhysicsConfig::default());
        assert_eq!(c, Contact::BOTTOM);
        assert_eq!(k.position.y, 90.0);
        assert!(close(k.velocity.y, 4.95));
    }

    #[test]
    fn corner_hit_corrects_both_axes() {
        let mut k = kin(Point::new(1.0, 1.0), Vec3::new(-3.0, 3.0, 0.0));
        let c = integrate(&mut k, SIZE, BOUNDS, &PhysicsConfig::default());
        assert_eq!(c, Contact::LEFT | Contact::TOP);
        assert_eq!(k.position, Point::new(0.0, 0.0));
        assert!(close(k.velocity.x, 2.97));
        assert!(close(k.velocity.y, -2.97));
    }

    #[test]
    fn acceleration_applies_before_friction() {
        let mut k = kin(Point::new(50.0, 50.0), Vec3::ZERO);
        k.acceleration = Vec3::new(2.0, -4.0, 10.0);
        let c = integrate(&mut k, SIZE, BOUNDS, &PhysicsConfig::default());
        assert!(c.is_empty());
        // (0 + a * 0.05) * 0.99
        assert!(close(k.velocity.x, 0.099));
        assert!(close(k.velocity.y, -0.198));
        assert!(close(k.velocity.z, 0.495));
        assert!(close(k.position.x, 50.099));
        assert!(close(k.position.y, 50.198));
    }

    #[test]
    fn z_never_moves_the_brick() {
        let mut k = kin(Point::new(50.0, 50.0), Vec3::new(0.0, 0.0, 40.0));
        integrate(&mut k, SIZE, BOUNDS, &PhysicsConfig::default());
        assert_eq!(k.position, Point::new(50.0, 50.0));
        assert!(close(k.velocity.z, 39.6));
    }

    #[test]
    fn friction_decays_geometrically() {
        let config = PhysicsConfig::default();
        let big = Rect::new(-1e9, -1e9, 1e9, 1e9);
        let mut k = kin(Point::ZERO, Vec3::new(3.0, -4.0, 0.0));
        let mut factor = 1.0;
        for _ in 0..50 {
            assert!(integrate(&mut k, SIZE, big, &config).is_empty());
            factor *= config.friction;
        }
        assert!(close(k.velocity.x, 3.0 * factor));
        assert!(close(k.velocity.y, -4.0 * factor));
    }

    #[test]
    fn resting_on_the_near_wall_still_counts_as_contact() {
        // The near-wall test is inclusive, so a brick at rest against it keeps
        // reporting contact and flipping a zero velocity.
        let mut k = kin(Point::new(0.0, 0.0), Vec3::ZERO);
        let c = integrate(&mut k, SIZE, BOUNDS, &PhysicsConfig::default());
        assert_eq!(c, Contact::LEFT | Contact::TOP);
        assert_eq!(k.position, Point::ZERO);
    }

    #[test]
    fn far_edge_exactly_on_bound_is_not_a_hit() {
        let mut k = kin(Point::new(90.0, 90.0), Vec3::ZERO);
        let c = integrate(&mut k, SIZE, BOUNDS, &PhysicsConfig::default());
        assert!(c.is_empty());
    }

    #[test]
    fn bounds_need_not_start_at_origin() {
        let bounds = Rect::new(200.0, 300.0, 260.0, 400.0);
        let mut k = kin(Point::new(201.0, 350.0), Vec3::new(-5.0, 0.0, 0.0));
        integrate(&mut k, SIZE, bounds, &PhysicsConfig::default());
        assert_eq!(k.position.x, 200.0);
        assert!(close(k.velocity.x, 4.95));
    }
}
