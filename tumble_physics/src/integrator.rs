// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-frame integration over a set of bricks.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Rect, Size};
use tumble_model::{ModelError, ModelTable};

use crate::config::{FaultPolicy, PhysicsConfig};
use crate::integrate::{Contact, integrate};

/// Live geometry the integrator reads from the view every step.
///
/// Neither value is cached between steps: a container that is resized or
/// scrolled takes effect on the very next step.
pub trait Geometry<K> {
    /// The brick's current rendered size.
    fn size_of(&self, brick: &K) -> Option<Size>;

    /// The page-space rectangle of the brick's immediate container.
    fn container_bounds(&self, brick: &K) -> Option<Rect>;
}

/// Summary of one integration step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepReport<K> {
    /// Bricks that were advanced.
    pub integrated: usize,
    /// Bricks skipped because a finger owns them.
    pub manipulated: usize,
    /// Bricks skipped because their model or geometry was missing.
    pub faulted: usize,
    /// Union of every wall contact in this step.
    pub contacts: Contact,
    /// New top-left corner of every advanced brick, for the view update.
    pub moved: Vec<(K, Point)>,
}

impl<K> Default for StepReport<K> {
    fn default() -> Self {
        Self {
            integrated: 0,
            manipulated: 0,
            faulted: 0,
            contacts: Contact::empty(),
            moved: Vec::new(),
        }
    }
}

/// Advances every free brick by one step.
///
/// ```rust
/// use kurbo::{Point, Rect, Size};
/// use tumble_model::{ModelTable, SharedAcceleration, Vec3, VELOCITY};
/// use tumble_physics::{Geometry, Integrator, PhysicsConfig};
///
/// struct Fixed;
/// impl Geometry<u32> for Fixed {
///     fn size_of(&self, _: &u32) -> Option<Size> { Some(Size::new(10.0, 10.0)) }
///     fn container_bounds(&self, _: &u32) -> Option<Rect> { Some(Rect::new(0.0, 0.0, 100.0, 100.0)) }
/// }
///
/// let accel = SharedAcceleration::new();
/// let mut models = ModelTable::new();
/// models.init_free_brick(1, Point::new(50.0, 50.0), &accel);
/// models.entry(1).set(VELOCITY, Vec3::new(1.0, 0.0, 0.0));
///
/// let report = Integrator::new(PhysicsConfig::default()).step(&mut models, &Fixed, [1]);
/// assert_eq!(report.integrated, 1);
/// let (brick, origin) = report.moved[0];
/// assert_eq!(brick, 1);
/// assert!((origin.x - 50.99).abs() < 1e-12);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Integrator {
    config: PhysicsConfig,
    fault_policy: FaultPolicy,
}

impl Integrator {
    /// Creates an integrator with the default fault policy.
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            fault_policy: FaultPolicy::default(),
        }
    }

    /// Sets the fault policy.
    #[must_use]
    pub fn with_fault_policy(mut self, fault_policy: FaultPolicy) -> Self {
        self.fault_policy = fault_policy;
        self
    }

    /// The physics configuration.
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// The fault policy.
    pub fn fault_policy(&self) -> FaultPolicy {
        self.fault_policy
    }

    /// Runs one step over `bricks`.
    ///
    /// Bricks whose manipulation state is not free are left untouched. A brick
    /// with missing model data or geometry is skipped according to the
    /// [`FaultPolicy`]; the remaining bricks still advance.
    pub fn step<K, G>(
        &self,
        models: &mut ModelTable<K>,
        geometry: &G,
        bricks: impl IntoIterator<Item = K>,
    ) -> StepReport<K>
    where
        K: Copy + Eq + Hash + Debug,
        G: Geometry<K> + ?Sized,
    {
        let mut report = StepReport::default();
        for brick in bricks {
            let mut k = match models.kinematics(&brick) {
                Ok(k) => k,
                Err(err) => {
                    self.fault(&brick, FaultReason::Model(err));
                    report.faulted += 1;
                    continue;
                }
            };
            if !k.manipulation.is_free() {
                report.manipulated += 1;
                continue;
            }
            let (Some(size), Some(bounds)) =
                (geometry.size_of(&brick), geometry.container_bounds(&brick))
            else {
                self.fault(&brick, FaultReason::Geometry);
                report.faulted += 1;
                continue;
            };

            report.contacts |= integrate(&mut k, size, bounds, &self.config);
            if let Some(store) = models.get_mut(&brick) {
                store.store_motion(k.position, k.velocity);
            }
            report.moved.push((brick, k.position));
            report.integrated += 1;
        }
        report
    }

    fn fault<K: Debug>(&self, brick: &K, reason: FaultReason) {
        if self.fault_policy == FaultPolicy::DebugAssert {
            debug_assert!(false, "cannot integrate {brick:?}: {reason}");
        }
        log::warn!("skipping {brick:?} this frame: {reason}");
    }
}

/// Why a brick could not be integrated.
#[derive(Copy, Clone, Debug)]
enum FaultReason {
    Model(ModelError),
    Geometry,
}

impl core::fmt::Display for FaultReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Model(err) => write!(f, "{err}"),
            Self::Geometry => f.write_str("view reports no size or container bounds"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::vec;
    use tumble_model::{Manipulation, POSITION, SharedAcceleration, VELOCITY, Vec3};

    #[derive(Default)]
    struct Scene {
        sizes: BTreeMap<u32, Size>,
        bounds: Rect,
    }

    impl Geometry<u32> for Scene {
        fn size_of(&self, brick: &u32) -> Option<Size> {
            self.sizes.get(brick).copied()
        }

        fn container_bounds(&self, _: &u32) -> Option<Rect> {
            Some(self.bounds)
        }
    }

    fn scene(bricks: &[u32]) -> Scene {
        Scene {
            sizes: bricks.iter().map(|b| (*b, Size::new(10.0, 10.0))).collect(),
            bounds: Rect::new(0.0, 0.0, 100.0, 100.0),
        }
    }

    fn skip_faults() -> Integrator {
        Integrator::new(PhysicsConfig::default()).with_fault_policy(FaultPolicy::Skip)
    }

    #[test]
    fn scenario_left_wall_bounce() {
        let accel = SharedAcceleration::new();
        let mut models = ModelTable::new();
        models.init_free_brick(1, Point::new(0.0, 0.0), &accel);
        models.entry(1).set(VELOCITY, Vec3::new(-2.0, 0.0, 0.0));

        let report = skip_faults().step(&mut models, &scene(&[1]), [1]);
        let k = models.kinematics(&1).unwrap();
        assert_eq!(k.position.x, 0.0);
        assert!((k.velocity.x - 1.98).abs() < 1e-12);
        assert!(report.contacts.contains(Contact::LEFT));
    }

    #[test]
    fn manipulated_bricks_are_untouched() {
        let accel = SharedAcceleration::with_value(Vec3::new(5.0, 5.0, 5.0));
        let mut models = ModelTable::new();
        for (brick, state) in [(1, Manipulation::Moving), (2, Manipulation::Drawing)] {
            models.init_free_brick(brick, Point::new(40.0, 40.0), &accel);
            models.entry(brick).set(VELOCITY, Vec3::new(3.0, 3.0, 3.0));
            models.set_manipulation(brick, state);
        }
        let before: Vec<_> = [1, 2].iter().map(|b| models.kinematics(b).unwrap()).collect();

        let report = skip_faults().step(&mut models, &scene(&[1, 2]), [1, 2]);
        assert_eq!(report.manipulated, 2);
        assert_eq!(report.integrated, 0);
        assert!(report.moved.is_empty());
        let after: Vec<_> = [1, 2].iter().map(|b| models.kinematics(b).unwrap()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn missing_model_data_skips_only_that_brick() {
        let accel = SharedAcceleration::new();
        let mut models = ModelTable::new();
        models.init_free_brick(1, Point::new(50.0, 50.0), &accel);
        // Brick 2 has a position but was never given velocity/acceleration.
        models.entry(2).set(POSITION, Point::new(20.0, 20.0));

        let report = skip_faults().step(&mut models, &scene(&[1, 2, 3]), [2, 3, 1]);
        assert_eq!(report.faulted, 2);
        assert_eq!(report.integrated, 1);
        assert_eq!(report.moved, vec![(1, Point::new(50.0, 50.0))]);
        assert_eq!(
            models.get(&2).and_then(|s| s.get(POSITION)),
            Some(&Point::new(20.0, 20.0))
        );
    }

    #[test]
    fn missing_geometry_skips_the_brick() {
        let accel = SharedAcceleration::new();
        let mut models = ModelTable::new();
        models.init_free_brick(1, Point::new(50.0, 50.0), &accel);
        let report = skip_faults().step(&mut models, &scene(&[]), [1]);
        assert_eq!(report.faulted, 1);
        assert_eq!(report.integrated, 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot integrate")]
    fn debug_assert_policy_fails_fast_in_debug_builds() {
        let mut models = ModelTable::<u32>::new();
        Integrator::new(PhysicsConfig::default()).step(&mut models, &scene(&[1]), [1]);
    }

    #[test]
    fn shared_acceleration_reaches_every_free_brick() {
        let accel = SharedAcceleration::new();
        let mut models = ModelTable::new();
        models.init_free_brick(1, Point::new(30.0, 30.0), &accel);
        models.init_free_brick(2, Point::new(60.0, 60.0), &accel);
        accel.set(Vec3::new(1.0, 0.0, 0.0));

        skip_faults().step(&mut models, &scene(&[1, 2]), [1, 2]);
        for brick in [1, 2] {
            let v = models.kinematics(&brick).unwrap().velocity;
            assert!((v.x - 0.0495).abs() < 1e-12);
        }
    }
}
