// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tumble_motion::MotionCapability;
use tumble_physics::{ConfigError, FaultPolicy, PhysicsConfig};

/// Everything a [`Surface`](crate::Surface) needs to know up front.
///
/// ```
/// use tumble_motion::MotionCapability;
/// use tumble_physics::{FaultPolicy, PhysicsConfig};
/// use tumble_surface::SurfaceConfig;
///
/// let config = SurfaceConfig::default()
///     .with_physics(PhysicsConfig::default().with_frame_rate(60.0))
///     .with_fault_policy(FaultPolicy::Skip)
///     .with_motion(MotionCapability::Unsupported);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SurfaceConfig {
    /// Integrator tunables.
    pub physics: PhysicsConfig,
    /// How the integrator treats bricks with missing data.
    pub fault_policy: FaultPolicy,
    /// Whether the platform delivers device-motion samples.
    pub motion: MotionCapability,
}

impl SurfaceConfig {
    /// Sets the physics configuration.
    #[must_use]
    pub fn with_physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = physics;
        self
    }

    /// Sets the fault policy.
    #[must_use]
    pub fn with_fault_policy(mut self, fault_policy: FaultPolicy) -> Self {
        self.fault_policy = fault_policy;
        self
    }

    /// Sets the motion capability.
    #[must_use]
    pub fn with_motion(mut self, motion: MotionCapability) -> Self {
        self.motion = motion;
        self
    }

    /// Checks the physics configuration.
    ///
    /// # Errors
    ///
    /// See [`PhysicsConfig::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()
    }
}
