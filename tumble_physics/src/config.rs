// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physics configuration.

/// Velocity multiplier applied on every executed step.
pub const FRICTION_FACTOR: f64 = 0.99;
/// Scale from raw device acceleration to per-step velocity change.
pub const ACCELERATION_COEFFICIENT: f64 = 0.05;
/// Target integration rate, in steps per second.
pub const FRAME_RATE: f64 = 120.0;

/// Tunables for the integrator and its frame gate.
///
/// ```rust
/// use tumble_physics::PhysicsConfig;
///
/// let config = PhysicsConfig::default().with_frame_rate(60.0);
/// assert!((config.frame_duration_ms() - 1000.0 / 60.0).abs() < 1e-12);
/// assert!(config.validate().is_ok());
/// assert!(config.with_friction(1.5).validate().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Velocity multiplier per step, in `[0, 1]`.
    pub friction: f64,
    /// Acceleration-to-velocity scale per step.
    pub acceleration_coefficient: f64,
    /// Target steps per second; the gate skips callbacks that come sooner.
    pub frame_rate: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            friction: FRICTION_FACTOR,
            acceleration_coefficient: ACCELERATION_COEFFICIENT,
            frame_rate: FRAME_RATE,
        }
    }
}

impl PhysicsConfig {
    /// Sets the friction factor.
    #[must_use]
    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    /// Sets the acceleration coefficient.
    #[must_use]
    pub fn with_acceleration_coefficient(mut self, coefficient: f64) -> Self {
        self.acceleration_coefficient = coefficient;
        self
    }

    /// Sets the target frame rate.
    #[must_use]
    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Minimum interval between executed steps, in milliseconds.
    pub fn frame_duration_ms(&self) -> f64 {
        1000.0 / self.frame_rate
    }

    /// Checks that every tunable is usable.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.friction.is_finite() && (0.0..=1.0).contains(&self.friction)) {
            return Err(ConfigError::Friction(self.friction));
        }
        if !self.acceleration_coefficient.is_finite() {
            return Err(ConfigError::AccelerationCoefficient(
                self.acceleration_coefficient,
            ));
        }
        if self.frame_rate.is_nan() || self.frame_rate <= 0.0 {
            return Err(ConfigError::FrameRate(self.frame_rate));
        }
        Ok(())
    }
}

/// An unusable [`PhysicsConfig`] value.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Friction must be a finite value in `[0, 1]`.
    #[error("friction {0} is outside [0, 1]")]
    Friction(f64),
    /// The acceleration coefficient must be finite.
    #[error("acceleration coefficient {0} is not finite")]
    AccelerationCoefficient(f64),
    /// The frame rate must be positive.
    #[error("frame rate {0} is not positive")]
    FrameRate(f64),
}

/// What to do when a brick's model or geometry is missing during a step.
///
/// Either way the brick is skipped and the step carries on; one broken brick
/// never stalls the loop for the others.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum FaultPolicy {
    /// Panic in debug builds, skip with a warning in release builds.
    #[default]
    DebugAssert,
    /// Always skip with a warning.
    Skip,
}
