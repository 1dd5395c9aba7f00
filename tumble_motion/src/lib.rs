// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tumble Motion: device acceleration in, shared acceleration out.
//!
//! The platform delivers acceleration-including-gravity samples at whatever
//! rate it likes. [`MotionAdapter`] writes each one, unfiltered, into a
//! [`SharedAcceleration`] that every free brick reads on its next integration
//! step. Last sample wins.
//!
//! Platforms without a motion sensor degrade to zero acceleration: bricks keep
//! their momentum and slow down under friction, and nothing errors.
//!
//! ## Minimal example
//!
//! ```
//! use tumble_model::{SharedAcceleration, Vec3};
//! use tumble_motion::{MotionAdapter, MotionCapability, MotionSample};
//!
//! let shared = SharedAcceleration::new();
//! let mut adapter = MotionAdapter::new(shared.clone());
//! adapter.attach(MotionCapability::Supported);
//!
//! adapter.on_sample(MotionSample::new(0.5, -9.8, 0.1));
//! assert_eq!(shared.get(), Vec3::new(0.5, -9.8, 0.1));
//!
//! // Axes the sensor did not report read as zero.
//! adapter.on_sample(MotionSample { x: Some(1.0), y: None, z: Some(f64::NAN) });
//! assert_eq!(shared.get(), Vec3::new(1.0, 0.0, 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use tumble_model::{SharedAcceleration, Vec3};

/// One device-motion reading, acceleration including gravity.
///
/// Platforms may leave any axis out.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MotionSample {
    /// Acceleration along the device x axis.
    pub x: Option<f64>,
    /// Acceleration along the device y axis (up is positive).
    pub y: Option<f64>,
    /// Acceleration along the device z axis.
    pub z: Option<f64>,
}

impl MotionSample {
    /// A sample with all three axes present.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// The sample as a vector; absent or non-finite axes become `0.0`.
    pub fn to_vec3(self) -> Vec3 {
        fn axis(v: Option<f64>) -> f64 {
            v.filter(|v| v.is_finite()).unwrap_or(0.0)
        }
        Vec3::new(axis(self.x), axis(self.y), axis(self.z))
    }
}

/// Whether the platform delivers motion samples at all.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MotionCapability {
    /// Samples will arrive.
    #[default]
    Supported,
    /// No sensor or no permission; no samples will arrive.
    Unsupported,
}

/// Writes motion samples into the shared acceleration.
#[derive(Clone, Debug)]
pub struct MotionAdapter {
    target: SharedAcceleration,
    capability: Option<MotionCapability>,
    samples_seen: u64,
}

impl MotionAdapter {
    /// Creates a detached adapter writing into `target`.
    pub fn new(target: SharedAcceleration) -> Self {
        Self {
            target,
            capability: None,
            samples_seen: 0,
        }
    }

    /// Subscribes to the platform's motion source.
    ///
    /// Attaching again is a no-op and returns `false`. An unsupported platform
    /// resets the shared acceleration to zero once; samples that arrive anyway
    /// are ignored.
    pub fn attach(&mut self, capability: MotionCapability) -> bool {
        if self.capability.is_some() {
            return false;
        }
        self.capability = Some(capability);
        if capability == MotionCapability::Unsupported {
            log::warn!("device motion unsupported; acceleration stays at zero");
            self.target.set(Vec3::ZERO);
        } else {
            log::debug!("device motion attached");
        }
        true
    }

    /// Returns `true` once [`attach`](Self::attach) has run.
    pub fn is_attached(&self) -> bool {
        self.capability.is_some()
    }

    /// The capability given to [`attach`](Self::attach), if any.
    pub fn capability(&self) -> Option<MotionCapability> {
        self.capability
    }

    /// Number of samples written so far.
    pub fn samples_seen(&self) -> u64 {
        self.samples_seen
    }

    /// The shared value samples are written to.
    pub fn target(&self) -> &SharedAcceleration {
        &self.target
    }

    /// Overwrites the shared acceleration with `sample`.
    ///
    /// Returns `false` if the adapter is detached or unsupported and the sample
    /// was dropped.
    pub fn on_sample(&mut self, sample: MotionSample) -> bool {
        if self.capability != Some(MotionCapability::Supported) {
            log::trace!("dropping motion sample {sample:?}");
            return false;
        }
        self.target.set(sample.to_vec3());
        self.samples_seen += 1;
        true
    }
}
