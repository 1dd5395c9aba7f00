// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation loop state.
//!
//! The host owns the actual frame callback (for example `requestAnimationFrame`
//! or a compositor vsync). [`FrameScheduler`] owns the decisions around it:
//! whether the loop is running, whether this callback steps, and whether the
//! host should ask for another callback.

use crate::gate::{FrameDecision, FrameGate};

/// Result of one host frame callback.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Tick {
    /// The loop is stopped; do not request another frame.
    Stopped,
    /// Too soon since the last step; request another frame and do nothing.
    Skipped,
    /// Run one integration step, then request another frame.
    Step {
        /// Milliseconds since the previous executed step.
        elapsed_ms: f64,
    },
}

impl Tick {
    /// Whether the host should request another frame callback.
    pub fn rearm(self) -> bool {
        !matches!(self, Self::Stopped)
    }

    /// Whether this callback runs an integration step.
    pub fn is_step(self) -> bool {
        matches!(self, Self::Step { .. })
    }
}

/// A cancellable, frame-gated animation loop.
///
/// ```rust
/// use tumble_physics::{FrameScheduler, Tick};
///
/// let mut loop_ = FrameScheduler::new(10.0);
/// assert_eq!(loop_.tick(0.0), Tick::Stopped);
///
/// assert!(loop_.start());
/// assert!(!loop_.start()); // already running
/// assert_eq!(loop_.tick(0.0), Tick::Skipped);
/// assert_eq!(loop_.tick(10.0), Tick::Step { elapsed_ms: 10.0 });
///
/// loop_.stop();
/// assert!(!loop_.tick(20.0).rearm());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameScheduler {
    running: bool,
    gate: FrameGate,
}

impl FrameScheduler {
    /// Creates a stopped scheduler with the given minimum step interval.
    pub fn new(frame_duration_ms: f64) -> Self {
        Self {
            running: false,
            gate: FrameGate::new(frame_duration_ms),
        }
    }

    /// Starts the loop.
    ///
    /// Returns `false` if it was already running; a running loop is never
    /// scheduled twice. A fresh start primes the gate again, so time spent
    /// stopped is not counted as elapsed.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.gate.reset();
        log::debug!("animation loop started");
        true
    }

    /// Stops the loop; the next callback reports [`Tick::Stopped`].
    ///
    /// Returns `false` if it was already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        log::debug!("animation loop stopped");
        true
    }

    /// Returns `true` while the loop is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The underlying gate.
    pub fn gate(&self) -> &FrameGate {
        &self.gate
    }

    /// Handles one host frame callback at `timestamp_ms`.
    pub fn tick(&mut self, timestamp_ms: f64) -> Tick {
        if !self.running {
            return Tick::Stopped;
        }
        match self.gate.poll(timestamp_ms) {
            FrameDecision::Skip => {
                log::trace!("frame at {timestamp_ms}ms skipped");
                Tick::Skipped
            }
            FrameDecision::Step { elapsed_ms } => Tick::Step { elapsed_ms },
        }
    }
}
