// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-rate gate.
//!
//! Hosts usually call back at the display's refresh rate, which may be faster
//! than the target step rate. [`FrameGate`] turns a stream of host timestamps
//! into step/skip decisions. Skipped callbacks do no work and accumulate no
//! debt: there is never more than one step per callback.

/// Outcome of polling the gate with a host timestamp.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FrameDecision {
    /// Less than one frame duration since the last executed step.
    Skip,
    /// Run one step.
    Step {
        /// Milliseconds since the previous executed step.
        elapsed_ms: f64,
    },
}

/// Gates host callbacks to a minimum interval between executed steps.
///
/// ```rust
/// use tumble_physics::{FrameDecision, FrameGate};
///
/// let mut gate = FrameGate::new(10.0);
/// // The first callback only primes the gate.
/// assert_eq!(gate.poll(1000.0), FrameDecision::Skip);
/// assert_eq!(gate.poll(1004.0), FrameDecision::Skip);
/// assert_eq!(gate.poll(1012.0), FrameDecision::Step { elapsed_ms: 12.0 });
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameGate {
    frame_duration_ms: f64,
    last_tick: Option<f64>,
}

impl FrameGate {
    /// Creates a gate with the given minimum interval.
    pub fn new(frame_duration_ms: f64) -> Self {
        Self {
            frame_duration_ms,
            last_tick: None,
        }
    }

    /// Minimum interval between executed steps, in milliseconds.
    pub fn frame_duration_ms(&self) -> f64 {
        self.frame_duration_ms
    }

    /// Timestamp of the last executed step (or of the priming poll).
    pub fn last_tick(&self) -> Option<f64> {
        self.last_tick
    }

    /// Decides whether a callback at `timestamp_ms` should step.
    ///
    /// The first poll after construction or [`reset`](Self::reset) records the
    /// timestamp and, unless the frame duration is zero, skips. A skip leaves
    /// the last tick unchanged, so elapsed time keeps accumulating until a step
    /// runs.
    pub fn poll(&mut self, timestamp_ms: f64) -> FrameDecision {
        let last = *self.last_tick.get_or_insert(timestamp_ms);
        let elapsed_ms = timestamp_ms - last;
        if elapsed_ms < self.frame_duration_ms {
            return FrameDecision::Skip;
        }
        self.last_tick = Some(timestamp_ms);
        FrameDecision::Step { elapsed_ms }
    }

    /// Forgets the last tick; the next poll primes again.
    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}
