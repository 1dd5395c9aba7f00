// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared acceleration value.

use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use crate::vector::Vec3;

#[derive(Default)]
struct Inner {
    value: Cell<Vec3>,
    revision: Cell<u64>,
}

/// A handle to the single acceleration value applied to every free brick.
///
/// Cloning the handle aliases the same value: a write through any clone is seen
/// by all of them. This is not per-brick state; the motion input writes it and
/// the integrator reads it, last write wins.
///
/// Everything runs on one cooperative timeline, so a `Cell` is all the
/// synchronization needed. The handle is therefore neither `Send` nor `Sync`.
///
/// ```rust
/// use tumble_model::{SharedAcceleration, Vec3};
///
/// let a = SharedAcceleration::new();
/// let b = a.clone();
/// a.set(Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(b.get(), Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(b.revision(), 1);
/// ```
#[derive(Clone, Default)]
pub struct SharedAcceleration {
    inner: Rc<Inner>,
}

impl SharedAcceleration {
    /// Creates a new value initialized to zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new value with the given initial acceleration.
    ///
    /// The revision starts at zero.
    #[must_use]
    pub fn with_value(value: Vec3) -> Self {
        let shared = Self::new();
        shared.inner.value.set(value);
        shared
    }

    /// Returns the current acceleration.
    #[inline]
    pub fn get(&self) -> Vec3 {
        self.inner.value.get()
    }

    /// Overwrites the acceleration and bumps the revision.
    #[inline]
    pub fn set(&self, value: Vec3) {
        self.inner.value.set(value);
        self.inner.revision.set(self.inner.revision.get().wrapping_add(1));
    }

    /// Number of writes seen so far.
    ///
    /// Observers can compare revisions to detect that a new sample arrived.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.inner.revision.get()
    }

    /// Returns `true` if both handles alias the same value.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SharedAcceleration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedAcceleration")
            .field("value", &self.get())
            .field("revision", &self.revision())
            .finish()
    }
}

/// Two handles are equal when they alias the same value.
impl PartialEq for SharedAcceleration {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
