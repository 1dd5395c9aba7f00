// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model field identification.
//!
//! [`FieldId`] names a slot at runtime; [`Field<T>`] adds the value type so that
//! reads and writes are checked at compile time.

use core::fmt;
use core::marker::PhantomData;

use kurbo::Point;

use crate::manipulation::Manipulation;
use crate::shared::SharedAcceleration;
use crate::vector::Vec3;

/// A runtime model field identifier.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(u8);

impl FieldId {
    /// Creates a field ID from its index.
    #[must_use]
    #[inline]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Returns the underlying index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Human-readable key name, for logs and errors.
    pub const fn name(self) -> &'static str {
        match self.0 {
            0 => "position",
            1 => "velocity",
            2 => "acceleration",
            3 => "manipulation",
            _ => "custom",
        }
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldId").field(&self.0).finish()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type-safe field key.
///
/// `Field<T>` is the same size as [`FieldId`]; the phantom type only restricts
/// what can be stored under it.
pub struct Field<T> {
    id: FieldId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Field<T> {
    /// Creates a typed field from an ID.
    #[must_use]
    #[inline]
    pub const fn from_id(id: FieldId) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    /// Returns the underlying field ID.
    #[must_use]
    #[inline]
    pub const fn id(self) -> FieldId {
        self.id
    }
}

// Manual impls: `T` need not be `Copy`/`Debug` for the key to be.
impl<T> Copy for Field<T> {}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for Field<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.id.name()).finish()
    }
}

/// Top-left corner of a brick in model space.
pub const POSITION: Field<Point> = Field::from_id(FieldId::new(0));
/// Per-axis velocity of a brick.
pub const VELOCITY: Field<Vec3> = Field::from_id(FieldId::new(1));
/// Handle to the shared acceleration value.
pub const ACCELERATION: Field<SharedAcceleration> = Field::from_id(FieldId::new(2));
/// Who currently controls a brick.
pub const MANIPULATION: Field<Manipulation> = Field::from_id(FieldId::new(3));

/// A stored model value.
#[derive(Clone, Debug, PartialEq)]
pub enum ModelValue {
    /// A point, such as a position.
    Point(Point),
    /// A three-axis vector, such as a velocity.
    Vector(Vec3),
    /// A handle to the shared acceleration value.
    Shared(SharedAcceleration),
    /// A manipulation state.
    Manipulation(Manipulation),
}

/// Types that can be stored in a [`ModelStore`](crate::ModelStore).
pub trait FieldValue: Clone {
    /// Wraps the value for storage.
    fn into_value(self) -> ModelValue;

    /// Borrows the value back out, if the stored variant matches.
    fn from_value(value: &ModelValue) -> Option<&Self>;
}

impl FieldValue for Point {
    fn into_value(self) -> ModelValue {
        ModelValue::Point(self)
    }

    fn from_value(value: &ModelValue) -> Option<&Self> {
        match value {
            ModelValue::Point(p) => Some(p),
            _ => None,
        }
    }
}

impl FieldValue for Vec3 {
    fn into_value(self) -> ModelValue {
        ModelValue::Vector(self)
    }

    fn from_value(value: &ModelValue) -> Option<&Self> {
        match value {
            ModelValue::Vector(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldValue for SharedAcceleration {
    fn into_value(self) -> ModelValue {
        ModelValue::Shared(self)
    }

    fn from_value(value: &ModelValue) -> Option<&Self> {
        match value {
            ModelValue::Shared(a) => Some(a),
            _ => None,
        }
    }
}

impl FieldValue for Manipulation {
    fn into_value(self) -> ModelValue {
        ModelValue::Manipulation(self)
    }

    fn from_value(value: &ModelValue) -> Option<&Self> {
        match value {
            ModelValue::Manipulation(m) => Some(m),
            _ => None,
        }
    }
}
