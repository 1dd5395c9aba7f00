// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element sparse model storage.
//!
//! [`ModelStore`] is a sorted-vector map: entries are kept sorted by
//! [`FieldId`] in an inline `SmallVec` and found by binary search.

use kurbo::Point;
use smallvec::SmallVec;

use crate::error::ModelError;
use crate::field::{
    ACCELERATION, Field, FieldId, FieldValue, MANIPULATION, ModelValue, POSITION, VELOCITY,
};
use crate::manipulation::Manipulation;
use crate::vector::Vec3;

/// Inline capacity: the four built-in fields.
const INLINE_CAPACITY: usize = 4;

/// Per-element key→value storage.
///
/// # Example
///
/// ```rust
/// use kurbo::Point;
/// use tumble_model::{ModelStore, POSITION};
///
/// let mut store = ModelStore::new("brick-1");
/// assert!(store.get(POSITION).is_none());
///
/// store.set(POSITION, Point::new(4.0, 2.0));
/// assert_eq!(store.get(POSITION), Some(&Point::new(4.0, 2.0)));
/// assert!(store.kinematics().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ModelStore<K> {
    entries: SmallVec<[(FieldId, ModelValue); INLINE_CAPACITY]>,
    owner: K,
}

/// A by-value snapshot of everything the integrator needs from one brick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Kinematics {
    /// Top-left corner.
    pub position: Point,
    /// Current velocity.
    pub velocity: Vec3,
    /// Acceleration read through the shared handle at snapshot time.
    pub acceleration: Vec3,
    /// Current manipulation state.
    pub manipulation: Manipulation,
}

impl<K: Copy + Eq> ModelStore<K> {
    /// Creates an empty store for the given owner.
    #[must_use]
    pub fn new(owner: K) -> Self {
        Self {
            entries: SmallVec::new(),
            owner,
        }
    }

    /// Returns the owner key of this store.
    #[must_use]
    #[inline]
    pub fn owner(&self) -> K {
        self.owner
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of fields set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the set field IDs in ascending order.
    pub fn field_ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    #[inline]
    fn find(&self, id: FieldId) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&id, |(fid, _)| *fid)
    }

    /// Gets a field value, if set.
    #[must_use]
    #[inline]
    pub fn get<T: FieldValue>(&self, field: Field<T>) -> Option<&T> {
        self.find(field.id())
            .ok()
            .and_then(|idx| T::from_value(&self.entries[idx].1))
    }

    /// Sets a field value, replacing any previous one.
    pub fn set<T: FieldValue>(&mut self, field: Field<T>, value: T) {
        let value = value.into_value();
        match self.find(field.id()) {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (field.id(), value)),
        }
    }

    /// Clears a field.
    ///
    /// Returns `true` if a value was removed.
    pub fn clear<T: FieldValue>(&mut self, field: Field<T>) -> bool {
        if let Ok(idx) = self.find(field.id()) {
            self.entries.remove(idx);
            true
        } else {
            false
        }
    }

    /// Returns `true` if the field is set.
    #[must_use]
    #[inline]
    pub fn has<T: FieldValue>(&self, field: Field<T>) -> bool {
        self.find(field.id()).is_ok()
    }

    /// Reads the brick's manipulation state, treating an unset state as free.
    #[must_use]
    pub fn manipulation(&self) -> Manipulation {
        self.get(MANIPULATION).copied().unwrap_or_default()
    }

    /// Takes a snapshot of position, velocity and acceleration.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingField`] naming the first missing field.
    pub fn kinematics(&self) -> Result<Kinematics, ModelError> {
        let position = *self.require(POSITION)?;
        let velocity = *self.require(VELOCITY)?;
        let acceleration = self.require(ACCELERATION)?.get();
        Ok(Kinematics {
            position,
            velocity,
            acceleration,
            manipulation: self.manipulation(),
        })
    }

    /// Writes back the parts of a snapshot the integrator changes.
    pub fn store_motion(&mut self, position: Point, velocity: Vec3) {
        self.set(POSITION, position);
        self.set(VELOCITY, velocity);
    }

    fn require<T: FieldValue>(&self, field: Field<T>) -> Result<&T, ModelError> {
        self.get(field)
            .ok_or(ModelError::MissingField { field: field.id() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::SharedAcceleration;
    use alloc::vec::Vec;

    #[test]
    fn entries_stay_sorted_regardless_of_insert_order() {
        let mut store = ModelStore::new(1_u32);
        store.set(MANIPULATION, Manipulation::Moving);
        store.set(POSITION, Point::ZERO);
        store.set(VELOCITY, Vec3::ZERO);
        let ids: Vec<u8> = store.field_ids().map(FieldId::index).collect();
        assert_eq!(ids, [0, 1, 3]);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut store = ModelStore::new(1_u32);
        store.set(POSITION, Point::new(1.0, 1.0));
        store.set(POSITION, Point::new(2.0, 3.0));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(POSITION), Some(&Point::new(2.0, 3.0)));
    }

    #[test]
    fn clear_reports_removal() {
        let mut store = ModelStore::new(1_u32);
        assert!(!store.clear(VELOCITY));
        store.set(VELOCITY, Vec3::new(1.0, 0.0, 0.0));
        assert!(store.clear(VELOCITY));
        assert!(store.is_empty());
    }

    #[test]
    fn kinematics_names_the_first_missing_field() {
        let mut store = ModelStore::new(1_u32);
        store.set(POSITION, Point::ZERO);
        assert_eq!(
            store.kinematics(),
            Err(ModelError::MissingField {
                field: VELOCITY.id()
            })
        );
        store.set(VELOCITY, Vec3::ZERO);
        assert_eq!(
            store.kinematics(),
            Err(ModelError::MissingField {
                field: ACCELERATION.id()
            })
        );
    }

    #[test]
    fn kinematics_reads_acceleration_through_the_handle() {
        let shared = SharedAcceleration::new();
        let mut store = ModelStore::new(1_u32);
        store.set(POSITION, Point::new(3.0, 4.0));
        store.set(VELOCITY, Vec3::new(1.0, 2.0, 0.0));
        store.set(ACCELERATION, shared.clone());

        shared.set(Vec3::new(0.0, 0.0, 9.0));
        let k = store.kinematics().unwrap();
        assert_eq!(k.acceleration, Vec3::new(0.0, 0.0, 9.0));
        assert_eq!(k.manipulation, Manipulation::Free);
    }

    #[test]
    fn store_motion_leaves_other_fields_alone() {
        let mut store = ModelStore::new(1_u32);
        store.set(MANIPULATION, Manipulation::Drawing);
        store.store_motion(Point::new(5.0, 6.0), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(store.manipulation(), Manipulation::Drawing);
        assert_eq!(store.get(VELOCITY), Some(&Vec3::new(1.0, 1.0, 1.0)));
    }
}
