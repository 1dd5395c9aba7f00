// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element → model store mapping.

use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Point;

use crate::error::ModelError;
use crate::field::{ACCELERATION, MANIPULATION, POSITION, VELOCITY};
use crate::manipulation::Manipulation;
use crate::shared::SharedAcceleration;
use crate::store::{Kinematics, ModelStore};
use crate::vector::Vec3;

/// Model stores for every element that has one.
///
/// Elements are identified by whatever key the view layer hands out.
#[derive(Clone, Debug)]
pub struct ModelTable<K> {
    stores: HashMap<K, ModelStore<K>>,
}

impl<K> Default for ModelTable<K> {
    fn default() -> Self {
        Self {
            stores: HashMap::default(),
        }
    }
}

impl<K: Copy + Eq + Hash> ModelTable<K> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements with a store.
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Returns `true` if no element has a store.
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Returns `true` if the element has a store.
    pub fn contains(&self, key: &K) -> bool {
        self.stores.contains_key(key)
    }

    /// Borrows an element's store.
    pub fn get(&self, key: &K) -> Option<&ModelStore<K>> {
        self.stores.get(key)
    }

    /// Mutably borrows an element's store.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut ModelStore<K>> {
        self.stores.get_mut(key)
    }

    /// Returns the element's store, creating an empty one if needed.
    pub fn entry(&mut self, key: K) -> &mut ModelStore<K> {
        self.stores
            .entry(key)
            .or_insert_with(|| ModelStore::new(key))
    }

    /// Drops an element's store.
    pub fn remove(&mut self, key: &K) -> Option<ModelStore<K>> {
        self.stores.remove(key)
    }

    /// Iterates over elements with a store, in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.stores.keys()
    }

    /// Snapshot of an element's kinematics.
    ///
    /// # Errors
    ///
    /// [`ModelError::Unknown`] if the element has no store, otherwise whatever
    /// [`ModelStore::kinematics`] reports.
    pub fn kinematics(&self, key: &K) -> Result<Kinematics, ModelError> {
        self.stores
            .get(key)
            .ok_or(ModelError::Unknown)
            .and_then(ModelStore::kinematics)
    }

    /// Sets an element's manipulation state, creating its store if needed.
    pub fn set_manipulation(&mut self, key: K, manipulation: Manipulation) {
        self.entry(key).set(MANIPULATION, manipulation);
    }

    /// Reads an element's manipulation state; unknown elements read as free.
    pub fn manipulation(&self, key: &K) -> Manipulation {
        self.stores
            .get(key)
            .map(ModelStore::manipulation)
            .unwrap_or_default()
    }

    /// Initializes a brick for physics: position, zero velocity, the shared
    /// acceleration handle, and [`Manipulation::Free`].
    pub fn init_free_brick(&mut self, key: K, position: Point, acceleration: &SharedAcceleration) {
        let store = self.entry(key);
        store.set(POSITION, position);
        store.set(VELOCITY, Vec3::ZERO);
        store.set(ACCELERATION, acceleration.clone());
        store.set(MANIPULATION, Manipulation::Free);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_creates_once() {
        let mut table = ModelTable::new();
        table.entry(1_u32).set(POSITION, Point::new(1.0, 2.0));
        table.entry(1_u32);
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get(&1).and_then(|s| s.get(POSITION)),
            Some(&Point::new(1.0, 2.0))
        );
    }

    #[test]
    fn unknown_elements_read_as_free_but_have_no_kinematics() {
        let table = ModelTable::<u32>::new();
        assert_eq!(table.manipulation(&9), Manipulation::Free);
        assert_eq!(table.kinematics(&9), Err(ModelError::Unknown));
    }

    #[test]
    fn init_free_brick_shares_acceleration() {
        let shared = SharedAcceleration::new();
        let mut table = ModelTable::new();
        table.init_free_brick(1_u32, Point::ZERO, &shared);
        table.init_free_brick(2_u32, Point::new(5.0, 5.0), &shared);

        shared.set(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(table.kinematics(&1).unwrap().acceleration.x, 1.0);
        assert_eq!(table.kinematics(&2).unwrap().acceleration.x, 1.0);
    }

    #[test]
    fn init_free_brick_resets_velocity_and_manipulation() {
        let shared = SharedAcceleration::new();
        let mut table = ModelTable::new();
        table.entry(1_u32).set(VELOCITY, Vec3::new(3.0, 3.0, 3.0));
        table.set_manipulation(1, Manipulation::Moving);

        table.init_free_brick(1, Point::ZERO, &shared);
        let k = table.kinematics(&1).unwrap();
        assert_eq!(k.velocity, Vec3::ZERO);
        assert_eq!(k.manipulation, Manipulation::Free);
    }

    #[test]
    fn remove_drops_the_store() {
        let mut table = ModelTable::new();
        table.entry(4_u32);
        assert!(table.remove(&4).is_some());
        assert!(!table.contains(&4));
        assert!(table.is_empty());
    }
}
