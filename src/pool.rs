//! Fixed-capacity pool of falling objects.
//!
//! Slots are scanned from 0 upwards; the first inactive slot takes the next
//! spawn. Nothing is ever compacted or reordered, so slot indices stay
//! valid for the lifetime of an object.

use crate::consts::MAX_OBJS;
use crate::entities::FallingObject;

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectPool {
    slots: [FallingObject; MAX_OBJS],
}

impl Default for ObjectPool {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectPool {
    pub fn new() -> Self {
        ObjectPool {
            slots: [FallingObject::empty(); MAX_OBJS],
        }
    }

    pub const fn capacity(&self) -> usize {
        MAX_OBJS
    }

    /// Activate the first free slot with the object built by `make`.
    ///
    /// `make` only runs when a slot is available. A full pool drops the
    /// spawn and returns `None`.
    pub fn spawn<F>(&mut self, make: F) -> Option<usize>
    where
        F: FnOnce() -> FallingObject,
    {
        let slot = self.slots.iter().position(|o| !o.active)?;
        let mut obj = make();
        obj.active = true;
        self.slots[slot] = obj;
        Some(slot)
    }

    /// Free a slot. Out-of-range indices are ignored.
    pub fn deactivate(&mut self, slot: usize) {
        if let Some(obj) = self.slots.get_mut(slot) {
            obj.active = false;
        }
    }

    pub fn clear(&mut self) {
        for obj in &mut self.slots {
            obj.active = false;
        }
    }

    pub fn get(&self, slot: usize) -> Option<&FallingObject> {
        self.slots.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut FallingObject> {
        self.slots.get_mut(slot)
    }

    /// Indices of active slots, in slot order.
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, o)| o.active)
            .map(|(i, _)| i)
    }

    /// `(slot, object)` pairs for every active slot, in slot order.
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &FallingObject)> {
        self.slots.iter().enumerate().filter(|(_, o)| o.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|o| o.active).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|o| o.active)
    }
}
