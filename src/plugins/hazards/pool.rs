//! Fixed-size arena of pooled entities.
//!
//! Slots are created once, all inactive, and never added or removed afterwards.
//! There is no `release()`: entities free themselves by expiring, and `acquire`
//! finds them again with a linear scan in index order.
//!
//! A free-list would avoid the O(capacity) scan, but it needs a push on every expiry.
//! Hazard pools are small, so the scan stays.

use std::time::Duration;

use bevy::prelude::*;

use super::error::SpawnerConfigError;
use super::lifetime::PooledEntity;

/// Stable handle to one pool slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(pub usize);

#[derive(Debug, Clone)]
pub struct EntityPool {
    slots: Vec<PooledEntity>,
}

impl EntityPool {
    /// Eagerly create `capacity` inactive entities.
    pub fn new(capacity: usize, max_lifetime: Duration) -> Result<Self, SpawnerConfigError> {
        if capacity < 1 {
            return Err(SpawnerConfigError::ZeroCapacity);
        }
        if max_lifetime.is_zero() {
            return Err(SpawnerConfigError::ZeroLifetime);
        }

        Ok(Self {
            slots: vec![PooledEntity::new(max_lifetime); capacity],
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// First inactive slot, or `None` when the pool is exhausted.
    ///
    /// Does not reserve the slot: until the caller activates it, a second `acquire`
    /// returns the same index. Use `spawn_with` to acquire and activate in one step.
    pub fn acquire(&self) -> Option<SlotIndex> {
        self.slots
            .iter()
            .position(|slot| !slot.is_active())
            .map(SlotIndex)
    }

    /// Acquire a slot, place it, reset its clock and activate it.
    ///
    /// `place` only runs when a slot is available.
    pub fn spawn_with(&mut self, place: impl FnOnce() -> Vec3) -> Option<SlotIndex> {
        let index = self.acquire()?;
        let slot = &mut self.slots[index.0];

        slot.position = place();
        slot.reset();
        slot.activate();

        Some(index)
    }

    /// Tick every slot, active or not. Returns how many expired on this tick.
    pub fn tick_all(&mut self, delta: Duration) -> usize {
        self.slots
            .iter_mut()
            .map(|slot| slot.tick(delta))
            .filter(|&expired| expired)
            .count()
    }

    #[inline]
    pub fn get(&self, index: SlotIndex) -> Option<&PooledEntity> {
        self.slots.get(index.0)
    }

    #[inline]
    pub fn get_mut(&mut self, index: SlotIndex) -> Option<&mut PooledEntity> {
        self.slots.get_mut(index.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &PooledEntity)> {
        self.slots.iter().enumerate().map(|(i, slot)| (SlotIndex(i), slot))
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_active()).count()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.acquire().is_none()
    }
}
