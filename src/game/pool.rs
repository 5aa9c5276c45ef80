//! Entity Pool
//!
//! Fixed-capacity slot store. Allocation is a linear first-fit scan from
//! slot 0, so a freed low slot is always handed out again before any
//! higher one. Capacity never grows: running out of slots means more was
//! spawned than the world was sized for, and that is fatal.

use super::entity::{Entity, EntityId};

/// Number of slots in a world
pub const MAX_ENTITIES: usize = 1024;

/// Owns every entity slot.
pub struct EntityPool {
    slots: Vec<Entity>,
}

impl EntityPool {
    /// Allocate all slots, zeroed.
    pub fn new() -> Self {
        Self {
            slots: vec![Entity::default(); MAX_ENTITIES],
        }
    }

    /// Claim the lowest free slot and mark it valid.
    ///
    /// Panics when every slot is occupied.
    pub fn create(&mut self) -> EntityId {
        let Some(index) = self.slots.iter().position(|e| !e.valid) else {
            log::error!("Entity pool exhausted ({} slots in use)", MAX_ENTITIES);
            panic!("Max entity per world exceeded.");
        };
        self.slots[index].valid = true;
        EntityId::new(index)
    }

    /// Zero a slot. Destroying a free slot is a no-op.
    pub fn destroy(&mut self, id: EntityId) {
        if let Some(slot) = self.slots.get_mut(id.index()) {
            *slot = Entity::default();
        }
    }

    /// Resolve a handle. `None` if the slot is free.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots.get(id.index()).filter(|e| e.valid)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.slots.get_mut(id.index()).filter(|e| e.valid)
    }

    pub fn is_valid(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, e)| e.valid)
            .map(|(idx, e)| (EntityId::new(idx), e))
    }

    /// Number of occupied slots
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|e| e.valid).count()
    }
}

impl Default for EntityPool {
    fn default() -> Self {
        Self::new()
    }
}
