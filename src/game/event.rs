//! Event System
//!
//! The simulation records what happened during a tick into typed queues.
//! The shell reads them after the tick (logging, sounds, hit flashes)
//! without reaching into the interaction code. Queues are cleared at the
//! start of every tick, so events never outlive the tick that sent them.

use macroquad::math::Vec2;
use super::entity::{EntityId, EntityKind};

/// Events of one type, in send order.
#[derive(Debug)]
pub struct EventQueue<T> {
    pending: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { pending: Vec::new() }
    }

    pub fn send(&mut self, event: T) {
        self.pending.push(event);
    }

    /// Read without consuming. Several readers may look at the same tick.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.pending.iter()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a EventQueue<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.pending.iter()
    }
}

/// Container for all simulation events.
#[derive(Debug, Default)]
pub struct Events {
    pub damage: EventQueue<DamageEvent>,
    pub death: EventQueue<DeathEvent>,
    pub spawn: EventQueue<SpawnEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all event queues. Called at the start of each tick.
    pub fn clear_all(&mut self) {
        self.damage.clear();
        self.death.clear();
        self.spawn.clear();
    }
}

// =============================================================================
// Event Types
// =============================================================================

/// An entity lost health
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageEvent {
    pub target: EntityId,
    pub amount: i32,
    /// Health left after the hit
    pub remaining: i32,
    pub position: Vec2,
}

/// An entity died and its slot was freed.
/// The id may already be reused by the loot it dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathEvent {
    pub entity: EntityId,
    pub kind: EntityKind,
    pub position: Vec2,
    /// The loot spawned in its place, if any
    pub loot: Option<EntityId>,
}

/// An entity was spawned during the tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnEvent {
    pub entity: EntityId,
    pub kind: EntityKind,
    pub position: Vec2,
}
