//! Interaction System
//!
//! Cursor picking and click-to-damage. Each tick:
//! 1. `select` finds the destructible entity nearest to the cursor whose
//!    sprite center lies strictly within the selection radius.
//! 2. `activate` hits the selection for one point of damage.
//! 3. An entity whose health drops to zero drops its loot and is destroyed.
//!    Loot is spawned before the slot is freed, so it never lands in the
//!    dying entity's own slot during the same step.

use macroquad::math::Vec2;

use super::catalog::EntityCatalog;
use super::entity::EntityId;
use super::event::{DamageEvent, DeathEvent, Events, SpawnEvent};
use super::pool::EntityPool;
use super::world::{visual_center, World};

/// Default picking distance from cursor to sprite center
pub const SELECTION_RADIUS: f32 = 8.0;

/// Damage dealt per activation
pub const ACTIVATION_DAMAGE: i32 = 1;

/// What a single activation did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activation {
    /// Hit, still standing
    Damaged { target: EntityId, remaining: i32 },
    /// Hit and destroyed
    Killed { target: EntityId, loot: Option<EntityId> },
}

/// Nearest destructible entity to `cursor` within `radius`.
///
/// Read-only over the pool. Ties keep the lowest slot index. A cursor
/// with a NaN or infinite coordinate selects nothing.
pub fn select(pool: &EntityPool, cursor: Vec2, radius: f32) -> Option<EntityId> {
    if !cursor.is_finite() {
        return None;
    }
    let mut best: Option<(EntityId, f32)> = None;
    for (id, entity) in pool.iter() {
        if !entity.is_alive_destructible() {
            continue;
        }
        let distance = visual_center(entity).distance(cursor);
        // False for a NaN distance, so NaN never counts as in range
        let in_range = distance < radius;
        if !in_range {
            continue;
        }
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((id, distance)),
        }
    }
    best.map(|(id, _)| id)
}

/// Apply one activation to `target`.
///
/// Returns `None` when the handle no longer points at a destructible
/// entity (freed, reused by something else, or never destructible).
pub fn activate(world: &mut World, events: &mut Events, target: EntityId) -> Option<Activation> {
    let entity = world.entities.get_mut(target).filter(|e| e.destructible)?;
    entity.health -= ACTIVATION_DAMAGE;
    let remaining = entity.health;
    let position = entity.position;
    let kind = entity.kind;

    log::debug!("{} #{} hit, {} health left", kind.label(), target.index(), remaining);
    events.damage.send(DamageEvent { target, amount: ACTIVATION_DAMAGE, remaining, position });

    if remaining > 0 {
        return Some(Activation::Damaged { target, remaining });
    }

    let loot = EntityCatalog::describe(kind).loot_on_death.map(|loot_kind| {
        let loot = world.spawn(loot_kind, position);
        log::debug!("{} dropped {} #{}", kind.label(), loot_kind.label(), loot.index());
        events.spawn.send(SpawnEvent { entity: loot, kind: loot_kind, position });
        loot
    });
    world.despawn(target);

    log::debug!("{} #{} destroyed", kind.label(), target.index());
    events.death.send(DeathEvent { entity: target, kind, position, loot });
    Some(Activation::Killed { target, loot })
}
