//! Entity Catalog
//!
//! Static per-kind data: sprite, visual size, whether the kind can be
//! damaged, how much health it starts with, and what it drops on death.
//! Kind behaviour is driven by this table rather than by branching on the
//! kind at each call site.

use macroquad::math::Vec2;
use super::entity::{Entity, EntityKind, SpriteId};

/// Default sprite edge length in world units
pub const SPRITE_SIZE: f32 = 16.0;

/// Immutable description of one entity kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityKindDescriptor {
    pub kind: EntityKind,
    pub sprite: SpriteId,
    pub size: Vec2,
    pub destructible: bool,
    pub starting_health: i32,
    /// Kind spawned where this entity dies
    pub loot_on_death: Option<EntityKind>,
    pub is_item: bool,
}

impl EntityKindDescriptor {
    /// Write this kind's fields into a freshly created slot.
    /// Position is left to the caller.
    pub fn setup(&self, entity: &mut Entity) {
        entity.kind = self.kind;
        entity.sprite = self.sprite;
        entity.destructible = self.destructible;
        entity.health = self.starting_health;
        entity.is_item = self.is_item;
    }
}

const DESCRIPTORS: [EntityKindDescriptor; 4] = [
    EntityKindDescriptor {
        kind: EntityKind::Player,
        sprite: SpriteId::Player,
        size: Vec2::new(SPRITE_SIZE, SPRITE_SIZE),
        destructible: false,
        starting_health: 0,
        loot_on_death: None,
        is_item: false,
    },
    EntityKindDescriptor {
        kind: EntityKind::Circle,
        sprite: SpriteId::Circle,
        size: Vec2::new(SPRITE_SIZE, SPRITE_SIZE),
        destructible: true,
        starting_health: 3,
        loot_on_death: None,
        is_item: false,
    },
    EntityKindDescriptor {
        kind: EntityKind::Skeleton,
        sprite: SpriteId::Skeleton,
        size: Vec2::new(SPRITE_SIZE, SPRITE_SIZE),
        destructible: true,
        starting_health: 2,
        loot_on_death: Some(EntityKind::Bone),
        is_item: false,
    },
    EntityKindDescriptor {
        kind: EntityKind::Bone,
        sprite: SpriteId::Bone,
        size: Vec2::new(8.0, 8.0),
        destructible: false,
        starting_health: 0,
        loot_on_death: None,
        is_item: true,
    },
];

/// Read-only lookup over the kind table.
#[derive(Debug, Clone, Copy)]
pub struct EntityCatalog;

impl EntityCatalog {
    /// Descriptor for `kind`.
    ///
    /// Panics for `EntityKind::Nil`: asking for a kind with no table entry
    /// is a programming error.
    pub fn describe(kind: EntityKind) -> &'static EntityKindDescriptor {
        match DESCRIPTORS.iter().find(|d| d.kind == kind) {
            Some(descriptor) => descriptor,
            None => {
                log::error!("No catalog entry for entity kind {:?}", kind);
                panic!("Unknown entity kind {:?}", kind);
            }
        }
    }

    /// Visual size, or zero for kinds without an entry
    pub fn size_of(kind: EntityKind) -> Vec2 {
        DESCRIPTORS
            .iter()
            .find(|d| d.kind == kind)
            .map(|d| d.size)
            .unwrap_or(Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_spawnable_kind_is_described() {
        for kind in EntityKind::SPAWNABLE {
            assert_eq!(EntityCatalog::describe(kind).kind, kind);
        }
        assert_eq!(DESCRIPTORS.len(), EntityKind::SPAWNABLE.len());
    }

    #[test]
    fn test_skeleton_drops_bone() {
        let skeleton = EntityCatalog::describe(EntityKind::Skeleton);
        assert!(skeleton.destructible);
        assert_eq!(skeleton.starting_health, 2);
        assert_eq!(skeleton.loot_on_death, Some(EntityKind::Bone));

        let bone = EntityCatalog::describe(EntityKind::Bone);
        assert!(bone.is_item);
        assert!(!bone.destructible);
    }

    #[test]
    fn test_setup_writes_kind_fields() {
        let mut entity = Entity { valid: true, ..Default::default() };
        EntityCatalog::describe(EntityKind::Skeleton).setup(&mut entity);
        assert_eq!(entity.kind, EntityKind::Skeleton);
        assert_eq!(entity.sprite, SpriteId::Skeleton);
        assert_eq!(entity.health, 2);
        assert!(entity.destructible);
        assert!(entity.valid);
    }

    #[test]
    #[should_panic(expected = "Unknown entity kind")]
    fn test_nil_kind_is_fatal() {
        EntityCatalog::describe(EntityKind::Nil);
    }

    #[test]
    fn test_size_of_nil_is_zero() {
        assert_eq!(EntityCatalog::size_of(EntityKind::Nil), Vec2::ZERO);
        assert_eq!(EntityCatalog::size_of(EntityKind::Bone), Vec2::new(8.0, 8.0));
    }
}
