//! Game World
//!
//! The World owns the entity pool and knows which entity is the player.
//! Spawning goes through here so every new entity is configured from the
//! catalog in the same step that claims its slot.

use macroquad::math::Vec2;
use macroquad::rand::RandGenerator;

use super::catalog::EntityCatalog;
use super::entity::{Entity, EntityId, EntityKind};
use super::pool::EntityPool;
use super::tile::snap_to_tile;
use crate::config::SpawnSettings;

/// All simulated state that persists between ticks.
pub struct World {
    pub entities: EntityPool,
    /// The entity driven by movement input and followed by the camera
    pub player: Option<EntityId>,
}

impl World {
    /// Create a new empty world.
    pub fn new() -> Self {
        Self {
            entities: EntityPool::new(),
            player: None,
        }
    }

    // =========================================================================
    // Spawning
    // =========================================================================

    /// Claim a slot and configure it as `kind` at `position`.
    pub fn spawn(&mut self, kind: EntityKind, position: Vec2) -> EntityId {
        let descriptor = EntityCatalog::describe(kind);
        let id = self.entities.create();
        if let Some(entity) = self.entities.get_mut(id) {
            descriptor.setup(entity);
            entity.position = position;
        }
        id
    }

    /// Spawn the player and remember it.
    pub fn spawn_player(&mut self, position: Vec2) -> EntityId {
        let id = self.spawn(EntityKind::Player, position);
        self.player = Some(id);
        id
    }

    /// Free a slot. Forgets the player handle if it pointed there.
    pub fn despawn(&mut self, id: EntityId) {
        if self.player == Some(id) {
            self.player = None;
        }
        self.entities.destroy(id);
    }

    /// Player at the origin plus circles and skeletons scattered on tile
    /// corners. Same seed, same layout.
    pub fn populate(&mut self, settings: &SpawnSettings) {
        let rng = RandGenerator::new();
        rng.srand(settings.seed);

        self.spawn_player(Vec2::ZERO);

        let extent = settings.extent;
        let groups = [
            (EntityKind::Circle, settings.circles),
            (EntityKind::Skeleton, settings.skeletons),
        ];
        for (kind, count) in groups {
            for _ in 0..count {
                let position = Vec2::new(
                    rng.gen_range(-extent, extent),
                    rng.gen_range(-extent, extent),
                );
                self.spawn(kind, snap_to_tile(position));
            }
        }

        log::info!(
            "Populated world: {} circles, {} skeletons ({} entities)",
            settings.circles,
            settings.skeletons,
            self.entities.count()
        );
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn player_entity(&self) -> Option<&Entity> {
        self.player.and_then(|id| self.entities.get(id))
    }

    pub fn player_position(&self) -> Option<Vec2> {
        self.player_entity().map(|e| e.position)
    }

    /// Count live entities of one kind
    pub fn count_kind(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|(_, e)| e.kind == kind).count()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Center of an entity's sprite in world space
pub fn visual_center(entity: &Entity) -> Vec2 {
    entity.position + EntityCatalog::size_of(entity.kind) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tile::TILE_SIZE;

    #[test]
    fn test_spawn_configures_from_catalog() {
        let mut world = World::new();
        let id = world.spawn(EntityKind::Skeleton, Vec2::new(32.0, 16.0));

        let e = world.entities.get(id).unwrap();
        assert!(e.valid);
        assert_eq!(e.kind, EntityKind::Skeleton);
        assert_eq!(e.health, 2);
        assert!(e.destructible);
        assert_eq!(e.position, Vec2::new(32.0, 16.0));
    }

    #[test]
    fn test_spawn_player() {
        let mut world = World::new();
        let player = world.spawn_player(Vec2::new(4.0, 4.0));

        assert_eq!(world.player, Some(player));
        assert_eq!(world.player_position(), Some(Vec2::new(4.0, 4.0)));
        assert!(!world.player_entity().unwrap().destructible);

        world.despawn(player);
        assert_eq!(world.player, None);
        assert_eq!(world.player_position(), None);
    }

    #[test]
    fn test_populate_counts_and_snapping() {
        let mut world = World::new();
        let settings = SpawnSettings { circles: 4, skeletons: 6, extent: 500.0, seed: 7 };
        world.populate(&settings);

        assert_eq!(world.entities.count(), 11);
        assert_eq!(world.count_kind(EntityKind::Player), 1);
        assert_eq!(world.count_kind(EntityKind::Circle), 4);
        assert_eq!(world.count_kind(EntityKind::Skeleton), 6);
        // Player takes slot 0
        assert_eq!(world.player.map(|id| id.index()), Some(0));

        for (_, e) in world.entities.iter() {
            assert_eq!(e.position.x % TILE_SIZE, 0.0);
            assert_eq!(e.position.y % TILE_SIZE, 0.0);
            assert!(e.position.x.abs() <= 512.0 && e.position.y.abs() <= 512.0);
        }
    }

    #[test]
    fn test_populate_is_deterministic_per_seed() {
        let settings = SpawnSettings { circles: 10, skeletons: 10, extent: 500.0, seed: 42 };
        let layout = |settings: &SpawnSettings| {
            let mut world = World::new();
            world.populate(settings);
            world.entities.iter().map(|(_, e)| (e.kind, e.position)).collect::<Vec<_>>()
        };
        assert_eq!(layout(&settings), layout(&settings));
    }

    #[test]
    fn test_visual_center() {
        let mut world = World::new();
        let id = world.spawn(EntityKind::Circle, Vec2::new(16.0, 32.0));
        let e = world.entities.get(id).unwrap();
        assert_eq!(visual_center(e), Vec2::new(24.0, 40.0));
    }
}
