//! Entities and Slot Handles
//!
//! An `Entity` is a plain record stored in one slot of the `EntityPool`.
//! Entities are referenced by `EntityId`, which is nothing more than the
//! slot index. Slots are reused after a destroy, so an id is a weak
//! reference: anything holding one across a destroy must re-check the
//! slot with `EntityPool::get` before trusting it.

use macroquad::math::Vec2;

/// Index of an entity slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u32);

impl EntityId {
    /// Should only be called by EntityPool.
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Slot index in the pool
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// What an entity is. `Nil` is the value of a zeroed slot and has no
/// catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntityKind {
    #[default]
    Nil,
    Player,
    Circle,
    Skeleton,
    /// Dropped by skeletons
    Bone,
}

impl EntityKind {
    /// Every kind that has a catalog entry
    pub const SPAWNABLE: [EntityKind; 4] = [
        EntityKind::Player,
        EntityKind::Circle,
        EntityKind::Skeleton,
        EntityKind::Bone,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Nil => "nil",
            EntityKind::Player => "player",
            EntityKind::Circle => "circle",
            EntityKind::Skeleton => "skeleton",
            EntityKind::Bone => "bone",
        }
    }
}

/// Visual binding. The renderer owns the actual textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpriteId {
    #[default]
    Nil,
    Player,
    Circle,
    Skeleton,
    Bone,
}

impl SpriteId {
    pub const ALL: [SpriteId; 4] = [SpriteId::Player, SpriteId::Circle, SpriteId::Skeleton, SpriteId::Bone];

    /// Image file name under the asset directory
    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            SpriteId::Nil => None,
            SpriteId::Player => Some("player.png"),
            SpriteId::Circle => Some("circle.png"),
            SpriteId::Skeleton => Some("skeleton.png"),
            SpriteId::Bone => Some("item_bone.png"),
        }
    }
}

/// A simulated object occupying one pool slot.
///
/// `Default` is the zeroed slot: a freed slot must compare equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Entity {
    /// Slot occupancy. When false every other field is meaningless.
    pub valid: bool,
    pub kind: EntityKind,
    pub sprite: SpriteId,
    /// World-space origin (lower-left corner of the sprite)
    pub position: Vec2,
    /// Remaining hit points, only meaningful when `destructible`
    pub health: i32,
    pub destructible: bool,
    /// Pickups bob up and down when drawn
    pub is_item: bool,
}

impl Entity {
    /// Is this slot occupied by something that can still take damage?
    pub fn is_alive_destructible(&self) -> bool {
        self.valid && self.destructible && self.health > 0
    }
}
