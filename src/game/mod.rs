//! Game Module
//!
//! A fixed-size world of typed entities on a tile grid, stepped once per
//! frame. The player walks around, the cursor picks the nearest
//! destructible thing, and clicking wears it down until it breaks and
//! drops whatever its kind drops.
//!
//! Key concepts:
//! - EntityPool: fixed array of slots, first-fit allocation
//! - EntityId: slot index, re-checked every time it is used
//! - EntityCatalog: per-kind data table driving setup and loot
//! - Simulation: owns the world and runs the per-frame pipeline
//! - Events: what happened during the last tick

pub mod animate;
pub mod tile;
pub mod entity;
pub mod catalog;
pub mod pool;
pub mod world;
pub mod event;
pub mod interaction;
pub mod runtime;
pub mod renderer;

// Re-export main types
pub use entity::{Entity, EntityId, EntityKind, SpriteId};
pub use catalog::{EntityCatalog, EntityKindDescriptor};
pub use pool::{EntityPool, MAX_ENTITIES};
pub use world::World;
pub use event::Events;
pub use runtime::{FpsCounter, FrameInput, FrameState, Simulation, SimulationSettings};
