//! Simulation Runtime
//!
//! One `Simulation::tick` is one frame. The order inside a tick is fixed:
//! 1. camera eases toward the player
//! 2. last tick's frame state is discarded
//! 3. selection is computed under the cursor
//! 4. movement input moves the player
//! 5. the primary action hits the selection
//!
//! Selection runs before movement, so it sees positions from the start of
//! the tick and trails player motion by one frame.

use macroquad::math::Vec2;

use super::animate::animate_v2_to_target;
use super::catalog::EntityCatalog;
use super::entity::{Entity, EntityId, EntityKind};
use super::event::Events;
use super::interaction::{self, Activation, SELECTION_RADIUS};
use super::tile::snap_to_tile;
use super::world::World;
use crate::config::GameConfig;

/// Camera follow rate for `animate_v2_to_target`
pub const CAMERA_FOLLOW_RATE: f32 = 30.0;
/// Player movement speed in world units per second
pub const PLAYER_SPEED: f32 = 128.0;

/// Everything the outside world tells the simulation for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous tick
    pub delta_time: f32,
    /// Cursor already converted to world space
    pub cursor_world: Vec2,
    /// True for exactly one tick per press
    pub primary_action_pressed: bool,
    /// Raw movement axis, normalized by the simulation
    pub movement_axis: Vec2,
    pub exit_requested: bool,
}

/// Transient per-tick state. Rebuilt from scratch every tick and never
/// carried into the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameState {
    /// Entity under the cursor this tick (weak)
    pub selected: Option<EntityId>,
    /// Origin of the tile under the cursor
    pub hover_tile: Vec2,
    /// Result of this tick's activation, if any
    pub activation: Option<Activation>,
}

/// Tunables that stay fixed for the life of a simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSettings {
    pub camera_follow_rate: f32,
    pub player_speed: f32,
    pub selection_radius: f32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            camera_follow_rate: CAMERA_FOLLOW_RATE,
            player_speed: PLAYER_SPEED,
            selection_radius: SELECTION_RADIUS,
        }
    }
}

impl From<&GameConfig> for SimulationSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            camera_follow_rate: config.camera.follow_rate,
            player_speed: config.player.speed,
            selection_radius: config.interaction.selection_radius,
        }
    }
}

/// Read-only view of one entity for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderEntity {
    pub id: EntityId,
    pub entity: Entity,
    pub size: Vec2,
    pub selected: bool,
}

/// Owns the world and steps it one frame at a time.
pub struct Simulation {
    pub world: World,
    pub events: Events,
    settings: SimulationSettings,
    camera_position: Vec2,
    frame: FrameState,
    exit_requested: bool,
    tick_count: u64,
}

impl Simulation {
    pub fn new(world: World, settings: SimulationSettings) -> Self {
        // Start the camera on the player so the first frames don't sweep in
        let camera_position = world.player_position().unwrap_or(Vec2::ZERO);
        Self {
            world,
            events: Events::new(),
            settings,
            camera_position,
            frame: FrameState::default(),
            exit_requested: false,
            tick_count: 0,
        }
    }

    /// Populated world built from a config
    pub fn from_config(config: &GameConfig) -> Self {
        let mut world = World::new();
        world.populate(&config.spawn);
        Self::new(world, SimulationSettings::from(config))
    }

    /// Advance one frame.
    pub fn tick(&mut self, input: &FrameInput) {
        let dt = input.delta_time.max(0.0);
        self.events.clear_all();

        // Camera
        if let Some(target) = self.world.player_position() {
            animate_v2_to_target(&mut self.camera_position, target, dt, self.settings.camera_follow_rate);
        }

        // Fresh frame state
        self.frame = FrameState {
            hover_tile: snap_to_tile(input.cursor_world),
            ..FrameState::default()
        };

        // Selection
        self.frame.selected = interaction::select(
            &self.world.entities,
            input.cursor_world,
            self.settings.selection_radius,
        );

        // Movement
        let step = input.movement_axis.normalize_or_zero() * self.settings.player_speed * dt;
        if let Some(player) = self.world.player.and_then(|id| self.world.entities.get_mut(id)) {
            player.position += step;
        }

        // Activation
        if input.primary_action_pressed {
            if let Some(target) = self.frame.selected {
                self.frame.activation = interaction::activate(&mut self.world, &mut self.events, target);
            }
        }

        if input.exit_requested {
            self.exit_requested = true;
        }
        self.tick_count += 1;
    }

    // =========================================================================
    // Outputs for the shell
    // =========================================================================

    /// Smoothed camera position for view construction
    pub fn camera_position(&self) -> Vec2 {
        self.camera_position
    }

    pub fn frame(&self) -> &FrameState {
        &self.frame
    }

    /// Selection from the last tick, only if its slot still holds it
    pub fn selected(&self) -> Option<EntityId> {
        self.frame.selected.filter(|id| self.world.entities.is_valid(*id))
    }

    pub fn hover_tile(&self) -> Vec2 {
        self.frame.hover_tile
    }

    pub fn should_exit(&self) -> bool {
        self.exit_requested
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Valid entities in slot order, with their visual size
    pub fn render_entities(&self) -> impl Iterator<Item = RenderEntity> + '_ {
        let selected = self.selected();
        self.world.entities.iter().map(move |(id, entity)| RenderEntity {
            id,
            entity: *entity,
            size: EntityCatalog::size_of(entity.kind),
            selected: selected == Some(id),
        })
    }

    /// Number of live entities of a kind, for the HUD
    pub fn count_kind(&self, kind: EntityKind) -> usize {
        self.world.count_kind(kind)
    }
}

/// Counts frames and reports once per elapsed second.
#[derive(Debug, Clone, Copy, Default)]
pub struct FpsCounter {
    seconds: f64,
    frames: u32,
    last_fps: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame. Returns the frame count when a second has passed.
    pub fn tick(&mut self, delta_time: f64) -> Option<u32> {
        self.seconds += delta_time;
        self.frames += 1;
        if self.seconds > 1.0 {
            let fps = self.frames;
            self.last_fps = fps;
            self.seconds = 0.0;
            self.frames = 0;
            return Some(fps);
        }
        None
    }

    /// Most recent report
    pub fn fps(&self) -> u32 {
        self.last_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn sim_with(setup: impl FnOnce(&mut World)) -> Simulation {
        let mut world = World::new();
        setup(&mut world);
        Simulation::new(world, SimulationSettings::default())
    }

    fn idle(cursor: Vec2) -> FrameInput {
        FrameInput { delta_time: DT, cursor_world: cursor, ..Default::default() }
    }

    #[test]
    fn test_movement_is_normalized() {
        let mut sim = sim_with(|w| {
            w.spawn_player(Vec2::ZERO);
        });
        sim.tick(&FrameInput {
            delta_time: 0.5,
            movement_axis: Vec2::new(3.0, 4.0),
            ..Default::default()
        });
        let pos = sim.world.player_position().unwrap();
        assert!((pos - Vec2::new(0.6, 0.8) * 64.0).length() < 1e-4);
    }

    #[test]
    fn test_zero_axis_does_not_move() {
        let mut sim = sim_with(|w| {
            w.spawn_player(Vec2::new(10.0, 10.0));
        });
        sim.tick(&idle(Vec2::ZERO));
        assert_eq!(sim.world.player_position(), Some(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_camera_follows_player() {
        let mut sim = sim_with(|w| {
            w.spawn_player(Vec2::ZERO);
        });
        let player = sim.world.player.unwrap();
        sim.world.entities.get_mut(player).unwrap().position = Vec2::new(100.0, -50.0);

        sim.tick(&idle(Vec2::ZERO));
        let cam = sim.camera_position();
        assert!(cam.x > 0.0 && cam.x < 100.0);
        assert!(cam.y < 0.0 && cam.y > -50.0);

        for _ in 0..120 {
            sim.tick(&idle(Vec2::ZERO));
        }
        assert_eq!(sim.camera_position(), Vec2::new(100.0, -50.0));
    }

    #[test]
    fn test_selection_uses_pre_movement_positions() {
        // Circle centered at (20, 8); the player sits far away
        let mut sim = sim_with(|w| {
            w.spawn_player(Vec2::new(-200.0, 0.0));
            w.spawn(EntityKind::Circle, Vec2::new(12.0, 0.0));
        });
        let circle = EntityId::new(1);

        sim.tick(&idle(Vec2::new(20.0, 8.0)));
        assert_eq!(sim.frame().selected, Some(circle));

        // Moving the cursor away clears it next tick
        sim.tick(&idle(Vec2::new(200.0, 200.0)));
        assert_eq!(sim.frame().selected, None);
    }

    #[test]
    fn test_skeleton_scenario() {
        let mut sim = sim_with(|w| {
            w.spawn_player(Vec2::new(-100.0, 0.0));
            w.spawn(EntityKind::Skeleton, Vec2::new(32.0, 32.0));
        });
        let skeleton = EntityId::new(1);
        let click = FrameInput {
            delta_time: DT,
            cursor_world: Vec2::new(40.0, 40.0),
            primary_action_pressed: true,
            ..Default::default()
        };

        sim.tick(&click);
        assert_eq!(sim.frame().activation, Some(Activation::Damaged { target: skeleton, remaining: 1 }));
        assert_eq!(sim.world.entities.get(skeleton).unwrap().health, 1);
        assert_eq!(sim.count_kind(EntityKind::Bone), 0);

        // Holding without a new press does nothing
        sim.tick(&idle(Vec2::new(40.0, 40.0)));
        assert_eq!(sim.world.entities.get(skeleton).unwrap().health, 1);

        sim.tick(&click);
        assert!(!sim.world.entities.is_valid(skeleton));
        assert_eq!(sim.count_kind(EntityKind::Skeleton), 0);
        assert_eq!(sim.count_kind(EntityKind::Bone), 1);
        let (_, bone) = sim
            .world
            .entities
            .iter()
            .find(|(_, e)| e.kind == EntityKind::Bone)
            .unwrap();
        assert_eq!(bone.position, Vec2::new(32.0, 32.0));
        assert_eq!(sim.events.death.len(), 1);

        // The selection handle from the killing tick no longer resolves
        assert_eq!(sim.selected(), None);
    }

    #[test]
    fn test_click_on_nothing_is_benign() {
        let mut sim = sim_with(|w| {
            w.spawn_player(Vec2::ZERO);
        });
        sim.tick(&FrameInput {
            delta_time: DT,
            cursor_world: Vec2::new(300.0, 300.0),
            primary_action_pressed: true,
            ..Default::default()
        });
        assert_eq!(sim.frame().selected, None);
        assert_eq!(sim.frame().activation, None);
        assert!(sim.events.damage.is_empty());
    }

    #[test]
    fn test_click_with_nan_cursor_hits_nothing() {
        // A zero-sized window gives the camera a degenerate mapping
        let mut sim = sim_with(|w| {
            w.spawn_player(Vec2::ZERO);
            w.spawn(EntityKind::Skeleton, Vec2::new(400.0, 400.0));
            w.spawn(EntityKind::Circle, Vec2::new(-400.0, 0.0));
        });
        sim.tick(&FrameInput {
            delta_time: DT,
            cursor_world: Vec2::new(f32::NAN, 0.0),
            primary_action_pressed: true,
            ..Default::default()
        });
        assert_eq!(sim.frame().selected, None);
        assert_eq!(sim.frame().activation, None);
        assert!(sim.events.damage.is_empty());
        assert_eq!(sim.world.entities.get(EntityId::new(1)).unwrap().health, 2);
        assert_eq!(sim.world.entities.get(EntityId::new(2)).unwrap().health, 3);
    }

    #[test]
    fn test_events_cleared_each_tick() {
        let mut sim = sim_with(|w| {
            w.spawn(EntityKind::Circle, Vec2::ZERO);
        });
        sim.tick(&FrameInput {
            delta_time: DT,
            cursor_world: Vec2::splat(8.0),
            primary_action_pressed: true,
            ..Default::default()
        });
        assert_eq!(sim.events.damage.len(), 1);
        sim.tick(&idle(Vec2::splat(8.0)));
        assert!(sim.events.damage.is_empty());
    }

    #[test]
    fn test_hover_tile_and_exit() {
        let mut sim = sim_with(|_| {});
        sim.tick(&idle(Vec2::new(17.0, -1.0)));
        assert_eq!(sim.hover_tile(), Vec2::new(16.0, -16.0));
        assert!(!sim.should_exit());

        sim.tick(&FrameInput { exit_requested: true, ..idle(Vec2::ZERO) });
        assert!(sim.should_exit());
        assert_eq!(sim.tick_count(), 2);
    }

    #[test]
    fn test_render_entities_marks_selection() {
        let mut sim = sim_with(|w| {
            w.spawn_player(Vec2::new(-64.0, 0.0));
            w.spawn(EntityKind::Bone, Vec2::new(64.0, 0.0));
            w.spawn(EntityKind::Circle, Vec2::ZERO);
        });
        sim.tick(&idle(Vec2::splat(8.0)));

        let drawn: Vec<_> = sim.render_entities().collect();
        assert_eq!(drawn.len(), 3);
        assert_eq!(drawn[1].size, Vec2::new(8.0, 8.0));
        assert!(drawn[2].selected);
        assert!(!drawn[0].selected && !drawn[1].selected);
    }

    #[test]
    fn test_fps_counter() {
        let mut fps = FpsCounter::new();
        for _ in 0..4 {
            assert_eq!(fps.tick(0.25), None);
        }
        // Exactly one second is not enough, the report comes after it
        assert_eq!(fps.tick(0.25), Some(5));
        assert_eq!(fps.fps(), 5);
        assert_eq!(fps.tick(0.5), None);
    }
}
