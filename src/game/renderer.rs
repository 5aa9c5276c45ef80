//! World Renderer
//!
//! Draws a `Simulation` with macroquad after its tick has finished. Reads
//! simulation state only; nothing here feeds back into the world.

use std::collections::HashMap;

use macroquad::prelude::*;

use crate::config::{CameraSettings, RenderSettings};
use super::entity::{EntityKind, SpriteId};
use super::runtime::{RenderEntity, Simulation};
use super::tile::{is_dark_tile, tiles_around, tile_to_world_v2, world_to_tile_v2, TILE_SIZE};

const GROUND_SHADE: Color = Color::new(0.0, 0.0, 0.0, 0.067);
const HOVER_SHADE: Color = Color::new(1.0, 1.0, 1.0, 0.067);
const SELECTION_OUTLINE: Color = Color::new(1.0, 1.0, 1.0, 0.8);

/// Loaded sprite textures. Missing images fall back to flat rectangles.
pub struct SpriteAtlas {
    textures: HashMap<SpriteId, Texture2D>,
}

impl SpriteAtlas {
    /// Load every sprite image from `dir`
    pub async fn load(dir: &str) -> Self {
        let mut textures = HashMap::new();
        for sprite in SpriteId::ALL {
            let Some(file) = sprite.file_name() else { continue };
            let path = format!("{}/{}", dir, file);
            match load_texture(&path).await {
                Ok(texture) => {
                    texture.set_filter(FilterMode::Nearest);
                    textures.insert(sprite, texture);
                }
                Err(e) => log::warn!("Failed to load {}: {}, drawing a placeholder", path, e),
            }
        }
        log::info!("Loaded {}/{} sprites", textures.len(), SpriteId::ALL.len());
        Self { textures }
    }

    pub fn get(&self, sprite: SpriteId) -> Option<&Texture2D> {
        self.textures.get(&sprite)
    }
}

/// Color from 0xRRGGBBAA
pub fn color_from_rgba_hex(hex: u32) -> Color {
    let [r, g, b, a] = hex.to_be_bytes();
    Color::from_rgba(r, g, b, a)
}

/// Placeholder tint per sprite
fn fallback_color(sprite: SpriteId) -> Color {
    match sprite {
        SpriteId::Nil => MAGENTA,
        SpriteId::Player => SKYBLUE,
        SpriteId::Circle => ORANGE,
        SpriteId::Skeleton => LIGHTGRAY,
        SpriteId::Bone => BEIGE,
    }
}

/// World-space camera centered on the simulation's smoothed position.
/// World y points up.
pub fn world_camera(sim: &Simulation, settings: &CameraSettings) -> Camera2D {
    Camera2D {
        target: sim.camera_position(),
        zoom: vec2(
            settings.zoom * 2.0 / screen_width(),
            settings.zoom * 2.0 / screen_height(),
        ),
        ..Default::default()
    }
}

/// Vertical draw offset for pickups
pub fn item_bob_offset(time: f64, phase: f32, settings: &RenderSettings) -> f32 {
    (time as f32 * settings.item_bob_speed + phase).sin() * settings.item_bob_amplitude
}

/// Draw ground, entities and the cursor overlay in world space.
pub fn draw_world(sim: &Simulation, atlas: &SpriteAtlas, camera: &Camera2D, settings: &RenderSettings) {
    set_camera(camera);

    draw_ground(sim, settings);

    let time = get_time();
    for drawn in sim.render_entities() {
        draw_entity(&drawn, atlas, time, settings);
    }

    let hover = sim.hover_tile();
    draw_rectangle(hover.x, hover.y, TILE_SIZE, TILE_SIZE, HOVER_SHADE);

    set_default_camera();
}

fn draw_ground(sim: &Simulation, settings: &RenderSettings) {
    let center = world_to_tile_v2(sim.world.player_position().unwrap_or(sim.camera_position()));
    for tile in tiles_around(center, settings.tile_radius) {
        if is_dark_tile(tile) {
            let origin = tile_to_world_v2(tile);
            draw_rectangle(origin.x, origin.y, TILE_SIZE, TILE_SIZE, GROUND_SHADE);
        }
    }
}

fn draw_entity(drawn: &RenderEntity, atlas: &SpriteAtlas, time: f64, settings: &RenderSettings) {
    let mut position = drawn.entity.position;
    if drawn.entity.is_item {
        // Offset the phase by slot so a pile of drops doesn't move in lockstep
        position.y += item_bob_offset(time, drawn.id.index() as f32, settings);
    }
    let size = drawn.size;

    match atlas.get(drawn.entity.sprite) {
        Some(texture) => draw_texture_ex(
            texture,
            position.x,
            position.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(size),
                // Textures are stored top row first; world y points up
                flip_y: true,
                ..Default::default()
            },
        ),
        None => draw_rectangle(position.x, position.y, size.x, size.y, fallback_color(drawn.entity.sprite)),
    }

    if drawn.selected {
        draw_rectangle_lines(position.x - 1.0, position.y - 1.0, size.x + 2.0, size.y + 2.0, 1.0, SELECTION_OUTLINE);
    }
}

/// Screen-space stats in the top-left corner
pub fn draw_debug_overlay(sim: &Simulation, fps: u32) {
    let lines = [
        format!("fps: {}", fps),
        format!("entities: {}", sim.world.entities.count()),
        format!(
            "skeletons: {}  circles: {}  bones: {}",
            sim.count_kind(EntityKind::Skeleton),
            sim.count_kind(EntityKind::Circle),
            sim.count_kind(EntityKind::Bone),
        ),
        match sim.selected().and_then(|id| sim.world.entities.get(id)) {
            Some(e) => format!("selected: {} ({} hp)", e.kind.label(), e.health),
            None => "selected: -".to_string(),
        },
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 8.0, 20.0 + i as f32 * 18.0, 18.0, WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_bob_stays_within_amplitude() {
        let settings = RenderSettings::default();
        for step in 0..100 {
            let offset = item_bob_offset(step as f64 * 0.05, 1.0, &settings);
            assert!(offset.abs() <= settings.item_bob_amplitude + f32::EPSILON);
        }
        assert_eq!(item_bob_offset(0.0, 0.0, &settings), 0.0);
    }

    #[test]
    fn test_color_from_rgba_hex() {
        let c = color_from_rgba_hex(0xff0000ff);
        assert_eq!(c, Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(color_from_rgba_hex(0x00000000).a, 0.0);
    }

    #[test]
    fn test_every_sprite_has_a_placeholder() {
        for sprite in SpriteId::ALL {
            assert_ne!(fallback_color(sprite), MAGENTA);
        }
    }
}
