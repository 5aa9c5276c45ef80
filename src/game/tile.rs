//! Tile Grid
//!
//! Maps continuous world coordinates onto a square grid of fixed-size
//! tiles. A tile is addressed by the integer coordinates of its lower-left
//! (origin) corner divided by `TILE_SIZE`.

use macroquad::math::{IVec2, Vec2};

/// Edge length of one tile in world units
pub const TILE_SIZE: f32 = 16.0;

/// Tile index containing a world coordinate (one axis)
pub fn world_to_tile(coord: f32) -> i32 {
    (coord / TILE_SIZE).floor() as i32
}

/// World coordinate of a tile's origin edge (one axis)
pub fn tile_to_world(tile: i32) -> f32 {
    tile as f32 * TILE_SIZE
}

/// Tile coordinates containing a world point
pub fn world_to_tile_v2(point: Vec2) -> IVec2 {
    IVec2::new(world_to_tile(point.x), world_to_tile(point.y))
}

/// World-space origin corner of a tile
pub fn tile_to_world_v2(tile: IVec2) -> Vec2 {
    Vec2::new(tile_to_world(tile.x), tile_to_world(tile.y))
}

/// Snap a world point to the origin corner of the tile containing it.
/// Idempotent: snapping an already snapped point returns it unchanged.
pub fn snap_to_tile(point: Vec2) -> Vec2 {
    tile_to_world_v2(world_to_tile_v2(point))
}

/// Tiles in the half-open square `[center - radius, center + radius)`,
/// row by row. Used to draw the ground around the player.
pub fn tiles_around(center: IVec2, radius: i32) -> impl Iterator<Item = IVec2> {
    let radius = radius.max(0);
    (center.y - radius..center.y + radius)
        .flat_map(move |y| (center.x - radius..center.x + radius).map(move |x| IVec2::new(x, y)))
}

/// Checkerboard parity used for ground shading
pub fn is_dark_tile(tile: IVec2) -> bool {
    (tile.x + tile.y).rem_euclid(2) == 0
}
