//! Forgotten Academia
//!
//! A small tile-based 2D world: a fixed pool of entities, a camera that
//! eases after the player, and a cursor that picks things to break.
//!
//! The simulation core (`game`) is plain data and runs without a window.
//! `input` and `game::renderer` are the macroquad-facing edges.

pub mod config;
pub mod game;
pub mod input;

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
