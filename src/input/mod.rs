//! Input handling with gamepad support
//!
//! Turns keyboard, mouse and gamepad state into the raw values a
//! simulation tick consumes: a movement axis and edge-triggered actions.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Keyboard and mouse only

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use gamepad::{Gamepad, button};
pub use state::*;
