//! Input state management
//!
//! Polls keyboard/mouse (macroquad) and gamepad input, combining them into
//! a unified action-based API and the per-tick `FrameInput`.

use macroquad::prelude::*;

use super::gamepad::{button, Gamepad};
use super::Action;
use crate::game::FrameInput;

/// Unified input state that handles both keyboard/mouse and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self { gamepad: Gamepad::new() }
    }

    /// Call once per frame before checking actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
    }

    /// Raw movement axis, not normalized. Keyboard wins over the stick
    /// when both are active.
    pub fn movement_axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.action_down(Action::MoveLeft) { axis.x -= 1.0; }
        if self.action_down(Action::MoveRight) { axis.x += 1.0; }
        if self.action_down(Action::MoveDown) { axis.y -= 1.0; }
        if self.action_down(Action::MoveUp) { axis.y += 1.0; }

        if axis == Vec2::ZERO {
            axis = self.gamepad.left_stick();
        }
        axis
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action)
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        self.keyboard_pressed(action) || self.gamepad_pressed(action)
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            // WASD, ZQSD (AZERTY) and arrows
            Action::MoveUp => is_key_down(KeyCode::W) || is_key_down(KeyCode::Z) || is_key_down(KeyCode::Up),
            Action::MoveDown => is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
            Action::MoveLeft => is_key_down(KeyCode::A) || is_key_down(KeyCode::Q) || is_key_down(KeyCode::Left),
            Action::MoveRight => is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            Action::Primary => is_mouse_button_down(MouseButton::Left),
            Action::Exit => is_key_down(KeyCode::Escape),
            Action::ToggleDebug => is_key_down(KeyCode::F3),
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        let gp = &self.gamepad;
        match action {
            Action::MoveUp => gp.is_button_down(button::DPAD_UP),
            Action::MoveDown => gp.is_button_down(button::DPAD_DOWN),
            Action::MoveLeft => gp.is_button_down(button::DPAD_LEFT),
            Action::MoveRight => gp.is_button_down(button::DPAD_RIGHT),
            Action::Primary => gp.is_button_down(button::A),
            Action::Exit => gp.is_button_down(button::START),
            Action::ToggleDebug => gp.is_button_down(button::SELECT),
        }
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::Primary => is_mouse_button_pressed(MouseButton::Left),
            Action::Exit => is_key_pressed(KeyCode::Escape),
            Action::ToggleDebug => is_key_pressed(KeyCode::F3),
            _ => false,
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        let gp = &self.gamepad;
        match action {
            Action::Primary => gp.is_button_pressed(button::A),
            Action::Exit => gp.is_button_pressed(button::START),
            Action::ToggleDebug => gp.is_button_pressed(button::SELECT),
            _ => false,
        }
    }

    /// Check if any gamepad is connected
    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }

    /// Gather everything a simulation tick needs. The caller supplies the
    /// cursor already converted to world space.
    pub fn frame_input(&self, delta_time: f32, cursor_world: Vec2) -> FrameInput {
        FrameInput {
            delta_time,
            cursor_world,
            primary_action_pressed: self.action_pressed(Action::Primary),
            movement_axis: self.movement_axis(),
            exit_requested: self.action_pressed(Action::Exit),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
