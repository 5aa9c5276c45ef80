//! Game action definitions

/// Discrete actions that can be triggered by input
///
/// Bindings (keyboard / gamepad):
/// - Move: WASD, ZQSD, arrow keys / left stick, d-pad
/// - Primary: left mouse button / A (South)
/// - Exit: Escape / Start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (digital; the left stick is read separately)
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    /// Hit whatever is under the cursor
    Primary,

    // System
    Exit,
    ToggleDebug,
}
