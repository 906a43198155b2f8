use bevy::prelude::*;

/// Marker component for the player cube.
#[derive(Component)]
pub struct Player;

/// One-shot jump gate: true while a jump is allowed (grounded),
/// false from the moment a jump impulse fires until landing is detected.
#[derive(Component)]
pub struct JumpState {
    pub can_jump: bool,
}

impl Default for JumpState {
    fn default() -> Self {
        Self { can_jump: true }
    }
}

// Locomotion constants
pub const MOVE_IMPULSE: f32 = 0.2;
pub const ROLL_TORQUE: f32 = 0.2;
pub const JUMP_IMPULSE: f32 = 5.0;

/// Vertical speed below which the cube counts as landed.
pub const LANDING_SPEED: f32 = 0.05;
