pub mod components;
pub mod systems;

use bevy::prelude::*;

pub use components::{JumpState, Player, JUMP_IMPULSE, LANDING_SPEED, MOVE_IMPULSE, ROLL_TORQUE};

use systems::player_movement;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, player_movement);
    }
}
