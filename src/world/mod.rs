pub mod setup;

use bevy::prelude::*;

use setup::{set_gravity, setup_world};

// Scene dimensions
pub const FLOOR_SIZE: f32 = 20.0;
pub const FLOOR_THICKNESS: f32 = 0.5;
pub const CUBE_SIZE: f32 = 1.0;
pub const PLAYER_SPAWN_HEIGHT: f32 = 2.0;

/// Downward gravity magnitude.
pub const GRAVITY: f32 = 10.0;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 100.0,
        })
        .add_systems(Startup, (setup_world, set_gravity));
    }
}
