pub mod systems;

use bevy::prelude::*;

use crate::player::systems::player_movement;
use systems::follow_player;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, follow_player.after(player_movement));
    }
}
