use bevy::prelude::*;

use crate::player::Player;

/// Third-person offset from the cube: above and behind.
pub const FOLLOW_OFFSET: Vec3 = Vec3::new(0.0, 5.0, 10.0);

/// Per-frame interpolation factor toward the follow target.
/// Exponential smoothing, framerate-dependent.
pub const FOLLOW_SMOOTHING: f32 = 0.1;

pub fn camera_target(body: Vec3) -> Vec3 {
    body + FOLLOW_OFFSET
}

/// One smoothing step of the camera position toward the follow target.
pub fn follow_step(current: Vec3, body: Vec3) -> Vec3 {
    current.lerp(camera_target(body), FOLLOW_SMOOTHING)
}

/// Position is smoothed, orientation snaps to the cube every frame.
pub fn follow_player(
    player: Query<&Transform, With<Player>>,
    mut camera: Query<&mut Transform, (With<Camera3d>, Without<Player>)>,
) {
    let Ok(player_transform) = player.get_single() else {
        return;
    };
    let Ok(mut camera_transform) = camera.get_single_mut() else {
        return;
    };

    let body = player_transform.translation;
    camera_transform.translation = follow_step(camera_transform.translation, body);
    camera_transform.look_at(body, Vec3::Y);
}
