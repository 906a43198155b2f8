use bevy::prelude::*;
use bevy_rapier3d::prelude::{
    Collider, ExternalImpulse, Friction, LockedAxes, RapierConfiguration, RigidBody, Velocity,
};

use crate::player::{JumpState, Player};

use super::{CUBE_SIZE, FLOOR_SIZE, FLOOR_THICKNESS, GRAVITY, PLAYER_SPAWN_HEIGHT};

pub fn set_gravity(mut config: Query<&mut RapierConfiguration>) {
    for mut config in &mut config {
        config.gravity = Vec3::NEG_Y * GRAVITY;
    }
}

pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Materials
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.576, 0.439, 0.859),
        ..default()
    });
    let cube_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.647, 0.0),
        perceptual_roughness: 0.9,
        ..default()
    });

    // Floor: static slab, top surface at y = 0
    commands.spawn((
        RigidBody::Fixed,
        Collider::cuboid(FLOOR_SIZE / 2.0, FLOOR_THICKNESS / 2.0, FLOOR_SIZE / 2.0),
        Mesh3d(meshes.add(Cuboid::new(FLOOR_SIZE, FLOOR_THICKNESS, FLOOR_SIZE))),
        MeshMaterial3d(floor_material),
        Transform::from_xyz(0.0, -FLOOR_THICKNESS / 2.0, 0.0),
    ));

    // Player cube, dropped in above the floor. Rotations are locked; the
    // torque-impulse channel stays active for the rolling visual only.
    commands.spawn((
        Player,
        JumpState::default(),
        RigidBody::Dynamic,
        Collider::cuboid(CUBE_SIZE / 2.0, CUBE_SIZE / 2.0, CUBE_SIZE / 2.0),
        Friction::coefficient(1.0),
        LockedAxes::ROTATION_LOCKED,
        Velocity::default(),
        ExternalImpulse::default(),
        Mesh3d(meshes.add(Cuboid::new(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE))),
        MeshMaterial3d(cube_material),
        Transform::from_xyz(0.0, PLAYER_SPAWN_HEIGHT, 0.0),
    ));

    // Directional light with shadows
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Third-person camera, repositioned every frame by the follow system
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 60.0_f32.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, 6.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("scene ready: floor, player cube, light, camera");
}
