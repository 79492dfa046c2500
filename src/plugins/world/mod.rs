//! World plugin: ground plane + the hazard spawner.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::hazards::components::HazardSpawner;

/// Marker for the ground the hazards land on.
#[derive(Component)]
pub struct Ground;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), (spawn_ground, spawn_hazard_spawner));
}

fn spawn_ground(mut commands: Commands) {
    commands.spawn((
        Name::new("Ground"),
        Ground,
        Transform::from_xyz(0.0, 0.0, 0.0),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Spawner sits at the world origin; hazards land around it.
///
/// Invalid tunables are reported once and leave the level without a spawner.
fn spawn_hazard_spawner(mut commands: Commands, tunables: Res<Tunables>) {
    match HazardSpawner::from_tunables(&tunables) {
        Ok(spawner) => {
            commands.spawn((
                Name::new("HazardSpawner"),
                spawner,
                Transform::from_xyz(0.0, 0.0, 0.0),
                DespawnOnExit(GameState::InGame),
            ));
        }
        Err(e) => error!("hazard spawner not created: {e}"),
    }
}

/// Render-only: give the ground a visible plane sized to the spawn field.
pub fn render_plugin(app: &mut App) {
    app.add_systems(PostUpdate, attach_ground_mesh);
}

fn attach_ground_mesh(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q_new: Query<Entity, Added<Ground>>,
) {
    for e in &q_new {
        let half = Vec2::new(tunables.spawn_radius_x, tunables.spawn_radius_z) + Vec2::splat(2.0);
        commands.entity(e).insert((
            Mesh3d(meshes.add(Plane3d::new(Vec3::Y, half))),
            MeshMaterial3d(materials.add(Color::srgb(0.14, 0.14, 0.16))),
        ));
    }
}
