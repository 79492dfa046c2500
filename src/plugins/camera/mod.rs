//! Camera plugin (render-only).
//!
//! A fixed 3D camera looking down at the spawn field. The spawner handle is not needed:
//! the field is centered on the world origin and sized by `Tunables`.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{state::GameState, tunables::Tunables};

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera);
}

fn spawn_camera(mut commands: Commands, tunables: Res<Tunables>) {
    // Back off far enough to frame the whole spawn rectangle.
    let reach = tunables.spawn_radius_x.max(tunables.spawn_radius_z).max(1.0);

    commands.spawn((
        Name::new("MainCamera"),
        MainCamera,
        Camera3d::default(),
        Transform::from_xyz(0.0, reach * 1.6, reach * 1.8).looking_at(Vec3::ZERO, Vec3::Y),
        DespawnOnExit(GameState::InGame),
    ));
}
