//! Hazard visuals (render-only).
//!
//! Slot entities are created by gameplay code without meshes so headless apps never
//! touch render assets. Here we attach a shared mesh + material to every new slot.

use bevy::prelude::*;

use super::components::HazardSlot;

#[derive(Resource, Debug, Clone)]
struct HazardVisuals {
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, load_visuals)
        .add_systems(PostUpdate, attach_slot_meshes);
}

fn load_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(HazardVisuals {
        mesh: meshes.add(Sphere::new(0.5)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.95, 0.35, 0.15),
            emissive: LinearRgba::rgb(1.2, 0.3, 0.05),
            ..default()
        }),
    });
}

fn attach_slot_meshes(
    mut commands: Commands,
    visuals: Res<HazardVisuals>,
    q_new: Query<Entity, Added<HazardSlot>>,
) {
    for e in &q_new {
        commands.entity(e).insert((
            Mesh3d(visuals.mesh.clone()),
            MeshMaterial3d(visuals.material.clone()),
        ));
    }
}
