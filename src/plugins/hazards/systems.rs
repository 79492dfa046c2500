//! Hazard systems.
//!
//! Frame order (Update, chained):
//! init slots -> tick pools -> run schedules -> sync slot entities.
//!
//! Ticking before scheduling means an entity that expires this frame is already
//! visible as free when this frame's spawn attempt scans the pool.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{HazardSlot, HazardSpawner, SpawnRng};
use super::pool::SlotIndex;

/// Seed placement randomness from the same `Tunables` the spawner is built from.
pub fn seed_spawn_rng(mut commands: Commands, tunables: Res<Tunables>) {
    commands.insert_resource(SpawnRng::from_tunables(&tunables));
}

/// Pre-spawn one hidden host entity per pool slot for every new spawner.
pub fn init_spawner_slots(
    mut commands: Commands,
    q_new: Query<(Entity, &HazardSpawner), Added<HazardSpawner>>,
) {
    for (spawner, hs) in &q_new {
        let cap = hs.pool.capacity();
        for i in 0..cap {
            commands.spawn((
                Name::new("Hazard(Pooled)"),
                HazardSlot {
                    spawner,
                    index: SlotIndex(i),
                },
                Transform::default(),
                Visibility::Hidden,
            ));
        }
        info!("hazard spawner {spawner} ready with {cap} pooled slots");
    }
}

pub fn tick_hazards(time: Res<Time>, mut q: Query<(Entity, &mut HazardSpawner)>) {
    let dt = time.delta();
    for (spawner, mut hs) in &mut q {
        let expired = hs.pool.tick_all(dt);
        if expired > 0 {
            debug!("{expired} hazard(s) of spawner {spawner} expired");
        }
    }
}

/// Origin is the spawner's world position: spawners may sit under a level root,
/// while slot entities are roots.
pub fn run_spawn_schedule(
    time: Res<Time>,
    mut rng: ResMut<SpawnRng>,
    mut q: Query<(Entity, &mut HazardSpawner, &GlobalTransform)>,
) {
    let dt = time.delta();
    for (spawner, mut hs, gtf) in &mut q {
        let due = hs.scheduler.advance(dt);
        let origin = gtf.translation();
        let HazardSpawner { pool, scheduler } = &mut *hs;

        for _ in 0..due {
            match scheduler.attempt(pool, origin, &mut rng.0) {
                Some(SlotIndex(i)) => debug!("spawner {spawner} activated slot {i}"),
                // Capacity decision (or unusable origin), not a failure: wait for the next period.
                None => debug!("spawner {spawner} attempt skipped"),
            }
        }
    }
}

/// Mirror pool state into `Transform` / `Visibility`.
///
/// Invariant: a slot's index always addresses its spawner's pool.
pub fn sync_slot_entities(
    q_spawners: Query<&HazardSpawner>,
    mut q_slots: Query<(&HazardSlot, &mut Transform, &mut Visibility)>,
) {
    for (slot, mut tf, mut vis) in &mut q_slots {
        // Spawner already gone: `despawn_orphaned_slots` handles it.
        let Ok(hs) = q_spawners.get(slot.spawner) else {
            continue;
        };

        let pooled = hs
            .pool
            .get(slot.index)
            .expect("HazardSlot index out of range for its spawner's pool");

        tf.set_if_neq(Transform::from_translation(pooled.position));
        vis.set_if_neq(if pooled.is_active() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        });
    }
}

pub fn despawn_orphaned_slots(
    mut commands: Commands,
    q_slots: Query<(Entity, &HazardSlot)>,
    q_spawners: Query<(), With<HazardSpawner>>,
) {
    for (e, slot) in &q_slots {
        if !q_spawners.contains(slot.spawner) {
            commands.entity(e).despawn();
        }
    }
}
