//! Hazards plugin: pooled self-expiring hazards dropped on a fixed cadence.
//!
//! # Data flow
//! ```text
//!   HazardSpawner (component)
//!     ├─ SpawnScheduler ── advance(dt) → N due attempts
//!     │                    attempt() ──▶ EntityPool::spawn_with
//!     │                                    acquire → place → reset → activate
//!     └─ EntityPool (fixed slots of PooledEntity)
//!            tick_all(dt) → expired slots go inactive on their own
//!
//!   HazardSlot entities (one per pool slot)
//!     sync: PooledEntity.position → Transform, is_active → Visibility
//! ```
//!
//! # Ownership
//! The pool lives inside the spawner component, so a system holding
//! `&mut HazardSpawner` has exclusive access to it for the whole
//! acquire → reset → activate step. Slot entities only carry a handle.
//!
//! # Where do we branch?
//! - Capacity: pool exhausted → attempt skipped until the next period.
//! - Configuration: invalid settings never produce a spawner (see `error`).
//! Everything else is an invariant.

pub mod components;
pub mod error;
pub mod lifetime;
pub mod pool;
pub mod scheduler;
pub mod systems;

// Render-only
pub mod visuals;

use bevy::prelude::*;

use crate::common::state::GameState;

pub struct HazardsPlugin;

impl Plugin for HazardsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, systems::seed_spawn_rng);

        app.add_systems(
            Update,
            (
                systems::init_spawner_slots,
                systems::tick_hazards,
                systems::run_spawn_schedule,
                systems::sync_slot_entities,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(PostUpdate, systems::despawn_orphaned_slots);
    }
}
