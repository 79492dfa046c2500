//! Tunable gameplay constants.

use bevy::prelude::*;

/// Hazard field settings, in seconds and world units.
///
/// Converted into typed durations once, when a spawner is built
/// (see `HazardSpawner::from_tunables`).
#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub hazard_capacity: usize,
    pub hazard_lifetime_secs: f32,
    pub spawn_delay_secs: f32,
    pub spawn_period_secs: f32,
    pub spawn_radius_x: f32,
    pub spawn_radius_z: f32,
    /// Fixed seed for spawn placement. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            hazard_capacity: 10,
            hazard_lifetime_secs: 10.0,
            spawn_delay_secs: 1.0,
            spawn_period_secs: 3.0,
            spawn_radius_x: 10.0,
            spawn_radius_z: 10.0,
            rng_seed: None,
        }
    }
}
