use std::time::Duration;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::tunables::Tunables;

use super::error::SpawnerConfigError;
use super::pool::{EntityPool, SlotIndex};
use super::scheduler::{SpawnArea, SpawnScheduler};

/// Typed spawner settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnerConfig {
    pub capacity: usize,
    pub lifetime: Duration,
    pub initial_delay: Duration,
    pub period: Duration,
    pub radius_x: f32,
    pub radius_z: f32,
}

impl SpawnerConfig {
    pub fn from_tunables(t: &Tunables) -> Result<Self, SpawnerConfigError> {
        Ok(Self {
            capacity: t.hazard_capacity,
            lifetime: secs("hazard_lifetime_secs", t.hazard_lifetime_secs)?,
            initial_delay: secs("spawn_delay_secs", t.spawn_delay_secs)?,
            period: secs("spawn_period_secs", t.spawn_period_secs)?,
            radius_x: t.spawn_radius_x,
            radius_z: t.spawn_radius_z,
        })
    }
}

fn secs(field: &'static str, value: f32) -> Result<Duration, SpawnerConfigError> {
    Duration::try_from_secs_f32(value)
        .map_err(|_| SpawnerConfigError::InvalidDuration { field, value })
}

/// Spawner host entity: owns the pool and the schedule.
///
/// The entity's `Transform` is the spawn origin. Despawning the spawner drops its pool
/// and stops all future ticks and spawns; orphaned slot entities are cleaned up in
/// `PostUpdate`.
#[derive(Component, Debug, Clone)]
#[require(Transform)]
pub struct HazardSpawner {
    pub pool: EntityPool,
    pub scheduler: SpawnScheduler,
}

impl HazardSpawner {
    /// Validate everything up front: either a complete spawner or an error, never a
    /// partial pool.
    pub fn new(config: &SpawnerConfig) -> Result<Self, SpawnerConfigError> {
        let area = SpawnArea::new(config.radius_x, config.radius_z)?;
        let scheduler = SpawnScheduler::new(config.initial_delay, config.period, area)?;
        let pool = EntityPool::new(config.capacity, config.lifetime)?;

        Ok(Self { pool, scheduler })
    }

    pub fn from_tunables(t: &Tunables) -> Result<Self, SpawnerConfigError> {
        Self::new(&SpawnerConfig::from_tunables(t)?)
    }
}

/// Host-side mirror of one pool slot.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HazardSlot {
    pub spawner: Entity,
    pub index: SlotIndex,
}

/// Random source for spawn placement.
#[derive(Resource, Deref, DerefMut)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_tunables(t: &Tunables) -> Self {
        match t.rng_seed {
            Some(seed) => Self::seeded(seed),
            None => Self(StdRng::from_entropy()),
        }
    }
}
