//! Spawn cadence + placement.
//!
//! The scheduler owns its own clock instead of relying on a global repeating timer.
//! The host feeds it frame deltas; it answers "how many attempts are due now".
//!
//! ```text
//!   clock: 0 ───── initial_delay ───── +period ───── +period ─────▶
//!   state: Idle     │ Armed ──────────────────────────────────────
//!   fires:          #1                 #2            #3
//! ```
//!
//! `next_fire` only ever moves by exactly `period`, so the cadence does not drift
//! with frame jitter or with how long an attempt takes.

use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;

use super::error::SpawnerConfigError;
use super::pool::{EntityPool, SlotIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Waiting for the initial delay.
    Idle,
    /// Firing every `period`.
    Armed,
}

/// Half-extents of the spawn rectangle on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnArea {
    pub radius_x: f32,
    pub radius_z: f32,
}

impl SpawnArea {
    pub fn new(radius_x: f32, radius_z: f32) -> Result<Self, SpawnerConfigError> {
        for (axis, value) in [('x', radius_x), ('z', radius_z)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SpawnerConfigError::InvalidRadius { axis, value });
            }
        }
        Ok(Self { radius_x, radius_z })
    }

    /// Whether both axis bounds around `origin` (and their span) are finite.
    pub fn can_sample_around(&self, origin: Vec3) -> bool {
        let finite_span = |center: f32, radius: f32| {
            let (lo, hi) = (center - radius, center + radius);
            (hi - lo).is_finite()
        };
        finite_span(origin.x, self.radius_x) && finite_span(origin.z, self.radius_z)
    }

    /// Uniform point in the rectangle around `origin`, at ground level (`y = 0`).
    ///
    /// Precondition: `can_sample_around(origin)`. `rand` panics on non-finite ranges.
    pub fn sample<R: Rng>(&self, origin: Vec3, rng: &mut R) -> Vec3 {
        let x = rng.gen_range(origin.x - self.radius_x..=origin.x + self.radius_x);
        let z = rng.gen_range(origin.z - self.radius_z..=origin.z + self.radius_z);
        Vec3::new(x, 0.0, z)
    }
}

#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    initial_delay: Duration,
    period: Duration,
    area: SpawnArea,
    clock: Duration,
    next_fire: Duration,
    state: SchedulerState,
}

impl SpawnScheduler {
    pub fn new(
        initial_delay: Duration,
        period: Duration,
        area: SpawnArea,
    ) -> Result<Self, SpawnerConfigError> {
        if period.is_zero() {
            return Err(SpawnerConfigError::ZeroPeriod);
        }

        Ok(Self {
            initial_delay,
            period,
            area,
            clock: Duration::ZERO,
            next_fire: initial_delay,
            state: SchedulerState::Idle,
        })
    }

    /// Advance the clock by `delta` and return how many attempts are now due.
    ///
    /// A frame that spans several periods reports one attempt per boundary crossed.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        self.clock += delta;

        let mut due = 0;
        while self.clock >= self.next_fire {
            due += 1;
            self.state = SchedulerState::Armed;
            self.next_fire += self.period;
        }
        due
    }

    /// One spawn attempt: acquire, place inside the area, reset, activate.
    ///
    /// Returns `None` when the pool is exhausted, or when the origin is not finite
    /// (pool left untouched). The random source is only touched when a slot was found.
    pub fn attempt<R: Rng>(
        &self,
        pool: &mut EntityPool,
        origin: Vec3,
        rng: &mut R,
    ) -> Option<SlotIndex> {
        let area = self.area;
        if !area.can_sample_around(origin) {
            return None;
        }
        pool.spawn_with(|| area.sample(origin, rng))
    }

    #[inline]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Time since the scheduler started.
    #[inline]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    #[inline]
    pub fn next_fire(&self) -> Duration {
        self.next_fire
    }

    #[inline]
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[inline]
    pub fn area(&self) -> SpawnArea {
        self.area
    }
}
