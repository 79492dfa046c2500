//! A pooled entity with a bounded active lifetime.
//!
//! Lifecycle of one slot:
//! ```text
//!   Inactive ──reset()+activate()──▶ Active ──tick(dt) while elapsed < max──▶ Active
//!      ▲                                 │
//!      └──────── elapsed >= max ─────────┘   (self-deactivation, same tick)
//! ```
//!
//! The entity never tells the pool it expired. The pool rediscovers free slots by
//! scanning `is_active()` on the next acquire.

use std::time::Duration;

use bevy::prelude::*;

/// `Once` timer: elapsed stops at the lifetime, and a finished timer stays finished
/// until `reset()`.
#[derive(Debug, Clone)]
pub struct PooledEntity {
    lifetime: Timer,
    active: bool,
    /// World position read by the host when rendering the slot.
    pub position: Vec3,
}

impl PooledEntity {
    /// Create an inactive entity with a fresh clock.
    pub fn new(max_lifetime: Duration) -> Self {
        Self {
            lifetime: Timer::new(max_lifetime, TimerMode::Once),
            active: false,
            position: Vec3::ZERO,
        }
    }

    /// Mark the entity live.
    ///
    /// Precondition: `reset()` was the last clock operation applied. Activating
    /// without it resumes from a stale `elapsed`. Activating an already active
    /// entity leaves its clock untouched.
    #[inline]
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Zero the clock. Does not change the active flag.
    #[inline]
    pub fn reset(&mut self) {
        self.lifetime.reset();
    }

    /// Advance the clock by one host frame.
    ///
    /// No-op while inactive. Returns `true` only on the tick where the entity expires.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if !self.active {
            return false;
        }

        if self.lifetime.tick(delta).is_finished() {
            self.active = false;
            return true;
        }
        false
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.lifetime.elapsed()
    }

    #[inline]
    pub fn max_lifetime(&self) -> Duration {
        self.lifetime.duration()
    }

    /// Time left before self-expiry (zero when inactive or expired).
    pub fn remaining(&self) -> Duration {
        if self.active {
            self.lifetime.remaining()
        } else {
            Duration::ZERO
        }
    }
}
