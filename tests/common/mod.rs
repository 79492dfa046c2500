//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime + time.
//! - `StatesPlugin` drives `GameState` and `DespawnOnExit`.
//! - `TransformPlugin` propagates `GlobalTransform` (spawn origins are world positions).
//! - we then call `hazard_field::game::configure_headless` to install gameplay plugins.
//!
//! Frame time is pinned with `TimeUpdateStrategy::ManualDuration`, so every `update()`
//! after the first advances the clock by exactly `FRAME`.

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;
use hazard_field::common::tunables::Tunables;

pub const FRAME: Duration = Duration::from_millis(100);

pub fn app_headless() -> App {
    app_headless_with(Tunables::default())
}

/// Tunables must be in place before plugins are registered: the RNG is seeded
/// at build time and the spawner is built from them on enter.
pub fn app_headless_with(tunables: Tunables) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, TransformPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.insert_resource(tunables);

    hazard_field::game::configure_headless(&mut app);
    app
}

pub fn run_frames(app: &mut App, n: usize) {
    for _ in 0..n {
        app.update();
    }
}
