//! Test helpers.
//!
//! `World::run_system_once` (via the `RunSystemOnce` trait) executes a system without
//! building a full schedule. Systems that use `Commands` only enqueue structural changes,
//! so we call `world.flush()` afterwards to apply them before assertions.

use std::time::Duration;

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Make `Res<Time>` report `delta` for the next system run.
pub fn set_frame_delta(world: &mut World, delta: Duration) {
    if world.get_resource::<Time>().is_none() {
        world.insert_resource(Time::<()>::default());
    }
    world.resource_mut::<Time>().advance_by(delta);
}
