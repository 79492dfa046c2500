//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::hazards::HazardsPlugin;

pub mod core;
pub mod hazards;
pub mod world;

// Render-only
pub mod camera;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    world::plugin(app);
    app.add_plugins(HazardsPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
    world::render_plugin(app);
    hazards::visuals::plugin(app);
}
