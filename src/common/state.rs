//! Global state machine.

use bevy::prelude::*;

/// Top-level game state.
///
/// Hazard spawning and ticking only run while `InGame`; the spawner and its
/// slot entities are scoped to this state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
