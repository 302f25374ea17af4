//! Global state machine.

use bevy::prelude::*;

/// Top-level game state. Gameplay entities are scoped to `InGame`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
