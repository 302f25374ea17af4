//! Recycle missiles that left the arena.
//!
//! This system owns the *Inactive invariants*. An inactive missile is:
//! - hidden
//! - at rest (velocity = 0)
//! - colliding with nothing (filters empty)
//!
//! It stays in its weapon's pool and is handed out again by the fire system.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{Missile, MissileState};

pub fn recycle_out_of_bounds(
    tunables: Res<Tunables>,
    mut q: Query<(
        Entity,
        &Missile,
        &Transform,
        &mut MissileState,
        &mut Visibility,
        &mut LinearVelocity,
        &mut CollisionLayers,
    )>,
) {
    for (e, missile, tf, mut state, mut vis, mut vel, mut layers) in &mut q {
        if *state != MissileState::Active || tunables.in_play(tf.translation.truncate()) {
            continue;
        }

        *state = MissileState::Inactive;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;
        *layers = missile.kind.inactive_layers();

        trace!("{e}: {} left the arena, parked", missile.kind.name());
    }
}
