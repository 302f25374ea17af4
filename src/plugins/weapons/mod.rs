//! Weapons plugin: fire cadence + per-weapon missile pools.
//!
//! # Data flow
//! ```text
//!   Update
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ (A) Callers flip `Weapon::firing` (player input, turret AI, ...)     │
//! │                                                                      │
//! │ (B) fire_weapons                                                     │
//! │     - reads: Time<Real>, Weapon, carrier Transform                   │
//! │     - mutates: MissilePool (append only), missile components         │
//! │     - writes: MissilePoolOverflow message                            │
//! │                                                                      │
//! │ (C) report_pool_overflow: MissilePoolOverflow -> warn!               │
//! └──────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   PostUpdate
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ (D) recycle_out_of_bounds: Active -> Inactive once outside arena     │
//! └──────────────────────────────────────────────────────────────────────┘
//!
//! Feedback loop:
//!   recycle parks missiles in place (they never leave the pool)
//!   fire_weapons hands out the first parked missile in creation order
//! ```
//!
//! A weapon only ever touches its own pool, and fires at most once per frame.

pub mod components;
pub mod config;
pub mod factory;
pub mod fire;
pub mod messages;
pub mod recycle;

use bevy::prelude::*;

use crate::common::state::GameState;

pub use components::{Missile, MissilePool, MissileState, Weapon};
pub use config::{FiringConfig, FiringConfigError};
pub use factory::MissileKind;

pub struct WeaponsPlugin;

impl Plugin for WeaponsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<messages::MissilePoolOverflow>();

        app.add_systems(
            Update,
            (
                fire::fire_weapons,
                messages::report_pool_overflow.after(fire::fire_weapons),
            )
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            PostUpdate,
            recycle::recycle_out_of_bounds.run_if(in_state(GameState::InGame)),
        );
    }
}
