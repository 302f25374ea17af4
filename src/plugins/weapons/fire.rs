//! Fire system: cadence check, pool acquisition, activation.
//!
//! # Fail-fast invariants
//! - A weapon's pool contains only missile entities it spawned itself.
//! - Therefore a pooled entity must match the missile query.
//!
//! Violations `expect()` and crash loudly instead of silently skipping a shot.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{Acquired, Missile, MissilePool, MissileState, Weapon};
use super::factory::MISSILE_Z;
use super::messages::MissilePoolOverflow;

/// Once per frame per weapon: if armed and off cooldown, fire one missile.
///
/// Time is wall-clock (`Time<Real>`) so hitstop or pause on virtual time does not
/// change the cadence.
pub fn fire_weapons(
    mut commands: Commands,
    time: Res<Time<Real>>,
    tunables: Res<Tunables>,
    mut q_weapons: Query<(Entity, &mut Weapon, &mut MissilePool, &Transform), Without<Missile>>,
    mut q_missiles: Query<(
        &mut MissileState,
        &mut Transform,
        &mut LinearVelocity,
        &mut Visibility,
        &mut CollisionLayers,
    ), With<Missile>>,
    mut overflow: MessageWriter<MissilePoolOverflow>,
) {
    let now = time.elapsed();

    for (weapon_e, mut weapon, mut pool, carrier_tf) in &mut q_weapons {
        if !weapon.can_fire(now) {
            continue;
        }

        let pos = carrier_tf.translation.truncate() + weapon.muzzle_offset;
        let vel = weapon.launch_velocity();
        let kind = weapon.kind;

        let acquired = pool.acquire(
            |e| matches!(q_missiles.get(e), Ok((state, ..)) if *state == MissileState::Inactive),
            || kind.spawn(&mut commands, weapon_e, pos, vel),
        );

        match acquired {
            Acquired::Reused(e) => {
                let (mut state, mut tf, mut lin_vel, mut vis, mut layers) = q_missiles
                    .get_mut(e)
                    .expect("MissilePool contained an entity missing missile components");

                *state = MissileState::Active;
                tf.translation = pos.extend(MISSILE_Z);
                lin_vel.0 = vel;
                *vis = Visibility::Visible;
                *layers = kind.active_layers();
            }
            Acquired::Created(_) => {
                if pool.just_crossed(tunables.pool_warn_threshold) {
                    overflow.write(MissilePoolOverflow { weapon: weapon_e, pool_len: pool.len() });
                }
            }
        }

        debug!("{weapon_e}: fired {} {} at {pos}", kind.name(), acquired.entity());
        weapon.mark_fired(now);
    }
}
