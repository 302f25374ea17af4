use std::time::Duration;

use bevy::prelude::*;

use super::config::FiringConfig;
use super::factory::MissileKind;

/// A firing system mounted on some entity with a `Transform`.
///
/// `firing` is the only field callers are expected to flip every frame. The launch
/// velocity is derived from `config` once, in [`Weapon::new`]; editing `config` afterwards
/// does not change what gets fired.
#[derive(Component, Debug, Clone)]
#[require(MissilePool)]
pub struct Weapon {
    pub firing: bool,
    pub config: FiringConfig,
    pub kind: MissileKind,
    /// Muzzle position relative to the carrier's translation.
    pub muzzle_offset: Vec2,
    last_fired: Duration,
    launch_velocity: Vec2,
}

impl Weapon {
    pub fn new(config: FiringConfig, kind: MissileKind) -> Self {
        Self {
            firing: false,
            launch_velocity: config.launch_velocity(),
            config,
            kind,
            muzzle_offset: Vec2::ZERO,
            last_fired: Duration::ZERO,
        }
    }

    pub fn with_muzzle_offset(mut self, offset: Vec2) -> Self {
        self.muzzle_offset = offset;
        self
    }

    pub fn armed(mut self) -> Self {
        self.firing = true;
        self
    }

    #[inline]
    pub fn launch_velocity(&self) -> Vec2 {
        self.launch_velocity
    }

    #[inline]
    pub fn last_fired(&self) -> Duration {
        self.last_fired
    }

    /// Armed and strictly more than `fire_interval` has passed since the last shot.
    #[inline]
    pub fn can_fire(&self, now: Duration) -> bool {
        self.firing && now.saturating_sub(self.last_fired) > self.config.fire_interval()
    }

    #[inline]
    pub fn mark_fired(&mut self, now: Duration) {
        self.last_fired = now;
    }
}

/// Every missile a weapon has ever created, in creation order.
///
/// Entries are never removed; inactive missiles are handed out again instead.
#[derive(Component, Debug, Default)]
pub struct MissilePool {
    missiles: Vec<Entity>,
}

/// Outcome of [`MissilePool::acquire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquired {
    Reused(Entity),
    Created(Entity),
}

impl Acquired {
    #[inline]
    pub fn entity(self) -> Entity {
        match self {
            Self::Reused(e) | Self::Created(e) => e,
        }
    }
}

impl MissilePool {
    #[inline]
    pub fn len(&self) -> usize {
        self.missiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.missiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.missiles.iter().copied()
    }

    /// First missile (in creation order) for which `is_inactive` holds.
    pub fn first_inactive(&self, mut is_inactive: impl FnMut(Entity) -> bool) -> Option<Entity> {
        self.iter().find(|&e| is_inactive(e))
    }

    /// Reuse the first inactive missile, or append the one produced by `create`.
    pub fn acquire(
        &mut self,
        is_inactive: impl FnMut(Entity) -> bool,
        create: impl FnOnce() -> Entity,
    ) -> Acquired {
        if let Some(e) = self.first_inactive(is_inactive) {
            return Acquired::Reused(e);
        }
        let e = create();
        self.missiles.push(e);
        Acquired::Created(e)
    }

    /// True only on the acquisition that took the pool from `threshold` to `threshold + 1`.
    #[inline]
    pub fn just_crossed(&self, threshold: usize) -> bool {
        self.missiles.len() == threshold + 1
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Missile {
    pub kind: MissileKind,
    /// The weapon entity whose pool holds this missile.
    pub owner: Entity,
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissileState {
    #[default]
    Inactive,
    Active,
}
