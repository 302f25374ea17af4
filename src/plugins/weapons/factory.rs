//! Missile factory: one variant per weapon type.
//!
//! The weapon holds a `MissileKind` and calls [`MissileKind::spawn`] only when its pool has
//! no inactive missile to hand out. Everything variant-specific (look, size, who it hits)
//! lives here.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};

use super::components::{Missile, MissileState};

/// Missiles render above the actors that fire them.
pub const MISSILE_Z: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissileKind {
    /// Player cannon shell.
    Shell,
    /// Enemy turret bolt.
    Bolt,
}

impl MissileKind {
    #[inline]
    fn membership(self) -> Layer {
        match self {
            Self::Shell => Layer::PlayerMissile,
            Self::Bolt => Layer::EnemyMissile,
        }
    }

    #[inline]
    fn targets(self) -> [Layer; 2] {
        match self {
            Self::Shell => [Layer::World, Layer::Enemy],
            Self::Bolt => [Layer::World, Layer::Player],
        }
    }

    #[inline]
    fn radius(self) -> f32 {
        match self {
            Self::Shell => 4.0,
            Self::Bolt => 6.0,
        }
    }

    fn sprite(self) -> Sprite {
        let color = match self {
            Self::Shell => Color::srgb(1.0, 0.85, 0.3),
            Self::Bolt => Color::srgb(0.95, 0.3, 0.35),
        };
        Sprite {
            color,
            custom_size: Some(Vec2::splat(self.radius() * 2.0)),
            ..default()
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Shell => "Missile(Shell)",
            Self::Bolt => "Missile(Bolt)",
        }
    }

    #[inline]
    pub fn active_layers(self) -> CollisionLayers {
        CollisionLayers::new(self.membership(), self.targets())
    }

    /// Parked missiles keep their membership but filter nothing, so they never collide.
    #[inline]
    pub fn inactive_layers(self) -> CollisionLayers {
        CollisionLayers::new(self.membership(), [] as [Layer; 0])
    }

    /// Spawn a new missile that is already in flight.
    pub fn spawn(self, commands: &mut Commands, owner: Entity, pos: Vec2, vel: Vec2) -> Entity {
        commands
            .spawn((
                Name::new(self.name()),
                Missile { kind: self, owner },
                MissileState::Active,
                self.sprite(),
                Transform::from_translation(pos.extend(MISSILE_Z)),
                Visibility::Visible,
                RigidBody::Kinematic,
                Collider::circle(self.radius()),
                self.active_layers(),
                LinearVelocity(vel),
                DespawnOnExit(GameState::InGame),
            ))
            .id()
    }
}
