//! Enemies plugin: static turrets along the top edge of the arena.
//!
//! Turrets carry an always-armed [`Weapon`] with the enemy missile variant. They never
//! move and never aim; the weapon's own cadence decides when they shoot.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::weapons::{FiringConfig, MissileKind, Weapon};

pub const TURRET_COUNT: usize = 3;

#[derive(Component)]
pub struct Enemy;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_turrets);
}

/// Turret gun: slow bolts, straight down.
fn turret_gun() -> Weapon {
    let config = FiringConfig::builder()
        .fire_interval_ms(900)
        .fire_speed(220.0)
        .fire_direction(270.0)
        .build()
        .expect("turret gun config is complete");

    Weapon::new(config, MissileKind::Bolt)
        .with_muzzle_offset(Vec2::new(0.0, -16.0))
        .armed()
}

fn spawn_turrets(mut commands: Commands, tunables: Res<Tunables>) {
    let half = tunables.arena_half_extents;
    let y = half.y - 30.0;
    let spacing = half.x * 2.0 / (TURRET_COUNT as f32 + 1.0);

    let layers = CollisionLayers::new(Layer::Enemy, [Layer::World, Layer::PlayerMissile]);

    for i in 0..TURRET_COUNT {
        let x = -half.x + spacing * (i as f32 + 1.0);
        commands.spawn((
            Name::new(format!("Turret{i}")),
            Enemy,
            Sprite {
                color: Color::srgb(0.8, 0.25, 0.3),
                custom_size: Some(Vec2::splat(24.0)),
                ..default()
            },
            Transform::from_xyz(x, y, 1.0),
            RigidBody::Static,
            Collider::rectangle(24.0, 24.0),
            layers,
            turret_gun(),
            DespawnOnExit(GameState::InGame),
        ));
    }
}
