//! Player plugin.
//!
//! Pipeline:
//! - Update: sample keyboard, write PlayerInput resource, arm/disarm the ship's cannon
//! - FixedUpdate: apply horizontal velocity to the kinematic rigid body, then clamp the
//!   ship inside the arena (kinematic bodies get no contact response from the walls)
//!
//! The cannon is a plain [`Weapon`]; this module only decides when it is armed.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::weapons::{fire::fire_weapons, FiringConfig, MissileKind, Weapon};

/// Sprite/collider size before the nose-up rotation.
const SHIP_SIZE: Vec2 = Vec2::new(26.0, 18.0);

/// Rotated nose-up, so the short side spans x.
const SHIP_HALF_WIDTH: f32 = SHIP_SIZE.y * 0.5;

#[derive(Component)]
pub struct Player;

/// Which way the ship is being steered this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Steer {
    Left,
    Right,
    #[default]
    Idle,
}

impl Steer {
    #[inline]
    fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
            Self::Idle => 0.0,
        }
    }
}

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    steer: Steer,
    trigger: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, (gather_input, arm_cannon.before(fire_weapons)).chain())
        .add_systems(FixedUpdate, (apply_movement, clamp_to_arena).chain());
}

/// Ship cannon: 5 shots per second, straight up.
fn cannon() -> Weapon {
    let config = FiringConfig::builder()
        .fire_interval_ms(200)
        .fire_speed(600.0)
        .fire_direction(90.0)
        .build()
        .expect("player cannon config is complete");

    Weapon::new(config, MissileKind::Shell).with_muzzle_offset(Vec2::new(0.0, 18.0))
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let layers = CollisionLayers::new(
        Layer::Player,
        [Layer::World, Layer::Enemy, Layer::EnemyMissile],
    );
    let y = -tunables.arena_half_extents.y + 40.0;

    commands.spawn((
        Name::new("Player"),
        Player,
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(SHIP_SIZE),
            ..default()
        },
        // Nose points up.
        Transform::from_xyz(0.0, y, 1.0)
            .with_rotation(Quat::from_rotation_z(90f32.to_radians())),
        RigidBody::Kinematic,
        Collider::rectangle(SHIP_SIZE.x, SHIP_SIZE.y),
        layers,
        LinearVelocity::ZERO,
        cannon(),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Left is checked first, so holding both keys steers left.
fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else { return; };

    input.steer = if keys.pressed(KeyCode::ArrowLeft) {
        Steer::Left
    } else if keys.pressed(KeyCode::ArrowRight) {
        Steer::Right
    } else {
        Steer::Idle
    };
    input.trigger = keys.pressed(KeyCode::Space);
}

fn arm_cannon(input: Res<PlayerInput>, mut q_player: Query<&mut Weapon, With<Player>>) {
    let Ok(mut weapon) = q_player.single_mut() else {
        return;
    };
    if weapon.firing != input.trigger {
        weapon.firing = input.trigger;
    }
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut LinearVelocity, With<Player>>,
) {
    let Ok(mut vel) = q_player.single_mut() else {
        return;
    };
    vel.x = input.steer.sign() * tunables.player_speed;
}

/// Keeps the ship between the side walls. Velocity is left as steered.
fn clamp_to_arena(tunables: Res<Tunables>, mut q_player: Query<&mut Transform, With<Player>>) {
    let Ok(mut tf) = q_player.single_mut() else {
        return;
    };
    let limit = (tunables.arena_half_extents.x - SHIP_HALF_WIDTH).max(0.0);
    let x = tf.translation.x.clamp(-limit, limit);
    if x != tf.translation.x {
        tf.translation.x = x;
    }
}
