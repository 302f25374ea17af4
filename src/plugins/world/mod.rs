//! World plugin: side walls that keep the ship inside the arena.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};

const WALL_THICKNESS: f32 = 30.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_walls);
}

fn spawn_walls(mut commands: Commands, tunables: Res<Tunables>) {
    let half = tunables.arena_half_extents;
    let wall_color = Color::srgb(0.25, 0.27, 0.33);
    let size = Vec2::new(WALL_THICKNESS, half.y * 2.0);

    let wall_layers = CollisionLayers::new(
        Layer::World,
        [Layer::Player, Layer::Enemy, Layer::PlayerMissile, Layer::EnemyMissile],
    );

    for (name, side) in [("WallLeft", -1.0), ("WallRight", 1.0)] {
        let x = side * (half.x + WALL_THICKNESS * 0.5);
        commands.spawn((
            Name::new(name),
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(x, 0.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

#[cfg(test)]
mod tests;
