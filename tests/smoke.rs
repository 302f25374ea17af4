mod common;

use bevy::prelude::*;
use side_shooter::plugins::enemies::{Enemy, TURRET_COUNT};
use side_shooter::plugins::player::Player;
use side_shooter::plugins::weapons::Weapon;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn in_game_spawns_player_and_turrets_with_weapons() {
    let mut app = common::app_headless();
    app.update();

    let players = app
        .world_mut()
        .query_filtered::<&Weapon, With<Player>>()
        .iter(app.world())
        .count();
    assert_eq!(players, 1);

    let turrets = app
        .world_mut()
        .query_filtered::<&Weapon, With<Enemy>>()
        .iter(app.world())
        .count();
    assert_eq!(turrets, TURRET_COUNT);
}
