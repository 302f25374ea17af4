//! End-to-end: hold Space while the clock steps, the ship's pool fills with shells.
//!
//! `TimeUpdateStrategy::ManualDuration` advances `Time<Real>` by a fixed step on every
//! `app.update()`, so the 200ms cannon interval is crossed on a known frame.

mod common;

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use side_shooter::plugins::player::Player;
use side_shooter::plugins::weapons::{Missile, MissileKind, MissilePool, MissileState, Weapon};

const STEP: Duration = Duration::from_millis(50);

fn app_with_keys(keys: &[KeyCode]) -> App {
    let mut app = common::app_headless();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(STEP));

    // No InputPlugin in headless mode, so pressed keys are never cleared.
    let mut buttons = ButtonInput::<KeyCode>::default();
    for &k in keys {
        buttons.press(k);
    }
    app.insert_resource(buttons);
    app
}

fn player_pool(app: &mut App) -> Vec<Entity> {
    app.world_mut()
        .query_filtered::<&MissilePool, With<Player>>()
        .single(app.world())
        .unwrap()
        .iter()
        .collect()
}

#[test]
fn holding_space_fires_player_shells() {
    let mut app = app_with_keys(&[KeyCode::Space]);

    // At most 200ms on the clock: not strictly past the interval yet.
    for _ in 0..4 {
        app.update();
    }
    assert!(player_pool(&mut app).is_empty());

    let armed = app
        .world_mut()
        .query_filtered::<&Weapon, With<Player>>()
        .single(app.world())
        .unwrap()
        .firing;
    assert!(armed);

    // The 250ms frame fires; the next 100ms are still cooling down.
    for _ in 0..3 {
        app.update();
    }

    let pool = player_pool(&mut app);
    assert_eq!(pool.len(), 1);
    assert_eq!(app.world().get::<Missile>(pool[0]).unwrap().kind, MissileKind::Shell);
    assert_eq!(*app.world().get::<MissileState>(pool[0]).unwrap(), MissileState::Active);
}

#[test]
fn released_trigger_fires_nothing() {
    let mut app = app_with_keys(&[]);

    for _ in 0..10 {
        app.update();
    }

    assert!(player_pool(&mut app).is_empty());
}
