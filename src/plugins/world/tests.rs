use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;

#[test]
fn spawns_side_walls_outside_arena() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    run_system_once(&mut world, super::spawn_walls);

    let half_x = Tunables::default().arena_half_extents.x;
    let walls: Vec<f32> = world
        .query::<(&Name, &RigidBody, &Transform)>()
        .iter(&world)
        .filter(|(n, rb, _)| n.as_str().starts_with("Wall") && matches!(**rb, RigidBody::Static))
        .map(|(_, _, tf)| tf.translation.x)
        .collect();

    assert_eq!(walls.len(), 2);
    assert!(walls.iter().all(|x| x.abs() > half_x));
}
