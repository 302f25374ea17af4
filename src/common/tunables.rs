//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    /// Horizontal speed of the player ship (px/s).
    pub player_speed: f32,
    /// Half width / half height of the playfield, centered on the origin.
    pub arena_half_extents: Vec2,
    /// How far past the arena edge a missile may travel before it is recycled.
    pub recycle_margin: f32,
    /// Pool size past which a weapon is suspected of leaking missiles.
    pub pool_warn_threshold: usize,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 170.0,
            arena_half_extents: Vec2::new(400.0, 300.0),
            recycle_margin: 32.0,
            pool_warn_threshold: 100,
        }
    }
}

impl Tunables {
    /// True while `pos` is inside the arena grown by the recycle margin.
    #[inline]
    pub fn in_play(&self, pos: Vec2) -> bool {
        let half = self.arena_half_extents + Vec2::splat(self.recycle_margin);
        pos.x.abs() <= half.x && pos.y.abs() <= half.y
    }
}
