//! Weapon diagnostics.
//!
//! The fire system only records that a pool grew past the warning threshold; turning that
//! into a log line is a separate consumer, so tests can observe the message directly.

use bevy::prelude::*;

/// A weapon's pool just grew past `Tunables::pool_warn_threshold`.
///
/// Usually means missiles are never being deactivated.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MissilePoolOverflow {
    pub weapon: Entity,
    pub pool_len: usize,
}

pub fn report_pool_overflow(mut reader: MessageReader<MissilePoolOverflow>) {
    for msg in reader.read() {
        warn!(
            "More missiles than expected: weapon {} holds {} missiles",
            msg.weapon, msg.pool_len
        );
    }
}
