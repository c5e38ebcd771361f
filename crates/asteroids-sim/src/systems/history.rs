//! Velocity history: records the player's velocity once per tick for the
//! external velocity chart.

use hecs::{Entity, World};

use asteroids_core::body::Body;
use asteroids_core::components::VelocityHistory;
use asteroids_core::constants::VELOCITY_HISTORY_LEN;

/// Record the player's current velocity. Called after integration.
pub fn run(world: &World, player: Entity, history: &mut VelocityHistory) {
    if let Ok(body) = world.get::<&Body>(player) {
        history.record(body.vx(), body.vy(), VELOCITY_HISTORY_LEN);
    }
}
