//! Field phase: the gravity well pulls on every tracked body.
//!
//! Only accumulates acceleration. Must run before integration.

use hecs::World;

use asteroids_core::body::Body;
use asteroids_core::well::Well;

/// Apply the well's pull to every body in the world.
///
/// Every entity carrying a `Body` is on the engine's roster, so the
/// world's bodies are exactly the well's targets.
pub fn run(world: &mut World, well: &Well, dt: f64) {
    let bodies = world
        .query_mut::<&mut Body>()
        .into_iter()
        .map(|(_entity, body)| body);
    well.step(bodies, dt);
}
