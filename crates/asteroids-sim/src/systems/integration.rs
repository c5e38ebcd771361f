//! Integration phase: every tracked body advances from its final
//! acceleration, then clears it.
//!
//! The player's own thrust is folded in here, right before its step, so
//! it shares the integration pass with the well's pull.

use hecs::{Entity, World};

use asteroids_core::body::Body;
use asteroids_core::enums::EntityKind;
use asteroids_core::error::{check_timestep, SimError};

/// Integrate every entity on the roster, in roster order.
pub fn run(world: &mut World, roster: &[Entity], dt: f64) -> Result<(), SimError> {
    check_timestep(dt)?;

    for &entity in roster {
        let Ok((body, kind)) = world.query_one_mut::<(&mut Body, &EntityKind)>(entity) else {
            continue;
        };
        integrate(body, kind, dt)?;
    }
    Ok(())
}

/// Step a single body, adding self-propulsion first for the player.
///
/// The timestep is checked before thrust is applied so a rejected step
/// leaves the body as it was.
pub fn integrate(body: &mut Body, kind: &EntityKind, dt: f64) -> Result<(), SimError> {
    check_timestep(dt)?;

    if let EntityKind::Player(control) = kind {
        body.apply_force_theta(control.thrust, body.theta);
    }
    body.step(dt)
}
