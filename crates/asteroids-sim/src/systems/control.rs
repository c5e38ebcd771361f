//! Control system: applies player input to the player's control fields.
//!
//! Writes are immediate and last-write-wins.

use asteroids_core::body::Body;
use asteroids_core::commands::ControlInput;
use asteroids_core::enums::PlayerControl;

/// Apply one input to the player's body and control state.
///
/// `Fire` spawns an entity and is handled by the engine, not here.
pub fn apply(body: &mut Body, control: &mut PlayerControl, input: ControlInput) {
    match input {
        ControlInput::TurnRight => body.omega = control.turn_speed,
        ControlInput::TurnLeft => body.omega = -control.turn_speed,
        ControlInput::StopTurning => body.omega = 0.0,
        ControlInput::ThrustForward => control.thrust = control.thrust_const,
        ControlInput::ThrustReverse => control.thrust = -control.thrust_const,
        ControlInput::StopThrust => control.thrust = 0.0,
        ControlInput::SetThrust { thrust } => control.thrust = thrust,
        ControlInput::SetOmega { omega } => body.omega = omega,
        ControlInput::Fire => {}
    }
}
