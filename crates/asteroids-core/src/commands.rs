//! Control inputs sent from the input collaborator to the simulation.
//!
//! Inputs are applied as soon as they arrive; the next tick sees whatever
//! control state is current. There is no queueing or coalescing.

use serde::{Deserialize, Serialize};

/// All possible player control actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlInput {
    // --- Rotation ---
    /// Spin clockwise at the player's turn speed.
    TurnRight,
    /// Spin anticlockwise at the player's turn speed.
    TurnLeft,
    StopTurning,

    // --- Thrust ---
    ThrustForward,
    ThrustReverse,
    StopThrust,

    // --- Weapons ---
    Fire,

    // --- Raw control writes ---
    SetThrust { thrust: f64 },
    SetOmega { omega: f64 },
}
