//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{ASTEROID_RADIUS, PLAYER_THRUST_CONST, PLAYER_TURN_SPEED};

/// What a body is. Physics never looks at this except to fold the
/// player's own thrust into its integration pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    /// A plain body with no presentation.
    Base,
    Player(PlayerControl),
    Asteroid { radius: f64 },
    Bullet,
}

impl EntityKind {
    pub fn player() -> Self {
        EntityKind::Player(PlayerControl::default())
    }

    pub fn asteroid() -> Self {
        EntityKind::Asteroid {
            radius: ASTEROID_RADIUS,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, EntityKind::Player(_))
    }
}

/// Control state written by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerControl {
    /// Current self-propulsion along the heading. Applied every tick.
    pub thrust: f64,
    /// Thrust magnitude used by the forward/reverse inputs.
    pub thrust_const: f64,
    /// Angular speed used by the turn inputs (rad/s).
    pub turn_speed: f64,
}

impl Default for PlayerControl {
    fn default() -> Self {
        Self {
            thrust: 0.0,
            thrust_const: PLAYER_THRUST_CONST,
            turn_speed: PLAYER_TURN_SPEED,
        }
    }
}

/// Simple named colours used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Orange,
    Red,
    Yellow,
}

/// Outline to draw for an entity, in body-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Isosceles ship hull pointing along +x.
    Triangle { height: f64, width: f64 },
    Circle { radius: f64 },
    Disc { radius: f64 },
}
