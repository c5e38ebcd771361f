//! Newtonian point body: position, velocity, and accumulated acceleration,
//! plus an orientation with angular velocity but no angular acceleration.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{check_timestep, SimError};

/// The unit of simulation.
///
/// Forces accumulate into `acceleration` until the next [`Body::step`],
/// which integrates and then clears it. Impulses go straight into
/// `velocity`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: DVec2,
    /// Heading in radians.
    pub theta: f64,
    pub velocity: DVec2,
    /// Angular velocity in rad/s. Set directly by control input.
    pub omega: f64,
    /// Accumulated acceleration for the current tick.
    pub acceleration: DVec2,
}

impl Body {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            ..Default::default()
        }
    }

    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.velocity = DVec2::new(vx, vy);
        self
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn vx(&self) -> f64 {
        self.velocity.x
    }

    pub fn vy(&self) -> f64 {
        self.velocity.y
    }

    pub fn ax(&self) -> f64 {
        self.acceleration.x
    }

    pub fn ay(&self) -> f64 {
        self.acceleration.y
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Advance kinematics by `dt` using explicit Euler.
    ///
    /// Position is updated from the velocity *before* this step's
    /// acceleration is folded in. Acceleration is zeroed afterwards.
    /// On error the body is left untouched.
    pub fn step(&mut self, dt: f64) -> Result<(), SimError> {
        check_timestep(dt)?;

        self.position += self.velocity * dt;
        self.velocity += self.acceleration * dt;
        self.theta += self.omega * dt;

        self.acceleration = DVec2::ZERO;
        Ok(())
    }

    /// Accumulate a force of `strength` along angle `theta`.
    pub fn apply_force_theta(&mut self, strength: f64, theta: f64) {
        self.acceleration += polar(strength, theta);
    }

    /// Accumulate a force of `strength` along the direction of `(x, y)`.
    ///
    /// Only the direction of `(x, y)` matters: `(1, 1)` and `(2, 2)` are
    /// equivalent. `(0, 0)` resolves to angle 0 via `atan2`.
    pub fn apply_force_xy(&mut self, strength: f64, x: f64, y: f64) {
        self.apply_force_theta(strength, y.atan2(x));
    }

    /// Add an instantaneous velocity change of `strength` along `theta`.
    pub fn apply_impulse_theta(&mut self, strength: f64, theta: f64) {
        self.velocity += polar(strength, theta);
    }

    /// Add an instantaneous velocity change along the direction of `(x, y)`.
    pub fn apply_impulse_xy(&mut self, strength: f64, x: f64, y: f64) {
        self.apply_impulse_theta(strength, y.atan2(x));
    }
}

fn polar(strength: f64, theta: f64) -> DVec2 {
    DVec2::new(strength * theta.cos(), strength * theta.sin())
}
