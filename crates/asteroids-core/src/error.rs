//! Error kinds raised by the simulation core.

use std::fmt;

/// Errors surfaced by body and simulation stepping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimError {
    /// `step` was called with a zero or NaN time delta.
    InvalidTimestep { dt: f64 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidTimestep { dt } => write!(f, "invalid timestep: dt was {dt}"),
        }
    }
}

impl std::error::Error for SimError {}

/// Reject time deltas that would make a step meaningless.
///
/// Zero and NaN both indicate a caller bug rather than a no-op.
pub fn check_timestep(dt: f64) -> Result<(), SimError> {
    if dt == 0.0 || dt.is_nan() {
        return Err(SimError::InvalidTimestep { dt });
    }
    Ok(())
}
