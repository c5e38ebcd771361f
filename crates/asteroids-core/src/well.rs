//! Gravity well: a fixed force source that pulls bodies toward itself.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::body::Body;

/// A fixed-position attractor. Not a body: it never moves and no force
/// acts on it.
///
/// The pull has constant magnitude `strength` regardless of distance.
/// `strength` doubles as the well's drawn radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Well {
    pub position: DVec2,
    pub strength: f64,
}

impl Well {
    pub fn new(strength: f64, x: f64, y: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            strength,
        }
    }

    /// Accumulate this well's pull on one body.
    pub fn attract(&self, body: &mut Body) {
        let to_well = self.position - body.position;
        body.apply_force_xy(self.strength, to_well.x, to_well.y);
    }

    /// Accumulate this well's pull on every body yielded by `bodies`.
    ///
    /// `_dt` is accepted so the well steps like everything else; the pull
    /// itself does not depend on it.
    pub fn step<'a>(&self, bodies: impl IntoIterator<Item = &'a mut Body>, _dt: f64) {
        for body in bodies {
            self.attract(body);
        }
    }
}
