//! Scene snapshot: the read-only view handed to renderers and displays
//! after each tick.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::types::SimTime;
use crate::well::Well;

/// Complete visible scene after a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: SimTime,
    pub well: WellView,
    /// Every tracked body, in insertion order (player first).
    pub bodies: Vec<BodyView>,
}

impl SceneSnapshot {
    pub fn player(&self) -> Option<&BodyView> {
        self.bodies.iter().find(|b| b.kind.is_player())
    }
}

/// One body as seen by renderers and the locations table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyView {
    pub name: String,
    pub kind: EntityKind,
    pub x: f64,
    pub y: f64,
    pub theta: f64,
    pub vx: f64,
    pub vy: f64,
}

/// Locations table row: `"<name> is at <x>,<y>"` with floored coordinates.
impl fmt::Display for BodyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is at {},{}",
            self.name,
            self.x.floor() as i64,
            self.y.floor() as i64
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellView {
    pub x: f64,
    pub y: f64,
    pub strength: f64,
}

impl From<&Well> for WellView {
    fn from(well: &Well) -> Self {
        Self {
            x: well.position.x,
            y: well.position.y,
            strength: well.strength,
        }
    }
}

/// Capability implemented by anything that presents the scene.
///
/// Renderers only ever see snapshots; they cannot reach the live world.
pub trait Renderer {
    fn render(&mut self, snapshot: &SceneSnapshot);
}
