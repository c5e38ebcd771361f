//! Presentation data derived from entity kind.
//!
//! The core never draws; renderers call these to decide what to draw.

use serde::{Deserialize, Serialize};

use crate::constants::{BULLET_RADIUS, PLAYER_HULL_HEIGHT, PLAYER_HULL_WIDTH};
use crate::enums::{Color, EntityKind, Shape};
use crate::state::WellView;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub shape: Shape,
    pub color: Color,
}

/// How an entity of `kind` looks. `None` for kinds with nothing to draw.
pub fn appearance(kind: &EntityKind) -> Option<Appearance> {
    match kind {
        EntityKind::Base => None,
        EntityKind::Player(_) => Some(Appearance {
            shape: Shape::Triangle {
                height: PLAYER_HULL_HEIGHT,
                width: PLAYER_HULL_WIDTH,
            },
            color: Color::White,
        }),
        EntityKind::Asteroid { radius } => Some(Appearance {
            shape: Shape::Circle { radius: *radius },
            color: Color::Orange,
        }),
        EntityKind::Bullet => Some(Appearance {
            shape: Shape::Disc {
                radius: BULLET_RADIUS,
            },
            color: Color::Red,
        }),
    }
}

/// The well is drawn as a filled disc sized by its strength.
pub fn well_appearance(well: &WellView) -> Appearance {
    Appearance {
        shape: Shape::Disc {
            radius: well.strength,
        },
        color: Color::Yellow,
    }
}
