//! Snapshot system: reads the world and builds a `SceneSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use asteroids_core::body::Body;
use asteroids_core::components::Name;
use asteroids_core::enums::EntityKind;
use asteroids_core::state::{BodyView, SceneSnapshot, WellView};
use asteroids_core::types::SimTime;
use asteroids_core::well::Well;

/// Build a complete snapshot, bodies in roster order.
pub fn build_snapshot(world: &World, roster: &[Entity], well: &Well, time: &SimTime) -> SceneSnapshot {
    SceneSnapshot {
        time: *time,
        well: WellView::from(well),
        bodies: roster
            .iter()
            .filter_map(|&entity| build_body_view(world, entity))
            .collect(),
    }
}

fn build_body_view(world: &World, entity: Entity) -> Option<BodyView> {
    let mut query = world
        .query_one::<(&Body, &EntityKind, &Name)>(entity)
        .ok()?;
    let (body, kind, name) = query.get()?;

    Some(BodyView {
        name: name.as_str().to_owned(),
        kind: *kind,
        x: body.x(),
        y: body.y(),
        theta: body.theta(),
        vx: body.vx(),
        vy: body.vy(),
    })
}
