//! Locations table: a text display of every body, logged through tracing.

use tracing::info;

use asteroids_core::appearance::{appearance, well_appearance, Appearance};
use asteroids_core::state::{Renderer, SceneSnapshot};

/// Logs the well and one row per body every `interval_ticks` ticks.
pub struct LocationsTable {
    interval_ticks: u64,
}

impl LocationsTable {
    pub fn new(interval_ticks: u64) -> Self {
        Self {
            interval_ticks: interval_ticks.max(1),
        }
    }

    /// One labelled entry per drawn item: the well first, then every body
    /// in roster order. Bodies with nothing to draw carry no appearance.
    pub fn entries(snapshot: &SceneSnapshot) -> Vec<(String, Option<Appearance>)> {
        std::iter::once(("well".to_string(), Some(well_appearance(&snapshot.well))))
            .chain(
                snapshot
                    .bodies
                    .iter()
                    .map(|body| (body.to_string(), appearance(&body.kind))),
            )
            .collect()
    }
}

impl Renderer for LocationsTable {
    fn render(&mut self, snapshot: &SceneSnapshot) {
        if !snapshot.time.tick.is_multiple_of(self.interval_ticks) {
            return;
        }

        let tick = snapshot.time.tick;
        for (label, look) in Self::entries(snapshot) {
            match look {
                Some(look) => info!(tick, shape = ?look.shape, color = ?look.color, "{label}"),
                None => info!(tick, "{label}"),
            }
        }
        if let Some(player) = snapshot.player() {
            info!(
                tick,
                vx = player.vx,
                vy = player.vy,
                heading_deg = player.theta.to_degrees().floor(),
                "player"
            );
        }
    }
}
