//! Entity spawn factories for setting up the scene.
//!
//! Every factory spawns into the world *and* appends to the roster, so
//! the roster always lists every body in insertion order.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use asteroids_core::body::Body;
use asteroids_core::components::Name;
use asteroids_core::constants::*;
use asteroids_core::enums::EntityKind;
use asteroids_core::well::Well;

use crate::engine::SimConfig;

/// Handles produced by scene setup.
pub struct Scene {
    pub roster: Vec<Entity>,
    pub player: Entity,
    pub well: Well,
}

/// Build the starting scene: the well at the centre, the player just
/// to its right, then a ring of asteroids already orbiting.
pub fn setup_scene(world: &mut World, rng: &mut ChaCha8Rng, config: &SimConfig) -> Scene {
    let centre_x = config.world_width / 2.0;
    let centre_y = config.world_height / 2.0;

    let well = Well::new(config.well_strength, centre_x, centre_y);
    let mut roster = Vec::with_capacity(config.asteroid_count + 1);

    let player = spawn_player(
        world,
        &mut roster,
        centre_x + PLAYER_SPAWN_OFFSET_X,
        centre_y,
    );
    spawn_asteroid_field(world, &mut roster, rng, config, &well);

    debug!(
        asteroids = config.asteroid_count,
        well_x = well.position.x,
        well_y = well.position.y,
        "scene set up"
    );

    Scene {
        roster,
        player,
        well,
    }
}

/// Spawn a body of any kind and append it to the roster.
pub fn spawn_body(
    world: &mut World,
    roster: &mut Vec<Entity>,
    body: Body,
    kind: EntityKind,
    name: Name,
) -> Entity {
    let entity = world.spawn((body, kind, name));
    roster.push(entity);
    entity
}

/// Spawn the player ship at rest, facing along +x.
pub fn spawn_player(world: &mut World, roster: &mut Vec<Entity>, x: f64, y: f64) -> Entity {
    spawn_body(
        world,
        roster,
        Body::new(x, y),
        EntityKind::player(),
        Name::new(PLAYER_NAME),
    )
}

/// Spawn `config.asteroid_count` asteroids at random positions, each kicked
/// perpendicular to the line from the well so it starts orbiting.
pub fn spawn_asteroid_field(
    world: &mut World,
    roster: &mut Vec<Entity>,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    well: &Well,
) {
    for i in 0..config.asteroid_count {
        let x = rng.gen::<f64>() * config.world_width;
        let y = rng.gen::<f64>() * config.world_height;
        let name = ASTEROID_NAMES[i % ASTEROID_NAMES.len()];
        spawn_orbiting_asteroid(world, roster, well, x, y, name);
    }
}

/// Spawn one asteroid at `(x, y)` with a tangential kick of
/// `distance / ORBIT_IMPULSE_DIVISOR`.
pub fn spawn_orbiting_asteroid(
    world: &mut World,
    roster: &mut Vec<Entity>,
    well: &Well,
    x: f64,
    y: f64,
    name: &str,
) -> Entity {
    let mut body = Body::new(x, y);
    let from_well = body.position - well.position;
    let distance = from_well.length();
    let bearing = from_well.y.atan2(from_well.x);
    body.apply_impulse_theta(
        distance / ORBIT_IMPULSE_DIVISOR,
        bearing + std::f64::consts::FRAC_PI_2,
    );

    spawn_body(world, roster, body, EntityKind::asteroid(), Name::new(name))
}

/// Spawn a bullet at the shooter's position and velocity, kicked forward
/// along the shooter's heading.
pub fn spawn_bullet(world: &mut World, roster: &mut Vec<Entity>, shooter: &Body) -> Entity {
    let mut bullet = Body {
        position: shooter.position,
        velocity: shooter.velocity,
        ..Default::default()
    };
    bullet.apply_impulse_theta(BULLET_IMPULSE, shooter.theta);

    spawn_body(
        world,
        roster,
        bullet,
        EntityKind::Bullet,
        Name::new(BULLET_NAME),
    )
}
