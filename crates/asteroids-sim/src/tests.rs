//! Tests for the simulation engine, scene setup, input handling, and the
//! tick protocol.

use glam::DVec2;

use asteroids_core::body::Body;
use asteroids_core::commands::ControlInput;
use asteroids_core::constants::*;
use asteroids_core::enums::EntityKind;
use asteroids_core::error::SimError;

use crate::engine::{SimConfig, Simulation};

const EPS: f64 = 1e-9;

fn empty_config() -> SimConfig {
    SimConfig {
        asteroid_count: 0,
        ..Default::default()
    }
}

fn weightless_config() -> SimConfig {
    SimConfig {
        asteroid_count: 0,
        well_strength: 0.0,
        ..Default::default()
    }
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut sim_a = Simulation::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut sim_b = Simulation::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });

    for i in 0..300 {
        if i % 50 == 0 {
            sim_a.apply_input(ControlInput::Fire);
            sim_b.apply_input(ControlInput::Fire);
        }
        let snap_a = sim_a.tick().unwrap();
        let snap_b = sim_b.tick().unwrap();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let sim_a = Simulation::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let sim_b = Simulation::new(SimConfig {
        seed: 222,
        ..Default::default()
    });

    let json_a = serde_json::to_string(&sim_a.snapshot()).unwrap();
    let json_b = serde_json::to_string(&sim_b.snapshot()).unwrap();
    assert_ne!(json_a, json_b, "Different seeds should scatter asteroids differently");
}

// ---- Scene setup ----

#[test]
fn test_scene_layout() {
    let sim = Simulation::new(SimConfig::default());
    let snapshot = sim.snapshot();

    assert_eq!(snapshot.bodies.len(), ASTEROID_COUNT + 1);
    assert_eq!(sim.roster()[0], sim.player());

    let player = &snapshot.bodies[0];
    assert_eq!(player.name, PLAYER_NAME);
    assert!(player.kind.is_player());
    assert_eq!(player.x, WORLD_WIDTH / 2.0 + PLAYER_SPAWN_OFFSET_X);
    assert_eq!(player.y, WORLD_HEIGHT / 2.0);
    assert_eq!((player.vx, player.vy), (0.0, 0.0));

    assert_eq!(sim.well().position, DVec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0));
    assert_eq!(sim.well().strength, WELL_STRENGTH);
    assert_eq!(snapshot.well.strength, WELL_STRENGTH);
}

#[test]
fn test_asteroids_named_in_order_and_in_bounds() {
    let sim = Simulation::new(SimConfig::default());
    let snapshot = sim.snapshot();

    for (i, asteroid) in snapshot.bodies[1..].iter().enumerate() {
        assert_eq!(asteroid.name, ASTEROID_NAMES[i]);
        assert_eq!(asteroid.kind, EntityKind::asteroid());
        assert!((0.0..WORLD_WIDTH).contains(&asteroid.x));
        assert!((0.0..WORLD_HEIGHT).contains(&asteroid.y));
    }
}

#[test]
fn test_asteroid_names_cycle_past_list() {
    let sim = Simulation::new(SimConfig {
        asteroid_count: ASTEROID_NAMES.len() + 2,
        ..Default::default()
    });
    let snapshot = sim.snapshot();
    let last = snapshot.bodies.last().unwrap();
    assert_eq!(last.name, ASTEROID_NAMES[1]);
}

#[test]
fn test_asteroids_start_orbiting() {
    let sim = Simulation::new(SimConfig::default());
    let well = *sim.well();

    for &entity in &sim.roster()[1..] {
        let body = sim.body(entity).unwrap();
        let from_well = body.position - well.position;

        // Kick is perpendicular to the radius, sized by distance.
        assert!(body.velocity.dot(from_well).abs() < 1e-6);
        let expected = from_well.length() / ORBIT_IMPULSE_DIVISOR;
        assert!((body.velocity.length() - expected).abs() < 1e-9);
        // Quarter turn ahead of the radius: perp_dot is positive.
        if from_well.length() > EPS {
            assert!(from_well.perp_dot(body.velocity) > 0.0);
        }
    }
}

// ---- Tick protocol ----

#[test]
fn test_tick_advances_time_and_records_history() {
    let mut sim = Simulation::new(SimConfig::default());
    let snap = sim.tick().unwrap();

    assert_eq!(snap.time.tick, 1);
    assert!((snap.time.elapsed_secs - DT).abs() < EPS);
    assert_eq!(sim.velocity_history().len(), 1);

    let player = sim.body(sim.player()).unwrap();
    assert_eq!(sim.velocity_history().vx[0], player.vx());
    assert_eq!(sim.velocity_history().vy[0], player.vy());
}

#[test]
fn test_velocity_history_capped() {
    let mut sim = Simulation::new(empty_config());
    for _ in 0..(VELOCITY_HISTORY_LEN + 25) {
        sim.tick().unwrap();
    }
    assert_eq!(sim.velocity_history().len(), VELOCITY_HISTORY_LEN);
}

#[test]
fn test_well_pull_applied_before_integration() {
    let mut sim = Simulation::new(empty_config());
    let well = *sim.well();
    let rock = sim.spawn(
        Body::new(well.position.x, well.position.y - 100.0),
        EntityKind::asteroid(),
        "Rock",
    );

    sim.step_all(DT).unwrap();

    // Pull folds into this tick's velocity; position used the old velocity.
    let body = sim.body(rock).unwrap();
    assert!(body.vx().abs() < EPS);
    assert!((body.vy() - WELL_STRENGTH * DT).abs() < EPS);
    assert_eq!(body.y(), well.position.y - 100.0);
    assert_eq!(body.acceleration, DVec2::ZERO);
}

#[test]
fn test_every_body_acceleration_cleared_after_tick() {
    let mut sim = Simulation::new(SimConfig::default());
    sim.set_thrust(PLAYER_THRUST_CONST);
    sim.apply_input(ControlInput::Fire);
    sim.tick().unwrap();

    for &entity in sim.roster() {
        assert_eq!(sim.body(entity).unwrap().acceleration, DVec2::ZERO);
    }
}

#[test]
fn test_invalid_timestep_leaves_scene_untouched() {
    let mut sim = Simulation::new(SimConfig::default());
    sim.set_thrust(PLAYER_THRUST_CONST);
    let before = sim.snapshot();

    assert_eq!(sim.step_all(0.0), Err(SimError::InvalidTimestep { dt: 0.0 }));
    assert!(sim.step_all(f64::NAN).is_err());

    assert_eq!(sim.snapshot(), before);
    for &entity in sim.roster() {
        assert_eq!(sim.body(entity).unwrap().acceleration, DVec2::ZERO);
    }
}

// ---- Player control ----

#[test]
fn test_thrust_folds_into_player_step() {
    let mut sim = Simulation::new(weightless_config());
    sim.apply_input(ControlInput::ThrustForward);
    sim.tick().unwrap();

    let player = sim.body(sim.player()).unwrap();
    assert!((player.vx() - PLAYER_THRUST_CONST * DT).abs() < EPS);
    assert!(player.vy().abs() < EPS);
}

#[test]
fn test_thrust_and_well_combine() {
    let mut sim = Simulation::new(empty_config());
    // Player sits to the right of the well, facing away from it.
    sim.set_thrust(50.0);
    sim.tick().unwrap();

    let player = sim.body(sim.player()).unwrap();
    let expected = (50.0 - WELL_STRENGTH) * DT;
    assert!((player.vx() - expected).abs() < EPS);
}

#[test]
fn test_turn_input_rotates_player() {
    let mut sim = Simulation::new(weightless_config());
    sim.apply_input(ControlInput::TurnRight);
    for _ in 0..TICK_RATE {
        sim.tick().unwrap();
    }
    let player = sim.body(sim.player()).unwrap();
    assert!((player.theta() - PLAYER_TURN_SPEED).abs() < 1e-9);

    sim.apply_input(ControlInput::StopTurning);
    sim.tick().unwrap();
    let after = sim.body(sim.player()).unwrap();
    assert_eq!(after.theta(), player.theta());
}

#[test]
fn test_set_omega_turns_player_at_that_rate() {
    let mut sim = Simulation::new(weightless_config());
    sim.set_omega(1.5);
    sim.tick().unwrap();
    sim.tick().unwrap();

    let player = sim.body(sim.player()).unwrap();
    assert_eq!(player.omega(), 1.5);
    assert!((player.theta() - 2.0 * 1.5 * DT).abs() < EPS);

    // A later write replaces the rate instead of adding to it.
    sim.set_omega(-0.5);
    sim.tick().unwrap();
    let player = sim.body(sim.player()).unwrap();
    assert!((player.theta() - (3.0 - 0.5) * DT).abs() < EPS);
}

#[test]
fn test_reverse_thrust_input() {
    let mut sim = Simulation::new(weightless_config());
    sim.apply_input(ControlInput::ThrustReverse);
    sim.tick().unwrap();
    let player = sim.body(sim.player()).unwrap();
    assert!((player.vx() + PLAYER_THRUST_CONST * DT).abs() < EPS);

    match sim.kind(sim.player()).unwrap() {
        EntityKind::Player(control) => assert_eq!(control.thrust, -PLAYER_THRUST_CONST),
        other => panic!("player has wrong kind: {other:?}"),
    }
}

// ---- Firing ----

#[test]
fn test_fire_spawns_bullet_with_forward_kick() {
    let mut sim = Simulation::new(empty_config());
    {
        let mut player = sim.body_mut(sim.player()).unwrap();
        player.velocity = DVec2::new(3.0, -4.0);
        player.theta = std::f64::consts::FRAC_PI_2;
    }

    let bullet = sim.fire().unwrap();
    assert_eq!(sim.roster().len(), 2);
    assert_eq!(*sim.roster().last().unwrap(), bullet);
    assert_eq!(sim.kind(bullet), Some(EntityKind::Bullet));

    let player = sim.body(sim.player()).unwrap();
    let body = sim.body(bullet).unwrap();
    assert_eq!(body.position, player.position);
    assert!((body.vx() - 3.0).abs() < EPS);
    assert!((body.vy() - (-4.0 + BULLET_IMPULSE)).abs() < EPS);
    assert_eq!(body.theta(), 0.0);

    let snapshot = sim.snapshot();
    assert_eq!(snapshot.bodies.last().unwrap().name, BULLET_NAME);
}

#[test]
fn test_bullets_accumulate_and_feel_the_well() {
    let mut sim = Simulation::new(weightless_config());
    for _ in 0..5 {
        sim.apply_input(ControlInput::Fire);
    }
    assert_eq!(sim.roster().len(), 6);

    let mut sim = Simulation::new(empty_config());
    let bullet = sim.fire().unwrap();
    let start = sim.body(bullet).unwrap();
    sim.tick().unwrap();
    let after = sim.body(bullet).unwrap();

    // Bullet is to the right of the well, so it is pulled back along -x.
    let dv = after.velocity - start.velocity;
    assert!((dv.x + WELL_STRENGTH * DT).abs() < EPS);
    assert!(dv.y.abs() < EPS);
}
