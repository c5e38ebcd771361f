//! Simulation engine: the single mutation entry point for the scene.
//!
//! `Simulation` owns the hecs ECS world, the roster of tracked bodies,
//! the gravity well, and the sim clock. Completely headless, so every
//! tick is deterministic for a given seed and input sequence.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use asteroids_core::body::Body;
use asteroids_core::commands::ControlInput;
use asteroids_core::components::{Name, VelocityHistory};
use asteroids_core::constants::*;
use asteroids_core::enums::EntityKind;
use asteroids_core::error::{check_timestep, SimError};
use asteroids_core::state::SceneSnapshot;
use asteroids_core::types::SimTime;
use asteroids_core::well::Well;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same scene.
    pub seed: u64,
    pub world_width: f64,
    pub world_height: f64,
    pub asteroid_count: usize,
    pub well_strength: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            asteroid_count: ASTEROID_COUNT,
            well_strength: WELL_STRENGTH,
        }
    }
}

/// The simulation. Owns the world and all sim state.
pub struct Simulation {
    world: World,
    /// Every tracked body in insertion order. The player is first.
    roster: Vec<Entity>,
    player: Entity,
    well: Well,
    time: SimTime,
    velocity_history: VelocityHistory,
}

impl Simulation {
    /// Create a simulation and build its starting scene.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let scene = world_setup::setup_scene(&mut world, &mut rng, &config);

        Self {
            world,
            roster: scene.roster,
            player: scene.player,
            well: scene.well,
            time: SimTime::default(),
            velocity_history: VelocityHistory::default(),
        }
    }

    /// Advance one fixed tick and return the resulting snapshot.
    pub fn tick(&mut self) -> Result<SceneSnapshot, SimError> {
        self.step_all(DT)?;
        self.time.advance();
        systems::history::run(&self.world, self.player, &mut self.velocity_history);
        Ok(self.snapshot())
    }

    /// Run one full tick of the stepping protocol with time delta `dt`.
    ///
    /// 1. Field phase: the well accumulates its pull on every body.
    /// 2. Integration phase: each body (player thrust folded in) steps and
    ///    clears its acceleration.
    ///
    /// `dt` is checked up front so a rejected tick changes nothing.
    pub fn step_all(&mut self, dt: f64) -> Result<(), SimError> {
        check_timestep(dt)?;

        systems::well::run(&mut self.world, &self.well, dt);
        systems::integration::run(&mut self.world, &self.roster, dt)
    }

    /// Fire a bullet from the player's current position and velocity.
    ///
    /// The bullet joins the roster and feels the well from the next tick.
    pub fn fire(&mut self) -> Option<Entity> {
        let shooter = self.body(self.player)?;
        let bullet = world_setup::spawn_bullet(&mut self.world, &mut self.roster, &shooter);
        debug!(
            tick = self.time.tick,
            bodies = self.roster.len(),
            "bullet fired"
        );
        Some(bullet)
    }

    /// Apply a control input immediately. The next tick sees the result.
    pub fn apply_input(&mut self, input: ControlInput) {
        if input == ControlInput::Fire {
            self.fire();
            return;
        }

        let Ok((body, kind)) = self
            .world
            .query_one_mut::<(&mut Body, &mut EntityKind)>(self.player)
        else {
            return;
        };
        if let EntityKind::Player(control) = kind {
            systems::control::apply(body, control, input);
        }
    }

    /// Set the player's thrust directly.
    pub fn set_thrust(&mut self, thrust: f64) {
        self.apply_input(ControlInput::SetThrust { thrust });
    }

    /// Set the player's angular velocity directly.
    pub fn set_omega(&mut self, omega: f64) {
        self.apply_input(ControlInput::SetOmega { omega });
    }

    /// Spawn an extra body into the scene. It is tracked from the next tick.
    pub fn spawn(&mut self, body: Body, kind: EntityKind, name: impl Into<String>) -> Entity {
        world_setup::spawn_body(
            &mut self.world,
            &mut self.roster,
            body,
            kind,
            Name::new(name),
        )
    }

    /// Build a snapshot of the current state without advancing.
    pub fn snapshot(&self) -> SceneSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.roster, &self.well, &self.time)
    }

    /// Copy of an entity's body, if it has one.
    pub fn body(&self, entity: Entity) -> Option<Body> {
        self.world.get::<&Body>(entity).ok().map(|body| *body)
    }

    /// Copy of an entity's kind, if it has one.
    pub fn kind(&self, entity: Entity) -> Option<EntityKind> {
        self.world.get::<&EntityKind>(entity).ok().map(|kind| *kind)
    }

    /// Mutable access to a body, for collaborators and tests that seed state.
    pub fn body_mut(&mut self, entity: Entity) -> Option<hecs::RefMut<'_, Body>> {
        self.world.get::<&mut Body>(entity).ok()
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn roster(&self) -> &[Entity] {
        &self.roster
    }

    pub fn well(&self) -> &Well {
        &self.well
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn velocity_history(&self) -> &VelocityHistory {
        &self.velocity_history
    }
}
