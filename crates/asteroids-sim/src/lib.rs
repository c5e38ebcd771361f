//! Simulation engine for the asteroids scene.
//!
//! Owns the hecs ECS world, steps every body in lockstep at a fixed
//! timestep, and produces `SceneSnapshot`s for renderers.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use asteroids_core as core;
pub use engine::{SimConfig, Simulation};

#[cfg(test)]
mod tests;
