//! Core types and definitions for the asteroids simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! the physics body, the gravity well, entity kinds, input commands,
//! snapshots, errors, and constants. It has no dependency on any
//! runtime, renderer, or ECS.

pub mod appearance;
pub mod body;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;
pub mod well;
