//! Headless host for the asteroids simulation.
//!
//! Drives the engine at a fixed rate on its own thread, feeds it
//! keyboard-style input from stdin, and logs the locations table.

pub mod config;
pub mod display;
pub mod game_loop;
pub mod input;
pub mod state;

pub use asteroids_core as core;
