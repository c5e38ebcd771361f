//! State shared between the input thread, the game loop thread, and main.

use std::sync::{Arc, Mutex};

use asteroids_core::commands::ControlInput;
use asteroids_core::state::SceneSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameLoopCommand {
    /// A control input to apply to the player before the next tick.
    Input(ControlInput),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, updated by the game loop after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<SceneSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
