//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or the engine.

pub mod control;
pub mod history;
pub mod integration;
pub mod snapshot;
pub mod well;
