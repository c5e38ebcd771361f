//! ECS components for hecs entities.
//!
//! Components are plain data. Physics lives on [`crate::body::Body`];
//! game logic lives in systems.

use serde::{Deserialize, Serialize};

/// Display name shown by the locations table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Rolling history of the player's velocity, for charting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VelocityHistory {
    /// Recorded `vx` samples, oldest first.
    pub vx: std::collections::VecDeque<f64>,
    /// Recorded `vy` samples, oldest first.
    pub vy: std::collections::VecDeque<f64>,
}

impl VelocityHistory {
    /// Append a sample, dropping the oldest once `capacity` is exceeded.
    pub fn record(&mut self, vx: f64, vy: f64, capacity: usize) {
        self.vx.push_back(vx);
        self.vy.push_back(vy);
        while self.vx.len() > capacity {
            self.vx.pop_front();
            self.vy.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.vx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vx.is_empty()
    }
}
