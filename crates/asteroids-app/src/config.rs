//! Host configuration: an optional TOML file plus env overrides.
//!
//! `ASTEROIDS_CONFIG` names the TOML file. `ASTEROIDS_SEED` and
//! `ASTEROIDS_TICKS` override the seed and tick limit; unparsable values
//! are ignored.

use std::env;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use asteroids_sim::SimConfig;

/// Ticks between locations-table dumps (one second at 50 Hz).
pub const DEFAULT_DISPLAY_INTERVAL_TICKS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Stop after this many ticks. `None` runs until shutdown.
    pub max_ticks: Option<u64>,
    pub display_interval_ticks: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            max_ticks: None,
            display_interval_ticks: DEFAULT_DISPLAY_INTERVAL_TICKS,
        }
    }
}

/// Load configuration from the file named by `ASTEROIDS_CONFIG` (if any),
/// then apply env overrides.
pub fn load() -> anyhow::Result<AppConfig> {
    let config = match env::var("ASTEROIDS_CONFIG") {
        Ok(path) => load_file(Path::new(&path))?,
        Err(_) => AppConfig::default(),
    };
    Ok(apply_overrides(config, |key| env::var(key).ok()))
}

pub fn load_file(path: &Path) -> anyhow::Result<AppConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing config {}", path.display()))
}

pub fn parse(text: &str) -> anyhow::Result<AppConfig> {
    Ok(toml::from_str(text)?)
}

/// Apply `ASTEROIDS_SEED` / `ASTEROIDS_TICKS` using `lookup` for values.
pub fn apply_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    if let Some(seed) = lookup("ASTEROIDS_SEED").and_then(|v| v.parse().ok()) {
        config.sim.seed = seed;
    }
    if let Some(ticks) = lookup("ASTEROIDS_TICKS").and_then(|v| v.parse().ok()) {
        config.max_ticks = Some(ticks);
    }
    config
}
