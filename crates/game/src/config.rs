//! Simulation configuration (world size, seed, tick rate). Loaded from
//! config.ron at startup.

use serde::{Deserialize, Serialize};

/// Persistent sim settings. Loaded from `config.ron` in the current
/// directory (or next to the binary).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// World width in world units.
    #[serde(default = "default_world_size")]
    pub world_width: u32,
    /// World height in world units.
    #[serde(default = "default_world_size")]
    pub world_height: u32,
    /// World seed. Same seed reproduces the same building/terrain layout.
    #[serde(default = "default_seed")]
    pub seed: i64,
    /// Zombies ring-spawned around the player at startup.
    #[serde(default = "default_initial_zombies")]
    pub initial_zombies: usize,
    /// Fixed tick rate for the headless runner.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_hz: f64,
    /// Seconds of sim time the headless runner simulates before exiting.
    #[serde(default = "default_run_seconds")]
    pub run_seconds: f64,
}

fn default_world_size() -> u32 {
    512
}
fn default_seed() -> i64 {
    42
}
fn default_initial_zombies() -> usize {
    10
}
fn default_tick_rate() -> f64 {
    60.0
}
fn default_run_seconds() -> f64 {
    60.0
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: default_world_size(),
            world_height: default_world_size(),
            seed: default_seed(),
            initial_zombies: default_initial_zombies(),
            tick_rate_hz: default_tick_rate(),
            run_seconds: default_run_seconds(),
        }
    }
}

impl SimConfig {
    /// Load config from `config.ron`. If the file is missing or invalid,
    /// returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("config.ron")
}
