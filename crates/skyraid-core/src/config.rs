//! Session configuration.
//!
//! Everything a host may want to vary between runs. Flight-model tuning
//! stays in [`crate::constants`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BUILDING_COUNT, DEFAULT_ENEMY_COUNT, DEFAULT_ENEMY_FIRE_CHANCE, FRAME_MS,
};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Clock advance per `tick()`, in milliseconds.
    pub frame_ms: f64,
    /// Enemies spawned at session start.
    pub enemy_count: usize,
    /// Buildings scattered at session start.
    pub building_count: usize,
    /// Chance an eligible enemy fires when the volley window opens.
    pub enemy_fire_chance: f64,
}

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Value out of range
    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            frame_ms: FRAME_MS,
            enemy_count: DEFAULT_ENEMY_COUNT,
            building_count: DEFAULT_BUILDING_COUNT,
            enemy_fire_chance: DEFAULT_ENEMY_FIRE_CHANCE,
        }
    }
}

impl SimConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.frame_ms.is_finite() && self.frame_ms > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "frame_ms must be positive, got {}",
                self.frame_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.enemy_fire_chance) {
            return Err(ConfigError::Invalid(format!(
                "enemy_fire_chance must be within [0, 1], got {}",
                self.enemy_fire_chance
            )));
        }
        Ok(())
    }

    /// Pull out-of-range values back to something the engine can run with.
    /// Non-finite values fall back to their defaults.
    pub fn sanitized(mut self) -> Self {
        if !(self.frame_ms.is_finite() && self.frame_ms > 0.0) {
            self.frame_ms = FRAME_MS;
        }
        self.enemy_fire_chance = if self.enemy_fire_chance.is_nan() {
            DEFAULT_ENEMY_FIRE_CHANCE
        } else {
            self.enemy_fire_chance.clamp(0.0, 1.0)
        };
        self
    }
}
