//! Engine configuration.
//!
//! The classic game is a 4x4 grid, a 2048 win tile, a "big merge" cue from
//! 128 upward, fours spawning one time in ten, and two starting tiles.
//! `EngineConfig::default()` is exactly that; the builder methods adjust it.

use serde::{Deserialize, Serialize};

use super::grid::{Tile, MIN_SIZE};
use crate::error::ConfigError;

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Grid side length.
    pub size: usize,

    /// Tile value that wins the game.
    pub win_value: Tile,

    /// Merges producing at least this value are "big".
    pub big_merge_threshold: Tile,

    /// Probability that a spawned tile is a 4 instead of a 2.
    pub four_probability: f64,

    /// Tiles placed by a new game.
    pub starting_tiles: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: 4,
            win_value: 2048,
            big_merge_threshold: 128,
            four_probability: 0.1,
            starting_tiles: 2,
        }
    }
}

impl EngineConfig {
    /// Classic 4x4 configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the winning tile.
    #[must_use]
    pub fn with_win_value(mut self, value: Tile) -> Self {
        self.win_value = value;
        self
    }

    /// Set the big-merge threshold.
    #[must_use]
    pub fn with_big_merge_threshold(mut self, value: Tile) -> Self {
        self.big_merge_threshold = value;
        self
    }

    /// Set the chance of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set the number of starting tiles.
    #[must_use]
    pub fn with_starting_tiles(mut self, count: usize) -> Self {
        self.starting_tiles = count;
        self
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_SIZE {
            return Err(ConfigError::GridTooSmall(self.size));
        }
        for (name, value) in [
            ("win_value", self.win_value),
            ("big_merge_threshold", self.big_merge_threshold),
        ] {
            if value < 4 || !value.is_power_of_two() {
                return Err(ConfigError::NotPowerOfTwo { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::Probability(self.four_probability));
        }
        if self.starting_tiles == 0 || self.starting_tiles > self.size * self.size {
            return Err(ConfigError::StartingTiles {
                tiles: self.starting_tiles,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
