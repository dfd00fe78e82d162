//! Engine configuration.
//!
//! Callers configure the engine at startup with an [`EngineConfig`]:
//! - Roster limits (`max_players`, `min_players`)
//! - Presentation pacing for multi-step moves (`step_interval_ms`)
//! - The dice seed
//!
//! ```
//! use trivia_board::core::EngineConfig;
//!
//! let config = EngineConfig::new()
//!     .with_min_players(2)
//!     .with_seed(7);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Hard ceiling on seats at the table.
pub const MAX_PLAYERS: usize = 8;

/// Invalid configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max players out of range (expected: 1-{max}, found: {0})", max = MAX_PLAYERS)]
    MaxPlayersOutOfRange(usize),
    #[error("min players out of range (expected: 1-{max}, found: {found})")]
    MinPlayersOutOfRange { max: usize, found: usize },
    #[error("step interval must be positive")]
    ZeroStepInterval,
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seats available. `add_player` is refused once this many are seated.
    pub max_players: usize,

    /// Players required before `start_game` is accepted.
    ///
    /// The rules only need one; a table front-end typically asks for two.
    pub min_players: usize,

    /// Delay between steps when a roll is paced for display.
    pub step_interval_ms: u64,

    /// Seed for the default dice.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_players: MAX_PLAYERS,
            min_players: 1,
            step_interval_ms: 300,
            seed: 0,
        }
    }
}

impl EngineConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }

    #[must_use]
    pub fn with_step_interval(mut self, interval: Duration) -> Self {
        self.step_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Pacing interval as a `Duration`.
    #[must_use]
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    /// Check limits are consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PLAYERS).contains(&self.max_players) {
            return Err(ConfigError::MaxPlayersOutOfRange(self.max_players));
        }
        if !(1..=self.max_players).contains(&self.min_players) {
            return Err(ConfigError::MinPlayersOutOfRange {
                max: self.max_players,
                found: self.min_players,
            });
        }
        if self.step_interval_ms == 0 {
            return Err(ConfigError::ZeroStepInterval);
        }
        Ok(())
    }
}
