//! Session configuration.

use crate::types::{SCORE_INTERVAL_TICKS, SPAWN_INTERVAL_TICKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("spawn interval must be at least one tick")]
    ZeroSpawnInterval,
    #[error("score interval must be at least one tick")]
    ZeroScoreInterval,
}

/// Tick intervals that drive a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionConfig {
    /// Ticks between obstacle spawns
    pub spawn_interval: u32,
    /// Ticks between score increments
    pub score_interval: u32,
}

impl SessionConfig {
    pub fn with_spawn_interval(mut self, ticks: u32) -> Self {
        self.spawn_interval = ticks;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.score_interval == 0 {
            return Err(ConfigError::ZeroScoreInterval);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            spawn_interval: SPAWN_INTERVAL_TICKS,
            score_interval: SCORE_INTERVAL_TICKS,
        }
    }
}
