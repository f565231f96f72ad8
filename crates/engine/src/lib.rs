//! Game loop driver.
//!
//! Couples a [`Session`] to a fixed-rate [`Ticker`]. The loop owns all game
//! state; the host only forwards key presses and polls with the current time.
//! Ticking pauses when a game ends and resumes when a key press restarts it.

pub mod ticker;

pub use tui_dino_core as core;
pub use tui_dino_types as types;

pub use ticker::{Ticker, TICK_PERIOD};

use std::time::{Duration, Instant};

use crate::core::{ConfigError, GameSnapshot, PressOutcome, Session, SessionConfig, TickOutcome};
use crate::types::Key;

#[derive(Debug, Clone)]
pub struct GameLoop {
    session: Session,
    ticker: Ticker,
}

impl GameLoop {
    /// Default session ticking at 30 Hz from `now`
    pub fn new(now: Instant) -> Self {
        Self {
            session: Session::new(),
            ticker: Ticker::new(TICK_PERIOD, now),
        }
    }

    pub fn with_config(
        config: SessionConfig,
        period: Duration,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            session: Session::with_config(config)?,
            ticker: Ticker::new(period, now),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_paused(&self) -> bool {
        self.ticker.is_paused()
    }

    /// Forward a key press. A restart resumes ticking from `now`.
    pub fn press(&mut self, key: Key, now: Instant) -> PressOutcome {
        let outcome = self.session.press(key);
        if outcome == PressOutcome::Restarted {
            self.ticker.resume(now);
        }
        outcome
    }

    /// Run one tick if it is due. Returns whether a tick ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }
        if self.session.tick() == TickOutcome::GameOver {
            self.ticker.pause();
            tracing::debug!(tick = self.session.ticks(), "ticker paused");
        }
        true
    }

    /// How long the host may block waiting for input.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_next(now)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.session.snapshot_into(out);
    }
}
