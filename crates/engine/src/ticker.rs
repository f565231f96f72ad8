//! Fixed-rate tick scheduler.
//!
//! The ticker does not own a thread or a clock. Callers pass `now` in, which
//! keeps it deterministic under test and lets a single event loop interleave
//! ticks with input polling.

use std::time::{Duration, Instant};

use crate::types::TICK_NANOS;

/// Default tick period (1/30 s)
pub const TICK_PERIOD: Duration = Duration::from_nanos(TICK_NANOS);

#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
    paused: bool,
}

impl Ticker {
    /// Start ticking; the first tick is due one period after `now`.
    pub fn new(period: Duration, now: Instant) -> Self {
        debug_assert!(!period.is_zero(), "tick period must be positive");
        Self {
            period,
            next_due: now + period,
            paused: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume ticking; the next tick is due one period after `now`.
    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.next_due = now + self.period;
    }

    /// Return true when a tick is due, consuming it.
    ///
    /// At most one tick is reported per call. A caller that fell more than a
    /// period behind is resynchronised to `now` rather than handed a burst of
    /// catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.paused || now < self.next_due {
            return false;
        }

        self.next_due += self.period;
        if self.next_due <= now {
            self.next_due = now + self.period;
        }
        true
    }

    /// Time left until the next tick, or `None` while paused.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if self.paused {
            return None;
        }
        Some(self.next_due.saturating_duration_since(now))
    }
}
