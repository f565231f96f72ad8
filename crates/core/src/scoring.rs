//! Scoring module - tick-based score and high score tracking
//!
//! Score accrues purely from survival time. The live high score follows every
//! increment, while the scoreboard only shows a best once a game has ended.

use std::fmt;

/// Visible scoreboard
///
/// `high_score` is the best shown to the player. It is written when a game
/// ends and carried into the next game's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scoreboard {
    pub score: u32,
    pub high_score: u32,
}

impl Scoreboard {
    pub fn new(high_score: u32) -> Self {
        Self {
            score: 0,
            high_score,
        }
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.high_score == 0 {
            write!(f, "{:05}", self.score)
        } else {
            write!(f, "HI {:05}  {:05}", self.high_score, self.score)
        }
    }
}

/// Whether `tick` earns a point
pub fn scores_on(tick: u32, interval: u32) -> bool {
    interval > 0 && tick % interval == 0
}

/// New best after scoring `score`
pub fn updated_high_score(high_score: u32, score: u32) -> u32 {
    high_score.max(score)
}
