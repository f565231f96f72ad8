use crate::player::{Player, PlayerState, Sprite};
use crate::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerSnapshot {
    pub state: PlayerState,
    pub position: Position,
    pub sprite: Sprite,
}

impl From<&Player> for PlayerSnapshot {
    fn from(value: &Player) -> Self {
        Self {
            state: value.state(),
            position: value.position(),
            sprite: value.sprite(),
        }
    }
}

impl Default for PlayerSnapshot {
    fn default() -> Self {
        Self::from(&Player::new())
    }
}

/// Read-only view of a session for renderers and tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub ticks: u32,
    pub score: u32,
    /// Live best, updated on every score increment.
    pub high_score: u32,
    /// Best shown on the scoreboard, updated when a game ends.
    pub shown_high_score: u32,
    pub game_over: bool,
    pub restarts: u32,
    pub player: PlayerSnapshot,
    /// Obstacle origins in spawn order.
    pub obstacles: Vec<Position>,
}
