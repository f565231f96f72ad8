//! Player module - the running/jumping dinosaur
//!
//! The player never moves horizontally. Its vertical motion is a two-state
//! machine with unit velocity: a jump rises 10 rows to the apex, flips, and
//! falls 10 rows back to the ground.

use crate::types::{Position, Region, APEX_Y, GROUND_Y, PLAYER_SIZE, PLAYER_X};

/// Vertical motion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerState {
    Running,
    Jumping,
}

/// Sprite frame the renderer should draw for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Run0,
    Run1,
    Jump,
}

/// Running animation: two frames, three ticks each
pub const RUN_CYCLE: [Sprite; 6] = [
    Sprite::Run0,
    Sprite::Run0,
    Sprite::Run0,
    Sprite::Run1,
    Sprite::Run1,
    Sprite::Run1,
];

/// Jumping animation: a single held frame
pub const JUMP_CYCLE: [Sprite; 1] = [Sprite::Jump];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    state: PlayerState,
    dy: i16,
    position: Position,
    sprite: Sprite,
    /// Index into the cycle of the current state.
    frame: usize,
}

impl Player {
    /// Fresh player standing on the ground
    pub fn new() -> Self {
        Self {
            state: PlayerState::Running,
            dy: 0,
            position: Position::new(PLAYER_X, GROUND_Y),
            sprite: RUN_CYCLE[0],
            frame: 0,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn dy(&self) -> i16 {
        self.dy
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn sprite(&self) -> Sprite {
        self.sprite
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn is_jumping(&self) -> bool {
        self.state == PlayerState::Jumping
    }

    pub fn region(&self) -> Region {
        Region::new(self.position, PLAYER_SIZE)
    }

    /// Start a jump. Only fires from `Running`; returns whether it did.
    pub fn jump(&mut self) -> bool {
        if self.state != PlayerState::Running {
            return false;
        }
        self.enter(PlayerState::Jumping);
        true
    }

    /// Advance one tick.
    pub fn update(&mut self) {
        match self.state {
            PlayerState::Running => {
                self.frame = (self.frame + 1) % RUN_CYCLE.len();
                self.sprite = RUN_CYCLE[self.frame];
            }
            PlayerState::Jumping => {
                if self.dy > 0 && self.position.y == GROUND_Y {
                    self.enter(PlayerState::Running);
                } else if self.dy < 0 && self.position.y == APEX_Y {
                    self.dy = 1;
                }
                self.position = self.position.offset(0, self.dy);
            }
        }

        self.check_invariants();
    }

    /// Switch state and run its entry action.
    fn enter(&mut self, state: PlayerState) {
        self.state = state;
        self.frame = 0;
        match state {
            PlayerState::Running => {
                self.dy = 0;
                self.sprite = RUN_CYCLE[0];
            }
            PlayerState::Jumping => {
                self.dy = -1;
                self.sprite = JUMP_CYCLE[0];
            }
        }
        tracing::trace!(?state, y = self.position.y, "player state change");
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.state == PlayerState::Jumping || self.dy == 0,
            "dy must be zero while running"
        );
        debug_assert!(match self.state {
            PlayerState::Running => self.frame < RUN_CYCLE.len(),
            PlayerState::Jumping => self.frame < JUMP_CYCLE.len(),
        });
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
