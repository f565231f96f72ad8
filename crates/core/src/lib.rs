//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole runner simulation: the jumping player, the
//! scrolling obstacles, collision, scoring and the session lifecycle. It has
//! **no dependencies** on terminals, timers or input devices:
//!
//! - **Deterministic**: the same key presses on the same ticks replay the same game
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: a host only has to call `tick` at 30 Hz and forward key presses
//!
//! # Module Structure
//!
//! - [`player`]: Running/Jumping state machine and run-cycle animation
//! - [`obstacle`]: Obstacle spawning, scrolling and the per-tick collision walk
//! - [`scoring`]: Tick-based score, high score and the visible scoreboard
//! - [`latch`]: One-tick input latch
//! - [`session`]: Tick ordering, game over and restart
//! - [`snapshot`]: Read-only state for renderers
//! - [`config`]: Validated tick intervals
//!
//! # Game Rules
//!
//! - **Jump**: `up` or `space` starts a 20-tick arc (10 up, 10 down); ignored mid-air
//! - **Obstacles**: one spawns every 60 ticks at column 80 and scrolls 1 column per tick
//! - **Score**: +1 every 3 ticks; the high score survives restarts
//! - **Collision**: any overlap ends the game; a jump key starts the next one
//!
//! # Example
//!
//! ```
//! use tui_dino_core::{Session, TickOutcome};
//! use tui_dino_types::Key;
//!
//! let mut session = Session::new();
//! session.press(Key::Space);
//! assert_eq!(session.tick(), TickOutcome::Running);
//! assert!(session.player().is_jumping());
//!
//! for _ in 0..2 {
//!     session.tick();
//! }
//! assert_eq!(session.score(), 1);
//! ```
//!
//! # Tick Order
//!
//! Each call to [`Session::tick`](session::Session::tick) runs, in order:
//!
//! 1. tick counter and score
//! 2. latched key → jump transition
//! 3. player update
//! 4. obstacle spawn
//! 5. collision test and obstacle advance, per obstacle
//! 6. clear the latch

pub mod config;
pub mod latch;
pub mod obstacle;
pub mod player;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use tui_dino_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, SessionConfig};
pub use latch::InputLatch;
pub use obstacle::{Collision, Obstacle, ObstacleManager};
pub use player::{Player, PlayerState, Sprite, JUMP_CYCLE, RUN_CYCLE};
pub use scoring::Scoreboard;
pub use session::{PressOutcome, Session, TickOutcome};
pub use snapshot::{GameSnapshot, PlayerSnapshot};
