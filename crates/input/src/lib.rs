//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the logical [`crate::types::Key`] names the
//! game understands. Key presses are discrete: the game latches the latest one
//! per tick, so there is no repeat or release handling here.

pub mod map;

pub use tui_dino_types as types;

pub use map::{map_key, should_quit};
