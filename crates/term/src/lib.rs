//! Terminal "game renderer" module.
//!
//! Draws the runner into a simple framebuffer that is then flushed to the
//! terminal as a diff against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep all sprite art and layout out of the simulation
//! - Only rewrite the cells that changed since the last frame

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sprites;

pub use tui_dino_core as core;
pub use tui_dino_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
