//! TUI Dino (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_dino::{core,engine,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use tui_dino_core as core;
pub use tui_dino_engine as engine;
pub use tui_dino_input as input;
pub use tui_dino_term as term;
pub use tui_dino_types as types;
