//! Key mapping from terminal events to logical keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key event to a logical key.
///
/// Keys with no name the game could care about (function keys, arrows other
/// than up, etc.) map to `None`.
pub fn map_key(key: KeyEvent) -> Option<Key> {
    match key.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Other(c)),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
