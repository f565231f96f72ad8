//! Single-slot input latch.
//!
//! Key presses arrive between ticks. The latest one wins and is taken by
//! exactly one tick, whether or not that tick uses it.

use crate::types::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputLatch {
    key: Option<Key>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self { key: None }
    }

    /// Store `key`, replacing anything latched earlier in this tick window.
    pub fn set(&mut self, key: Key) {
        self.key = Some(key);
    }

    pub fn peek(&self) -> Option<Key> {
        self.key
    }

    /// Take the key out, leaving the latch empty.
    pub fn take(&mut self) -> Option<Key> {
        self.key.take()
    }

    pub fn clear(&mut self) {
        self.key = None;
    }
}
