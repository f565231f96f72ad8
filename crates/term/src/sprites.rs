//! Sprite art.
//!
//! Every sprite is a fixed grid of rows matching the entity's collision size.
//! Spaces are transparent when drawn.

use crate::core::Sprite;

pub type Art = [&'static str; 4];

pub const DINO_RUN_A: Art = [
    "   █▀██",
    "█▄ ██▀▀",
    "▀████▀ ",
    "  █▀▀  ",
];

pub const DINO_RUN_B: Art = [
    "   █▀██",
    "█▄ ██▀▀",
    "▀████▀ ",
    "  ▀▀█  ",
];

pub const DINO_JUMP: Art = [
    "   █▀██",
    "█▄ ██▀▀",
    "▀████▀ ",
    "  █▀█  ",
];

pub const CACTUS: Art = [
    "▄ ██ ▄",
    "█ ██▄█",
    "▀▀██  ",
    "  ██  ",
];

pub fn player_art(sprite: Sprite) -> &'static Art {
    match sprite {
        Sprite::Run0 => &DINO_RUN_A,
        Sprite::Run1 => &DINO_RUN_B,
        Sprite::Jump => &DINO_JUMP,
    }
}
