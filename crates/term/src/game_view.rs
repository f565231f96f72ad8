//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write;

use arrayvec::ArrayString;

use crate::core::{GameSnapshot, Scoreboard};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::sprites::{player_art, Art, CACTUS};
use crate::types::{Position, FIELD_HEIGHT, FIELD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Columns kept free to the right of the scoreboard.
const SCOREBOARD_MARGIN_RIGHT: u16 = 3;

/// Rows between the top of the field and the game over banner.
const BANNER_MARGIN_TOP: u16 = 3;

const GAME_OVER: &str = "GAME OVER";

/// Renders the desert field: ground line, cacti, dinosaur, scoreboard and
/// the game over banner.
pub struct GameView {
    dino: CellStyle,
    cactus: CellStyle,
    ground: CellStyle,
    text: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            dino: CellStyle::PLAIN,
            cactus: CellStyle::PLAIN.with_fg(Rgb::new(80, 170, 90)),
            ground: CellStyle::PLAIN,
            text: CellStyle::PLAIN.bold(),
        }
    }
}

impl GameView {
    /// View that draws everything in the terminal's default colors.
    pub fn monochrome() -> Self {
        Self {
            cactus: CellStyle::PLAIN,
            ..Self::default()
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes. The field is anchored to the top-left corner and
    /// clipped to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.blank();

        // Ground line.
        fb.hline(0, FIELD_HEIGHT - 1, FIELD_WIDTH, '▀', self.ground);

        // Cacti below the dinosaur.
        for &pos in &snap.obstacles {
            self.draw_art(fb, pos, &CACTUS, self.cactus);
        }
        self.draw_art(
            fb,
            snap.player.position,
            player_art(snap.player.sprite),
            self.dino,
        );

        self.draw_scoreboard(fb, snap);

        if snap.game_over {
            self.draw_banner(fb, GAME_OVER);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Blit `art` at `pos`, skipping blanks and anything outside the field.
    fn draw_art(&self, fb: &mut FrameBuffer, pos: Position, art: &Art, style: CellStyle) {
        for (dy, row) in art.iter().enumerate() {
            let y = pos.y as i32 + dy as i32;
            if y < 0 || y >= (FIELD_HEIGHT - 1) as i32 {
                continue;
            }
            for (dx, ch) in row.chars().enumerate() {
                let x = pos.x as i32 + dx as i32;
                if ch == ' ' || x < 0 || x >= FIELD_WIDTH as i32 {
                    continue;
                }
                fb.put_char(x as u16, y as u16, ch, style);
            }
        }
    }

    fn draw_scoreboard(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let board = Scoreboard {
            score: snap.score,
            high_score: snap.shown_high_score,
        };
        // Widest possible text is "HI 4294967295  4294967295".
        let mut text = ArrayString::<32>::new();
        if write!(text, "{board}").is_err() {
            return;
        }
        let w = text.chars().count() as u16;
        let x = FIELD_WIDTH.saturating_sub(SCOREBOARD_MARGIN_RIGHT + w);
        fb.put_str(x, 0, &text, self.text);
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, text: &str) {
        let w = text.chars().count() as u16;
        let x = FIELD_WIDTH.saturating_sub(w) / 2;
        fb.put_str(x, BANNER_MARGIN_TOP, text, self.text);
    }
}
