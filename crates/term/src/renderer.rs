//! Flushes frames to the terminal.
//!
//! A frame is compared row by row with the one before it and only the spans
//! that differ are rewritten. The first frame, and the first one after a
//! resize or [`TerminalRenderer::invalidate`], is painted in full.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
    prev: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        queue!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Undo [`Self::enter`].
    pub fn exit(&mut self) -> Result<()> {
        queue!(
            self.out,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for TerminalRenderer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            prev: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Repaint everything on the next draw (terminal resized or scribbled on).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// On return `fb` holds stale contents the caller redraws into next time,
    /// so no frame is ever cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.prev.take() {
            Some(prev) if prev.same_size(fb) => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                stale.unwrap_or_else(|| FrameBuffer::new(0, 0))
            }
        };
        self.out.write_all(&self.buf)?;
        self.out.flush()?;

        std::mem::swap(&mut prev, fb);
        self.prev = Some(prev);
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

/// Clear the screen and paint every row of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        pen.span(out, 0, y, fb.row(y))?;
    }
    pen.finish(out)
}

/// Paint into `out` only the spans of `next` that differ from `prev`.
///
/// Frames of different sizes are painted in full, without clearing.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for y in 0..next.height() {
        let row = next.row(y);
        if !prev.same_size(next) {
            pen.span(out, 0, y, row)?;
            continue;
        }
        for (start, end) in changed_spans(prev.row(y), row) {
            pen.span(out, start as u16, y, &row[start..end])?;
        }
    }
    pen.finish(out)
}

/// Half-open `[start, end)` ranges where `a` and `b` differ.
fn changed_spans<'a>(a: &'a [Cell], b: &'a [Cell]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        let differs = |i: usize| a.get(i) != b.get(i);
        while x < b.len() && !differs(x) {
            x += 1;
        }
        if x >= b.len() {
            return None;
        }
        let start = x;
        while x < b.len() && differs(x) {
            x += 1;
        }
        Some((start, x))
    })
}

/// Tracks the style last written so runs of equal cells share one escape.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
    painted: bool,
}

impl Pen {
    fn span(&mut self, out: &mut Vec<u8>, x: u16, y: u16, cells: &[Cell]) -> Result<()> {
        if cells.is_empty() {
            return Ok(());
        }
        queue!(out, cursor::MoveTo(x, y))?;
        for cell in cells {
            if self.style != Some(cell.style) {
                queue!(
                    out,
                    SetAttribute(Attribute::Reset),
                    SetForegroundColor(to_color(cell.style.fg))
                )?;
                if cell.style.bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                self.style = Some(cell.style);
            }
            queue!(out, Print(cell.ch))?;
        }
        self.painted = true;
        Ok(())
    }

    /// Leave the terminal in its default style if anything was written.
    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.painted {
            queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn to_color(rgb: Option<Rgb>) -> Color {
    match rgb {
        Some(Rgb { r, g, b }) => Color::Rgb { r, g, b },
        None => Color::Reset,
    }
}
