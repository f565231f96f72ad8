//! Cell grid the view draws into and the renderer diffs.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Foreground color and weight of a cell. Backgrounds are always the
/// terminal's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    /// `None` keeps the terminal's default foreground.
    pub fg: Option<Rgb>,
    pub bold: bool,
}

impl CellStyle {
    pub const PLAIN: CellStyle = CellStyle {
        fg: None,
        bold: false,
    };

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn with_fg(self, fg: Rgb) -> Self {
        Self {
            fg: Some(fg),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        style: CellStyle::PLAIN,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of cells sized to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Change dimensions, keeping the allocation when it is large enough.
    /// Contents are unspecified afterwards; callers blank the grid.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.cells
                .resize(width as usize * height as usize, Cell::BLANK);
        }
    }

    pub fn blank(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Cells of row `y`; empty when out of range.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y).get(x as usize).copied()
    }

    /// Write one cell; writes outside the grid are dropped.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if x < self.width && y < self.height {
            let i = y as usize * self.width as usize + x as usize;
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Write `s` left to right from `(x, y)`, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (cx, ch) in (x..self.width).zip(s.chars()) {
            self.put_char(cx, y, ch, style);
        }
    }

    /// Repeat `ch` across `len` cells of row `y`.
    pub fn hline(&mut self, x: u16, y: u16, len: u16, ch: char, style: CellStyle) {
        for cx in x..x.saturating_add(len).min(self.width) {
            self.put_char(cx, y, ch, style);
        }
    }

    /// Row contents as plain text (styles dropped).
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abc", CellStyle::PLAIN);
        assert_eq!(fb.row_text(0), "  ab");
    }

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(5, 1, 'x', CellStyle::PLAIN);
        fb.put_char(1, 5, 'x', CellStyle::PLAIN);
        assert_eq!(fb, FrameBuffer::new(2, 2));
        assert_eq!(fb.get(2, 0), None);
        assert!(fb.row(2).is_empty());
    }

    #[test]
    fn hline_stops_at_width() {
        let mut fb = FrameBuffer::new(5, 2);
        fb.hline(3, 1, 10, '▀', CellStyle::PLAIN);
        assert_eq!(fb.row_text(1), "   ▀▀");
        assert_eq!(fb.row_text(0), "     ");
    }

    #[test]
    fn resize_then_blank() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(0, 0, 'x', CellStyle::PLAIN);
        fb.resize(3, 4);
        fb.blank();
        assert!(fb.same_size(&FrameBuffer::new(3, 4)));
        assert_eq!(fb, FrameBuffer::new(3, 4));
    }
}
