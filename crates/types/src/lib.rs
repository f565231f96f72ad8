//! Core types module - shared data structures and constants
//!
//! Pure data types used by the simulation, the input mapper and the terminal
//! renderer. Nothing in here performs I/O.
//!
//! # Play Field
//!
//! The desert is a fixed 80x15 cell field whose last row is the ground line.
//! Offsets are measured in terminal cells from the field's top-left corner;
//! y grows downwards.
//!
//! - **Player**: fixed column 3, ground row 10, 7x4 cells
//! - **Obstacle**: spawns at column 80 on row 10, 6x4 cells
//! - **Apex**: row 0, the top of a jump arc
//!
//! # Timing Constants
//!
//! All timing is counted in ticks:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_HZ` | 30 | Fixed timestep rate |
//! | `TICK_NANOS` | 33_333_333 | Tick period |
//! | `SCORE_INTERVAL_TICKS` | 3 | One point every 3 ticks |
//! | `SPAWN_INTERVAL_TICKS` | 60 | One obstacle every 2 seconds |
//!
//! # Examples
//!
//! ```
//! use tui_dino_types::{Key, Position, Region, Size};
//!
//! let a = Region::new(Position::new(3, 10), Size::new(7, 4));
//! let b = Region::new(Position::new(9, 10), Size::new(6, 4));
//! assert!(a.overlaps(&b));
//!
//! let c = Region::new(Position::new(10, 10), Size::new(6, 4));
//! assert!(!a.overlaps(&c));
//!
//! assert!(Key::Space.is_jump());
//! assert!(!Key::Other('x').is_jump());
//! ```

/// Play field width in cells
pub const FIELD_WIDTH: u16 = 80;

/// Play field height in cells, bottom border row included
pub const FIELD_HEIGHT: u16 = 15;

/// Fixed timestep rate in Hz
pub const TICK_HZ: u32 = 30;

/// Fixed timestep period in nanoseconds (1/30 s)
pub const TICK_NANOS: u64 = 1_000_000_000 / TICK_HZ as u64;

/// Ticks between score increments
pub const SCORE_INTERVAL_TICKS: u32 = 3;

/// Ticks between obstacle spawns
pub const SPAWN_INTERVAL_TICKS: u32 = 60;

/// Fixed player column; the world scrolls instead of the player moving
pub const PLAYER_X: i16 = 3;

/// Row the player stands on while running
pub const GROUND_Y: i16 = 10;

/// Topmost row of a jump arc
pub const APEX_Y: i16 = 0;

/// Column new obstacles appear at
pub const OBSTACLE_SPAWN_X: i16 = 80;

/// Row obstacles travel along
pub const OBSTACLE_Y: i16 = 10;

/// Player sprite footprint
pub const PLAYER_SIZE: Size = Size::new(7, 4);

/// Obstacle sprite footprint
pub const OBSTACLE_SIZE: Size = Size::new(6, 4);


/// Integer cell offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Return this position moved by `(dx, dy)`
    pub const fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Width and height in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned bounding box of a drawn entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    pub origin: Position,
    pub size: Size,
}

impl Region {
    pub const fn new(origin: Position, size: Size) -> Self {
        Self { origin, size }
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.origin.x as i32 + self.size.width as i32
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.origin.y as i32 + self.size.height as i32
    }

    /// Half-open overlap test. Regions that merely touch do not overlap, and
    /// empty regions overlap nothing.
    pub fn overlaps(&self, other: &Region) -> bool {
        if self.size.is_empty() || other.size.is_empty() {
            return false;
        }
        (self.origin.x as i32) < other.right()
            && (other.origin.x as i32) < self.right()
            && (self.origin.y as i32) < other.bottom()
            && (other.origin.y as i32) < self.bottom()
    }
}

/// Logical key name delivered by the input layer
///
/// Only `Up` and `Space` mean anything to the game; every other key is
/// reported as `Other` and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Space,
    Other(char),
}

impl Key {
    /// Both jump keys also restart a finished game.
    pub fn is_jump(self) -> bool {
        matches!(self, Key::Up | Key::Space)
    }

    /// Short name used in log fields
    pub fn name(self) -> &'static str {
        match self {
            Key::Up => "up",
            Key::Space => "space",
            Key::Other(_) => "other",
        }
    }
}
