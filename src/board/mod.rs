//! Board representation for Gomoku

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

use crate::error::{EngineError, Result};

/// Board size used when the caller does not pick one
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Largest side length accepted by [`Board::try_new`]
pub const MAX_BOARD_SIZE: usize = 1024;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Reject `Empty` where a player color is required
    #[inline]
    pub fn require_color(self) -> Result<Stone> {
        match self {
            Stone::Black | Stone::White => Ok(self),
            Stone::Empty => Err(EngineError::InvalidColor(self)),
        }
    }

    /// Glyph used by `Display` and `Board::render`
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Stone::Empty => '*',
            Stone::Black => 'b',
            Stone::White => 'w',
        }
    }

    /// Inverse of [`Stone::glyph`], also accepting a few common aliases
    pub fn from_glyph(c: char) -> Option<Stone> {
        match c.to_ascii_lowercase() {
            '*' | '.' | '_' => Some(Stone::Empty),
            'b' | 'x' => Some(Stone::Black),
            'w' | 'o' => Some(Stone::White),
            _ => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Row-major, which is also the selector's tie-break order
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Step along one line orientation.
///
/// Components are in {-1, 0, 1} and never both zero. `(1, 1)` and
/// `(-1, -1)` describe the same orientation walked from opposite ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    dy: i8,
    dx: i8,
}

impl Direction {
    /// Horizontal, left to right
    pub const HORIZONTAL: Direction = Direction { dy: 0, dx: 1 };
    /// Vertical, top to bottom
    pub const VERTICAL: Direction = Direction { dy: 1, dx: 0 };
    /// Diagonal toward the bottom-right corner
    pub const DIAG_DOWN_RIGHT: Direction = Direction { dy: 1, dx: 1 };
    /// Diagonal toward the bottom-left corner
    pub const DIAG_DOWN_LEFT: Direction = Direction { dy: 1, dx: -1 };

    pub fn new(dy: i32, dx: i32) -> Result<Self> {
        let unit = |v: i32| (-1..=1).contains(&v);
        if !unit(dy) || !unit(dx) || (dy == 0 && dx == 0) {
            return Err(EngineError::InvalidDirection { dy, dx });
        }
        Ok(Self {
            dy: dy as i8,
            dx: dx as i8,
        })
    }

    #[inline]
    pub fn dy(self) -> i64 {
        i64::from(self.dy)
    }

    #[inline]
    pub fn dx(self) -> i64 {
        i64::from(self.dx)
    }

    /// Same orientation, walked the other way
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            dy: -self.dy,
            dx: -self.dx,
        }
    }
}

/// The four canonical scan orientations
pub const DIRECTIONS: [Direction; 4] = [
    Direction::HORIZONTAL,
    Direction::VERTICAL,
    Direction::DIAG_DOWN_RIGHT,
    Direction::DIAG_DOWN_LEFT,
];
