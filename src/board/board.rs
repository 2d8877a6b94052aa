//! Square board with one bitboard per color

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Direction, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::{EngineError, Result};

/// Game board of `size x size` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Create a board with every cell empty.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`MAX_BOARD_SIZE`]. Use [`Board::try_new`]
    /// for sizes that come from user input.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(board) => board,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create an empty board, rejecting sizes above [`MAX_BOARD_SIZE`]
    pub fn try_new(size: usize) -> Result<Self> {
        if size > MAX_BOARD_SIZE {
            return Err(EngineError::BoardTooLarge {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        let cells = size * size;
        Ok(Self {
            size,
            black: Bitboard::new(cells),
            white: Bitboard::new(cells),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies on the board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Convert signed coordinates, `None` when off the board
    #[inline]
    pub fn pos_at(&self, row: i64, col: i64) -> Option<Pos> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        let pos = Pos::new(row, col);
        self.contains(pos).then_some(pos)
    }

    /// The cell `steps` steps from `pos` along `dir` (negative walks
    /// backwards), or `None` when it falls off the board
    #[inline]
    pub fn offset(&self, pos: Pos, dir: Direction, steps: i64) -> Option<Pos> {
        let row = i64::try_from(pos.row).ok()?;
        let col = i64::try_from(pos.col).ok()?;
        let row = row.checked_add(dir.dy().checked_mul(steps)?)?;
        let col = col.checked_add(dir.dx().checked_mul(steps)?)?;
        self.pos_at(row, col)
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row * self.size + pos.col
    }

    /// Get stone at position; positions off the board read as `Empty`
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if !self.contains(pos) {
            return Stone::Empty;
        }
        let idx = self.index(pos);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Write a stone, replacing whatever was there. `Stone::Empty` clears.
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) -> Result<()> {
        if !self.contains(pos) {
            return Err(self.out_of_bounds(pos.row as i64, pos.col as i64));
        }
        let idx = self.index(pos);
        self.black.clear(idx);
        self.white.clear(idx);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
        Ok(())
    }

    /// Remove a stone; no-op off the board
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        if self.contains(pos) {
            let idx = self.index(pos);
            self.black.clear(idx);
            self.white.clear(idx);
        }
    }

    /// Write `stone` into `length` consecutive cells from `start` along
    /// `dir`. Nothing is written unless every cell is on the board.
    pub fn place_run(
        &mut self,
        start: Pos,
        dir: Direction,
        length: usize,
        stone: Stone,
    ) -> Result<()> {
        let mut cells = Vec::with_capacity(length);
        for step in 0..length {
            let step = i64::try_from(step).unwrap_or(i64::MAX);
            match self.offset(start, dir, step) {
                Some(pos) => cells.push(pos),
                None => {
                    let row = (start.row as i64).saturating_add(dir.dy().saturating_mul(step));
                    let col = (start.col as i64).saturating_add(dir.dx().saturating_mul(step));
                    return Err(self.out_of_bounds(row, col));
                }
            }
        }
        for pos in cells {
            self.place_stone(pos, stone)?;
        }
        Ok(())
    }

    fn out_of_bounds(&self, row: i64, col: i64) -> EngineError {
        EngineError::OutOfBounds {
            row,
            col,
            size: self.size,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size * self.size
    }

    /// Every position, row-major
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }

    /// Empty positions, row-major
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(|&pos| self.is_empty(pos))
    }

    /// Grid with row and column indices, for diagnostics
    pub fn render(&self) -> String {
        let width = self.size.saturating_sub(1).to_string().len();
        let mut out = String::new();
        out.push_str(&" ".repeat(width));
        for col in 0..self.size {
            out.push_str(&format!(" {col:>width$}"));
        }
        out.push('\n');
        for row in 0..self.size {
            out.push_str(&format!("{row:>width$}"));
            for col in 0..self.size {
                let glyph = self.get(Pos::new(row, col)).glyph();
                out.push_str(&format!(" {glyph:>width$}"));
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

/// Bare glyph grid, one row per line. Parses back with `FromStr`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            let line: Vec<String> = (0..self.size)
                .map(|col| self.get(Pos::new(row, col)).glyph().to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (line_no, line) in s.lines().enumerate() {
            let glyphs: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.is_empty() {
                continue;
            }
            let row = glyphs
                .iter()
                .map(|&c| {
                    Stone::from_glyph(c).ok_or_else(|| EngineError::ParseBoard {
                        line: line_no + 1,
                        reason: format!("unknown glyph '{c}'"),
                    })
                })
                .collect::<Result<Vec<Stone>>>()?;
            rows.push((line_no + 1, row));
        }

        let size = rows.len();
        if size == 0 {
            return Err(EngineError::ParseBoard {
                line: 0,
                reason: "no rows".to_string(),
            });
        }

        let mut board = Board::try_new(size)?;
        for (row, (line_no, stones)) in rows.into_iter().enumerate() {
            if stones.len() != size {
                return Err(EngineError::ParseBoard {
                    line: line_no,
                    reason: format!("expected {size} cells, found {}", stones.len()),
                });
            }
            for (col, stone) in stones.into_iter().enumerate() {
                board.place_stone(Pos::new(row, col), stone)?;
            }
        }
        Ok(board)
    }
}
