//! Line scanning: maximal runs along every row, column and diagonal
//!
//! One run finder walks a single line and yields each maximal run of
//! stones. The exact-length pattern tally and the five-in-a-row check are
//! both filters over it.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::board::{Board, Direction, Pos, Stone};
use crate::error::Result;
use crate::rules::bounds::{classify, Boundedness};
use crate::rules::win::WIN_LENGTH;

/// A maximal run of same-colored stones along one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub color: Stone,
    /// Last cell of the run in walk order
    pub end: Pos,
    pub length: usize,
    pub direction: Direction,
}

impl Run {
    #[inline]
    pub fn boundedness(&self, board: &Board) -> Boundedness {
        classify(board, self.end, self.length, self.direction)
    }
}

/// Iterator over the maximal runs of one line
pub struct LineRuns<'a> {
    board: &'a Board,
    next: Option<Pos>,
    direction: Direction,
}

impl Iterator for LineRuns<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        loop {
            let pos = self.next?;
            let color = self.board.get(pos);
            self.next = self.board.offset(pos, self.direction, 1);
            if color == Stone::Empty {
                continue;
            }

            let mut end = pos;
            let mut length = 1;
            while let Some(p) = self.next {
                if self.board.get(p) != color {
                    break;
                }
                end = p;
                length += 1;
                self.next = self.board.offset(p, self.direction, 1);
            }

            return Some(Run {
                color,
                end,
                length,
                direction: self.direction,
            });
        }
    }
}

/// Runs on the line that starts at `start` and extends along `direction`
/// while on the board
pub fn runs(board: &Board, start: Pos, direction: Direction) -> LineRuns<'_> {
    LineRuns {
        board,
        next: board.contains(start).then_some(start),
        direction,
    }
}

/// Every line of a `size x size` board exactly once, as `(first cell,
/// direction)`: rows, columns, down-right diagonals, down-left diagonals.
pub fn lines(size: usize) -> impl Iterator<Item = (Pos, Direction)> {
    let last = size.saturating_sub(1);

    let rows = (0..size).map(|row| (Pos::new(row, 0), Direction::HORIZONTAL));
    let cols = (0..size).map(|col| (Pos::new(0, col), Direction::VERTICAL));
    let down_right = (0..size)
        .map(|col| (Pos::new(0, col), Direction::DIAG_DOWN_RIGHT))
        .chain((1..size).map(|row| (Pos::new(row, 0), Direction::DIAG_DOWN_RIGHT)));
    let down_left = (0..size)
        .map(|col| (Pos::new(0, col), Direction::DIAG_DOWN_LEFT))
        .chain((1..size).map(move |row| (Pos::new(row, last), Direction::DIAG_DOWN_LEFT)));

    rows.chain(cols).chain(down_right).chain(down_left)
}

/// Every maximal run on the board
pub fn all_runs(board: &Board) -> impl Iterator<Item = Run> + '_ {
    lines(board.size()).flat_map(move |(start, direction)| runs(board, start, direction))
}

/// Open and semi-open run counts for one color and one run length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PatternCount {
    pub open: u32,
    pub semi_open: u32,
}

impl PatternCount {
    pub const fn new(open: u32, semi_open: u32) -> Self {
        Self { open, semi_open }
    }

    /// Closed runs are not recorded
    #[inline]
    pub fn record(&mut self, boundedness: Boundedness) {
        match boundedness {
            Boundedness::Open => self.open += 1,
            Boundedness::SemiOpen => self.semi_open += 1,
            Boundedness::Closed => {}
        }
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.open + self.semi_open
    }
}

impl Add for PatternCount {
    type Output = PatternCount;

    fn add(self, rhs: PatternCount) -> PatternCount {
        PatternCount::new(self.open + rhs.open, self.semi_open + rhs.semi_open)
    }
}

impl AddAssign for PatternCount {
    fn add_assign(&mut self, rhs: PatternCount) {
        *self = *self + rhs;
    }
}

impl Sum for PatternCount {
    fn sum<I: Iterator<Item = PatternCount>>(iter: I) -> PatternCount {
        iter.fold(PatternCount::default(), Add::add)
    }
}

/// Count maximal runs of `color` with exactly `length` stones on one line.
///
/// A run longer than `length` never counts toward it, so a four is not also
/// reported as a three. `length == 0` matches nothing.
pub fn scan_line(
    board: &Board,
    color: Stone,
    start: Pos,
    length: usize,
    direction: Direction,
) -> Result<PatternCount> {
    let color = color.require_color()?;
    Ok(count_line(board, color, start, length, direction))
}

/// [`scan_line`] summed over every line of the board
pub fn scan_board(board: &Board, color: Stone, length: usize) -> Result<PatternCount> {
    let color = color.require_color()?;
    Ok(lines(board.size())
        .map(|(start, direction)| count_line(board, color, start, length, direction))
        .sum())
}

fn count_line(
    board: &Board,
    color: Stone,
    start: Pos,
    length: usize,
    direction: Direction,
) -> PatternCount {
    let mut count = PatternCount::default();
    if length == 0 {
        return count;
    }
    for run in runs(board, start, direction) {
        if run.color == color && run.length == length {
            count.record(run.boundedness(board));
        }
    }
    count
}

/// Pattern counts for both colors and every length below five, gathered in
/// one pass. Index by run length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternTally {
    pub black: [PatternCount; WIN_LENGTH],
    pub white: [PatternCount; WIN_LENGTH],
}

impl PatternTally {
    /// Counts for `color` at `length`; zero for lengths of five or more
    pub fn count(&self, color: Stone, length: usize) -> Result<PatternCount> {
        let counts = match color.require_color()? {
            Stone::Black => &self.black,
            _ => &self.white,
        };
        Ok(counts.get(length).copied().unwrap_or_default())
    }
}

/// Tally every run shorter than five on the board. Agrees with
/// [`scan_board`] for each color and length.
pub fn pattern_tally(board: &Board) -> PatternTally {
    let mut tally = PatternTally::default();
    for run in all_runs(board) {
        let counts = match run.color {
            Stone::Black => &mut tally.black,
            Stone::White => &mut tally.white,
            Stone::Empty => continue,
        };
        if let Some(count) = counts.get_mut(run.length) {
            count.record(run.boundedness(board));
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn put(board: &mut Board, row: usize, col: usize, dir: Direction, len: usize, stone: Stone) {
        board.place_run(Pos::new(row, col), dir, len, stone).unwrap();
    }

    fn counts(board: &Board, color: Stone, length: usize) -> (u32, u32) {
        let count = scan_board(board, color, length).unwrap();
        (count.open, count.semi_open)
    }

    #[test]
    fn test_line_count_covers_board_once() {
        // n rows + n cols + (2n - 1) diagonals per family
        assert_eq!(lines(8).count(), 8 + 8 + 15 + 15);
        assert_eq!(lines(1).count(), 4);
        assert_eq!(lines(0).count(), 0);

        let mut seen = std::collections::HashSet::new();
        for (start, dir) in lines(8) {
            assert!(seen.insert((start, dir)), "line {start} {dir:?} repeated");
        }
    }

    #[test]
    fn test_every_cell_on_one_line_per_orientation() {
        let board = Board::new(6);
        for dir in crate::board::DIRECTIONS {
            let mut hits = vec![0u32; 36];
            for (start, line_dir) in lines(6).filter(|&(_, d)| d == dir) {
                let mut pos = Some(start);
                while let Some(p) = pos {
                    hits[p.row * 6 + p.col] += 1;
                    pos = board.offset(p, line_dir, 1);
                }
            }
            assert!(hits.iter().all(|&h| h == 1), "{dir:?}: {hits:?}");
        }
    }

    #[test]
    fn test_runs_yield_maximal_runs() {
        let board: Board = "b b . w w w b .\n. . . . . . . .\n. . . . . . . .\n. . . . . . . .\n\
                            . . . . . . . .\n. . . . . . . .\n. . . . . . . .\n. . . . . . . ."
            .parse()
            .unwrap();
        let found: Vec<(Stone, usize, Pos)> = runs(&board, Pos::new(0, 0), Direction::HORIZONTAL)
            .map(|r| (r.color, r.length, r.end))
            .collect();
        assert_eq!(
            found,
            vec![
                (Stone::Black, 2, Pos::new(0, 1)),
                (Stone::White, 3, Pos::new(0, 5)),
                (Stone::Black, 1, Pos::new(0, 6)),
            ]
        );
    }

    #[test]
    fn test_runs_from_off_board_start_is_empty() {
        let board = Board::new(4);
        assert_eq!(runs(&board, Pos::new(4, 0), Direction::HORIZONTAL).count(), 0);
    }

    #[test]
    fn test_vertical_open_three() {
        let mut board = Board::new(8);
        put(&mut board, 1, 5, Direction::VERTICAL, 3, Stone::White);
        assert_eq!(counts(&board, Stone::White, 3), (1, 0));
        assert_eq!(counts(&board, Stone::Black, 3), (0, 0));
    }

    #[test]
    fn test_scan_line_edge_four_is_semi_open() {
        let mut board = Board::new(8);
        put(&mut board, 0, 0, Direction::HORIZONTAL, 4, Stone::Black);
        let count = scan_line(&board, Stone::Black, Pos::new(0, 0), 4, Direction::HORIZONTAL).unwrap();
        assert_eq!(count, PatternCount::new(0, 1));
    }

    #[test]
    fn test_down_left_diagonal_from_top_border() {
        let mut board = Board::new(8);
        put(&mut board, 0, 4, Direction::DIAG_DOWN_LEFT, 3, Stone::Black);
        assert_eq!(counts(&board, Stone::Black, 3), (0, 1));
    }

    #[test]
    fn test_corner_singles_are_not_pairs() {
        let mut board = Board::new(5);
        for (row, col) in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            board.place_stone(Pos::new(row, col), Stone::Black).unwrap();
        }
        assert_eq!(counts(&board, Stone::Black, 2), (0, 0));
    }

    #[test]
    fn test_single_stone_has_no_patterns() {
        let mut board = Board::new(8);
        board.place_stone(Pos::new(3, 3), Stone::Black).unwrap();
        for length in 2..6 {
            assert_eq!(counts(&board, Stone::Black, length), (0, 0), "length {length}");
        }
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut board = Board::new(8);
        board.place_stone(Pos::new(0, 0), Stone::Black).unwrap();
        board.place_stone(Pos::new(0, 2), Stone::Black).unwrap();
        assert_eq!(counts(&board, Stone::Black, 2), (0, 0));
    }

    #[test]
    fn test_exact_five_counts_once() {
        let mut board = Board::new(8);
        put(&mut board, 3, 1, Direction::HORIZONTAL, 5, Stone::Black);
        assert_eq!(counts(&board, Stone::Black, 5), (1, 0));
    }

    #[test]
    fn test_longer_run_not_counted_as_shorter() {
        let mut board = Board::new(8);
        put(&mut board, 3, 2, Direction::HORIZONTAL, 3, Stone::Black);
        board.place_stone(Pos::new(3, 5), Stone::Black).unwrap();
        assert_eq!(counts(&board, Stone::Black, 3), (0, 0));
        assert_eq!(counts(&board, Stone::Black, 4), (1, 0));
    }

    #[test]
    fn test_full_row_of_eight_is_not_a_five() {
        // Only maximal runs of exactly the queried length count
        let mut board = Board::new(8);
        put(&mut board, 0, 0, Direction::HORIZONTAL, 8, Stone::Black);
        assert_eq!(counts(&board, Stone::Black, 5), (0, 0));
        assert_eq!(counts(&board, Stone::Black, 8), (0, 0)); // both ends off board
    }

    #[test]
    fn test_parallel_fours() {
        let mut board = Board::new(8);
        for row in 0..3 {
            put(&mut board, row, 1, Direction::HORIZONTAL, 4, Stone::Black);
        }
        assert_eq!(counts(&board, Stone::Black, 4), (3, 0));
    }

    #[test]
    fn test_down_left_four() {
        let mut board = Board::new(8);
        put(&mut board, 1, 6, Direction::DIAG_DOWN_LEFT, 4, Stone::Black);
        assert_eq!(counts(&board, Stone::Black, 4), (1, 0));
    }

    #[test]
    fn test_fours_in_all_orientations() {
        let mut board = Board::new(8);
        put(&mut board, 3, 1, Direction::HORIZONTAL, 4, Stone::Black);
        put(&mut board, 1, 5, Direction::VERTICAL, 4, Stone::White);
        put(&mut board, 4, 0, Direction::DIAG_DOWN_RIGHT, 4, Stone::Black);
        put(&mut board, 1, 7, Direction::DIAG_DOWN_LEFT, 4, Stone::White);

        // Black's diagonal runs corner to corner of its line and is closed;
        // its row is capped by the white column
        assert_eq!(counts(&board, Stone::Black, 4), (0, 1));
        // White's column is open, its diagonal starts on the right edge
        assert_eq!(counts(&board, Stone::White, 4), (1, 1));
    }

    #[test]
    fn test_alternating_row_has_no_pairs() {
        let mut board = Board::new(8);
        for col in 0..8 {
            let stone = if col % 2 == 0 { Stone::Black } else { Stone::White };
            board.place_stone(Pos::new(0, col), stone).unwrap();
        }
        for color in [Stone::Black, Stone::White] {
            let count = scan_line(&board, color, Pos::new(0, 0), 2, Direction::HORIZONTAL).unwrap();
            assert_eq!(count, PatternCount::default());
        }
    }

    #[test]
    fn test_three_separate_threes_on_one_row() {
        let mut board = Board::new(12);
        put(&mut board, 0, 0, Direction::HORIZONTAL, 3, Stone::Black);
        put(&mut board, 0, 4, Direction::HORIZONTAL, 3, Stone::Black);
        put(&mut board, 0, 8, Direction::HORIZONTAL, 3, Stone::Black);
        let count = scan_line(&board, Stone::Black, Pos::new(0, 0), 3, Direction::HORIZONTAL).unwrap();
        // only the leftmost run touches the edge
        assert_eq!(count, PatternCount::new(2, 1));
    }

    #[test]
    fn test_scan_from_mid_line() {
        let mut board = Board::new(8);
        put(&mut board, 2, 0, Direction::HORIZONTAL, 5, Stone::Black);
        // The walk only sees (2,2)..(2,4)
        let count = scan_line(&board, Stone::Black, Pos::new(2, 2), 3, Direction::HORIZONTAL).unwrap();
        assert_eq!(count, PatternCount::new(1, 0));
        let count = scan_line(&board, Stone::Black, Pos::new(2, 2), 5, Direction::HORIZONTAL).unwrap();
        assert_eq!(count, PatternCount::default());
    }

    #[test]
    fn test_closed_pair_is_not_counted() {
        let board: Board = "........\n........\n........\n..wbbw..\n\
                            ........\n........\n........\n........"
            .parse()
            .unwrap();
        assert_eq!(counts(&board, Stone::Black, 2), (0, 0));
    }

    #[test]
    fn test_fork_counts_both_threes() {
        let mut board = Board::new(8);
        put(&mut board, 4, 2, Direction::HORIZONTAL, 3, Stone::Black);
        put(&mut board, 2, 4, Direction::VERTICAL, 3, Stone::Black);
        assert_eq!(counts(&board, Stone::Black, 3), (2, 0));
    }

    #[test]
    fn test_zero_length_query() {
        let mut board = Board::new(8);
        put(&mut board, 0, 0, Direction::HORIZONTAL, 3, Stone::Black);
        assert_eq!(counts(&board, Stone::Black, 0), (0, 0));
        let count = scan_line(&board, Stone::Black, Pos::new(0, 0), 0, Direction::HORIZONTAL).unwrap();
        assert_eq!(count, PatternCount::default());
    }

    #[test]
    fn test_empty_color_rejected() {
        let board = Board::new(8);
        assert_eq!(
            scan_board(&board, Stone::Empty, 2),
            Err(EngineError::InvalidColor(Stone::Empty))
        );
        assert!(scan_line(&board, Stone::Empty, Pos::new(0, 0), 2, Direction::VERTICAL).is_err());
        assert!(PatternTally::default().count(Stone::Empty, 2).is_err());
    }

    #[test]
    fn test_tally_matches_board_scan() {
        let board: Board = "b b . w . . . .\n. b w w w . . .\n. . b . . b . .\n. w . b b . . .\n\
                            . w . . . . . .\n. w . . b b b b\n. . . . . . . .\n w . . . . . . ."
            .parse()
            .unwrap();
        let tally = pattern_tally(&board);
        for color in [Stone::Black, Stone::White] {
            for length in 1..WIN_LENGTH {
                assert_eq!(
                    tally.count(color, length).unwrap(),
                    scan_board(&board, color, length).unwrap(),
                    "{color:?} length {length}"
                );
            }
            assert_eq!(tally.count(color, WIN_LENGTH).unwrap(), PatternCount::default());
        }
    }
}
