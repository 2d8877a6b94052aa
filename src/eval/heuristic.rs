//! Heuristic evaluation function for Gomoku board positions
//!
//! The score is signed from Black's point of view:
//! - `WIN_SCORE` / `-WIN_SCORE` when a five is already on the board
//! - otherwise Black's weighted twos, threes and fours minus White's

use crate::board::{Board, Stone};
use crate::rules::win::winner;

use super::patterns::{PatternTable, WIN_SCORE};
use super::scan::pattern_tally;

/// Evaluate the board with the default weight table.
///
/// Positive values favor Black, negative values favor White. An empty
/// board, or one holding only isolated stones, scores 0.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    evaluate_with(board, &PatternTable::DEFAULT)
}

/// Evaluate the board with a custom weight table
#[must_use]
pub fn evaluate_with(board: &Board, table: &PatternTable) -> i32 {
    match winner(board) {
        Some(Stone::Black) => return WIN_SCORE,
        Some(Stone::White) => return -WIN_SCORE,
        _ => {}
    }

    let tally = pattern_tally(board);
    table.weights().iter().fold(0i32, |score, w| {
        let black = w.score(tally.black[w.length]);
        let white = w.score(tally.white[w.length]);
        score.saturating_add(black).saturating_sub(white)
    })
}
