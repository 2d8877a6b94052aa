//! Win and draw detection
//!
//! A player wins with five or more stones in a row (overlines count).
//! A full board with no such run is a draw.

use std::fmt;

use crate::board::{Board, Stone};
use crate::error::Result;
use crate::eval::scan::{all_runs, Run};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Verdict on a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    BlackWon,
    WhiteWon,
    Draw,
    Continue,
}

impl GameOutcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::Continue
    }

    #[inline]
    pub fn winner(self) -> Option<Stone> {
        match self {
            GameOutcome::BlackWon => Some(Stone::Black),
            GameOutcome::WhiteWon => Some(Stone::White),
            GameOutcome::Draw | GameOutcome::Continue => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameOutcome::BlackWon => "Black won",
            GameOutcome::WhiteWon => "White won",
            GameOutcome::Draw => "Draw",
            GameOutcome::Continue => "Continue playing",
        };
        f.write_str(text)
    }
}

/// First run of five or more for `color`, in scan order
pub fn find_five(board: &Board, color: Stone) -> Result<Option<Run>> {
    let color = color.require_color()?;
    Ok(first_five(board, color))
}

/// Check if there's 5+ in a row for the given color
pub fn has_five_in_row(board: &Board, color: Stone) -> Result<bool> {
    Ok(find_five(board, color)?.is_some())
}

fn first_five(board: &Board, color: Stone) -> Option<Run> {
    all_runs(board).find(|run| run.color == color && run.length >= WIN_LENGTH)
}

/// Color with a five on the board. Black is checked first, so a board
/// where both colors have one reports Black.
pub fn winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&color| first_five(board, color).is_some())
}

/// Decide whether the game is over
pub fn evaluate_outcome(board: &Board) -> GameOutcome {
    match winner(board) {
        Some(Stone::Black) => GameOutcome::BlackWon,
        Some(_) => GameOutcome::WhiteWon,
        None if board.is_full() => GameOutcome::Draw,
        None => GameOutcome::Continue,
    }
}
