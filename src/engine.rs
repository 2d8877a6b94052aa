//! AI engine tying the evaluator, move search and outcome check together
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Direction, Pos, Stone};
//!
//! let engine = AIEngine::new();
//! let mut board = Board::new(8);
//! board
//!     .place_run(Pos::new(3, 1), Direction::HORIZONTAL, 4, Stone::Black)
//!     .unwrap();
//!
//! let result = engine.get_move_with_stats(&mut board, Stone::Black).unwrap();
//! assert_eq!(result.best_move, Some(Pos::new(3, 0)));
//! println!("Time: {}ms over {} candidates", result.time_ms, result.nodes);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::error::Result;
use crate::eval::{evaluate_with, PatternTable};
use crate::rules::{evaluate_outcome, GameOutcome};
use crate::search::search;

/// Result of a move search with timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Evaluation score of the position after the move
    pub score: i32,
    /// Number of candidate positions evaluated
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Engine holding the scoring weights.
///
/// Stateless between calls: every method works on the board it is given.
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    table: PatternTable,
}

impl AIEngine {
    /// Create an engine with the default pattern weights
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom pattern weights
    #[must_use]
    pub fn with_table(table: PatternTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Score the position, positive favoring Black
    #[must_use]
    pub fn evaluate(&self, board: &Board) -> i32 {
        evaluate_with(board, &self.table)
    }

    #[must_use]
    pub fn outcome(&self, board: &Board) -> GameOutcome {
        evaluate_outcome(board)
    }

    /// Best move for `color`, or `None` when the game is over or the board
    /// is empty
    pub fn get_move(&self, board: &mut Board, color: Stone) -> Result<Option<Pos>> {
        Ok(self.get_move_with_stats(board, color)?.best_move)
    }

    /// Best move with search statistics.
    ///
    /// Positions that are already won or drawn get no move.
    pub fn get_move_with_stats(&self, board: &mut Board, color: Stone) -> Result<MoveResult> {
        let start = Instant::now();
        let color = color.require_color()?;

        let outcome = evaluate_outcome(board);
        if outcome.is_terminal() {
            debug!(%outcome, "position is terminal, no move proposed");
            return Ok(MoveResult {
                best_move: None,
                score: self.evaluate(board),
                nodes: 0,
                time_ms: start.elapsed().as_millis() as u64,
            });
        }

        let result = search(board, color, &self.table)?;
        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            ?color,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "engine move"
        );

        Ok(MoveResult {
            best_move: result.best_move,
            score: result.score,
            nodes: result.nodes,
            time_ms,
        })
    }
}
