//! One-ply greedy move selection
//!
//! Every empty cell is tried in row-major order: a stone is placed, the
//! position is scored, and the stone is taken back. The first cell with the
//! best score wins ties.

use tracing::{debug, instrument, trace};

use crate::board::{Board, Pos, Stone};
use crate::error::Result;
use crate::eval::{evaluate_with, PatternTable};

/// Result of a move search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score after the best move, or of the current position without one
    pub score: i32,
    /// Number of candidate positions evaluated
    pub nodes: u64,
}

/// A stone placed for evaluation only. Dropping the guard empties the cell
/// again, so the board is restored on every exit path.
struct TentativeStone<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> TentativeStone<'a> {
    fn place(board: &'a mut Board, pos: Pos, color: Stone) -> Result<Self> {
        debug_assert!(board.is_empty(pos), "tentative stone on occupied cell {pos}");
        board.place_stone(pos, color)?;
        Ok(Self { board, pos })
    }

    #[inline]
    fn board(&self) -> &Board {
        &*self.board
    }
}

impl Drop for TentativeStone<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}

/// Best move for Black with the default weights, `None` on an empty or full
/// board. The board is left exactly as it was.
pub fn select_move(board: &mut Board) -> Option<Pos> {
    search(board, Stone::Black, &PatternTable::DEFAULT)
        .ok()
        .and_then(|result| result.best_move)
}

/// One-ply search for `color`.
///
/// Scores are Black-positive, so Black keeps the highest and White the
/// lowest. On an empty board every cell scores alike, so no move is
/// proposed.
#[instrument(level = "debug", skip(board, table), fields(size = board.size()))]
pub fn search(board: &mut Board, color: Stone, table: &PatternTable) -> Result<SearchResult> {
    let color = color.require_color()?;

    if board.is_board_empty() || board.is_full() {
        debug!(
            empty = board.is_board_empty(),
            full = board.is_full(),
            "no candidate moves"
        );
        return Ok(SearchResult {
            best_move: None,
            score: evaluate_with(board, table),
            nodes: 0,
        });
    }

    let candidates: Vec<Pos> = board.empty_cells().collect();
    let mut best: Option<(Pos, i32)> = None;
    let mut nodes = 0u64;

    for pos in candidates {
        let score = {
            let tentative = TentativeStone::place(board, pos, color)?;
            evaluate_with(tentative.board(), table)
        };
        nodes += 1;
        trace!(%pos, score, "candidate");

        let improves = match best {
            None => true,
            Some((_, best_score)) if color == Stone::Black => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((pos, score));
        }
    }

    let result = match best {
        Some((pos, score)) => SearchResult {
            best_move: Some(pos),
            score,
            nodes,
        },
        None => SearchResult {
            best_move: None,
            score: evaluate_with(board, table),
            nodes,
        },
    };
    debug!(best_move = ?result.best_move, score = result.score, nodes, "search finished");
    Ok(result)
}
