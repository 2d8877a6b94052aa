//! Gomoku pattern heuristic engine
//!
//! Rule and heuristic engine for five-in-a-row on an N x N board:
//! - Finds maximal runs of stones along rows, columns and diagonals
//! - Classifies each run as open, semi-open or closed by its flanking cells
//! - Scores a position from the open and semi-open twos, threes and fours
//! - Picks a move by one-ply lookahead over that score
//! - Declares wins (five or more in a row, overlines allowed) and draws
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Run boundedness and win/draw detection
//! - [`eval`]: Line scanning, pattern weights and the position score
//! - [`search`]: One-ply greedy move selection
//! - [`engine`]: Engine facade with configurable weights and statistics
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{evaluate, evaluate_outcome, select_move, Board, Direction, GameOutcome, Pos, Stone};
//!
//! let mut board = Board::new(8);
//! board
//!     .place_run(Pos::new(3, 1), Direction::HORIZONTAL, 4, Stone::Black)
//!     .unwrap();
//!
//! // An open four for Black
//! assert_eq!(evaluate(&board), 10_000);
//!
//! // Black completes the five at the first open end in row-major order
//! let pos = select_move(&mut board).unwrap();
//! assert_eq!(pos, Pos::new(3, 0));
//!
//! board.place_stone(pos, Stone::Black).unwrap();
//! assert_eq!(evaluate_outcome(&board), GameOutcome::BlackWon);
//! println!("{}", board.render());
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{
    Board, Direction, Pos, Stone, DEFAULT_BOARD_SIZE, DIRECTIONS, MAX_BOARD_SIZE,
};
pub use engine::{AIEngine, MoveResult};
pub use error::{EngineError, Result};
pub use eval::{
    evaluate, evaluate_with, pattern_tally, scan_board, scan_line, PatternCount, PatternTable,
    PatternWeight, SCORED_LENGTHS, WIN_SCORE,
};
pub use rules::{classify, evaluate_outcome, Boundedness, GameOutcome, WIN_LENGTH};
pub use search::{search, select_move, SearchResult};
