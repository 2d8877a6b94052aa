//! Error type shared by the board utilities and the engine

use thiserror::Error;

use crate::board::Stone;

/// Errors raised by the engine.
///
/// Flank probes that leave the board are never errors: they classify as
/// blocked. Only malformed arguments end up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A color argument was not `Black` or `White`
    #[error("invalid color {0:?}: expected Black or White")]
    InvalidColor(Stone),

    /// A direction outside {-1, 0, 1}² or the zero vector
    #[error("invalid direction ({dy}, {dx})")]
    InvalidDirection { dy: i32, dx: i32 },

    /// A write would land outside the board
    #[error("cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: i64, col: i64, size: usize },

    /// A board size with more cells than the engine will allocate
    #[error("board size {size} exceeds the maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },

    /// Text could not be read as a board
    #[error("cannot parse board at line {line}: {reason}")]
    ParseBoard { line: usize, reason: String },

    /// A pattern weight table breaks the scoring invariants
    #[error("invalid pattern weights: {0}")]
    InvalidWeights(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
