//! Evaluation module for Gomoku positions
//!
//! This module turns line patterns into a score:
//! - [`scan`]: maximal-run finder and exact-length pattern counts
//! - [`patterns`]: weight table per run length and boundedness
//! - [`heuristic`]: the signed position score

pub mod heuristic;
pub mod patterns;
pub mod scan;

pub use heuristic::{evaluate, evaluate_with};
pub use patterns::{PatternTable, PatternWeight, SCORED_LENGTHS, WIN_SCORE};
pub use scan::{
    all_runs, lines, pattern_tally, runs, scan_board, scan_line, PatternCount, PatternTally, Run,
};
