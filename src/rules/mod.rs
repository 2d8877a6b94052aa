//! Game rules for five-in-a-row
//!
//! This module implements:
//! - Boundedness of runs (open, semi-open, closed)
//! - Win conditions (five or more in a row) and draws

pub mod bounds;
pub mod win;

// Re-exports for convenient access
pub use bounds::{classify, Boundedness};
pub use win::{evaluate_outcome, find_five, has_five_in_row, winner, GameOutcome, WIN_LENGTH};
