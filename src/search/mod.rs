//! Search module for Gomoku AI
//!
//! Contains the one-ply greedy search: try every empty cell, score the
//! resulting position, keep the best.

pub mod greedy;

pub use greedy::{search, select_move, SearchResult};
