//! Pattern weights for position evaluation
//!
//! Each scored run length maps to one weight for an open run and one for a
//! semi-open run. Closed runs are worth nothing.

use crate::error::{EngineError, Result};
use crate::rules::bounds::Boundedness;

use super::scan::PatternCount;

/// Score of a position with a five already on the board
pub const WIN_SCORE: i32 = 100_000;

/// Run lengths that contribute to the score
pub const SCORED_LENGTHS: [usize; 3] = [2, 3, 4];

/// Weights for one run length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternWeight {
    pub length: usize,
    pub open: i32,
    pub semi_open: i32,
}

impl PatternWeight {
    pub const fn new(length: usize, open: i32, semi_open: i32) -> Self {
        Self {
            length,
            open,
            semi_open,
        }
    }

    #[inline]
    pub fn value(&self, boundedness: Boundedness) -> i32 {
        match boundedness {
            Boundedness::Open => self.open,
            Boundedness::SemiOpen => self.semi_open,
            Boundedness::Closed => 0,
        }
    }

    /// Weighted sum of a count, saturating instead of overflowing
    pub fn score(&self, count: PatternCount) -> i32 {
        let open = i32::try_from(count.open).unwrap_or(i32::MAX);
        let semi_open = i32::try_from(count.semi_open).unwrap_or(i32::MAX);
        self.open
            .saturating_mul(open)
            .saturating_add(self.semi_open.saturating_mul(semi_open))
    }
}

/// Weight table keyed by run length.
///
/// Built either from [`PatternTable::DEFAULT`] or through
/// [`PatternTable::new`], which enforces one row per scored length and an
/// open weight strictly above the semi-open one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable {
    weights: [PatternWeight; 3],
}

impl PatternTable {
    /// two: (10, 1), three: (100, 10), four: (10_000, 1_000)
    pub const DEFAULT: PatternTable = PatternTable {
        weights: [
            PatternWeight::new(2, 10, 1),
            PatternWeight::new(3, 100, 10),
            PatternWeight::new(4, 10_000, 1_000),
        ],
    };

    pub fn new(mut weights: [PatternWeight; 3]) -> Result<Self> {
        weights.sort_by_key(|w| w.length);
        let lengths = weights.map(|w| w.length);
        if lengths != SCORED_LENGTHS {
            return Err(EngineError::InvalidWeights(format!(
                "expected one row for each length in {SCORED_LENGTHS:?}, got {lengths:?}"
            )));
        }
        if let Some(w) = weights.iter().find(|w| w.open <= w.semi_open) {
            return Err(EngineError::InvalidWeights(format!(
                "length {}: open weight {} must exceed semi-open weight {}",
                w.length, w.open, w.semi_open
            )));
        }
        Ok(Self { weights })
    }

    #[inline]
    pub fn weights(&self) -> &[PatternWeight] {
        &self.weights
    }

    /// Weight of one run; zero for unscored lengths and closed runs
    pub fn value(&self, length: usize, boundedness: Boundedness) -> i32 {
        self.weights
            .iter()
            .find(|w| w.length == length)
            .map_or(0, |w| w.value(boundedness))
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
