//! Boundedness of a run: how free it is to grow at either end

use crate::board::{Board, Direction, Pos, Stone};

/// Classification of a run by its two flanking cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundedness {
    /// Both flanks are free
    Open,
    /// Exactly one flank is blocked
    SemiOpen,
    /// Both flanks are blocked
    Closed,
}

impl std::fmt::Display for Boundedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Boundedness::Open => "OPEN",
            Boundedness::SemiOpen => "SEMIOPEN",
            Boundedness::Closed => "CLOSED",
        };
        f.write_str(name)
    }
}

/// Classify the run of `length` cells ending at `end` along `dir`.
///
/// The run's color is read from `end`. A flank is blocked when it lies off
/// the board or holds a stone of another color; an empty flank is free.
#[must_use]
pub fn classify(board: &Board, end: Pos, length: usize, dir: Direction) -> Boundedness {
    let own = board.get(end);
    let length = i64::try_from(length).unwrap_or(i64::MAX);

    // start = end - (length - 1) * dir, so the cell before it is end - length * dir
    let before = length
        .checked_neg()
        .and_then(|steps| board.offset(end, dir, steps));
    let after = board.offset(end, dir, 1);

    match (is_blocked(board, before, own), is_blocked(board, after, own)) {
        (false, false) => Boundedness::Open,
        (true, true) => Boundedness::Closed,
        _ => Boundedness::SemiOpen,
    }
}

#[inline]
fn is_blocked(board: &Board, flank: Option<Pos>, own: Stone) -> bool {
    match flank {
        None => true,
        Some(pos) => {
            let stone = board.get(pos);
            stone != Stone::Empty && stone != own
        }
    }
}
