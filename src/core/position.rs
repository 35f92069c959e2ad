use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A square on the board as a `(row, col)` pair.
///
/// Coordinates are signed so that off-board squares (e.g. the target of a knight jump
/// off the edge) are representable; whether a position lies on a given board is a
/// property of the [`Board`](crate::core::board::Board), not of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn in_bounds(self, size: usize) -> bool {
        let n = size as i64;
        (0..n).contains(&(self.row as i64)) && (0..n).contains(&(self.col as i64))
    }
}

impl Add<MoveDelta> for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: MoveDelta) -> Self::Output {
        Position::new(
            self.row.saturating_add(rhs.d_row),
            self.col.saturating_add(rhs.d_col),
        )
    }
}

impl fmt::Display for Position {
    /// 1-based `(row, col)`, the way squares are shown to players.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", i64::from(self.row) + 1, i64::from(self.col) + 1)
    }
}

/// One L-shaped knight displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveDelta {
    pub d_row: i32,
    pub d_col: i32,
}

/// The 8 knight jumps, in the order move generation tries them.
///
/// The order is observable: it fixes the order of legal-move lists and therefore
/// which candidate wins a Warnsdorff tie.
pub const KNIGHT_DELTAS: [MoveDelta; 8] = [
    MoveDelta { d_row: -2, d_col: -1 },
    MoveDelta { d_row: -2, d_col: 1 },
    MoveDelta { d_row: -1, d_col: -2 },
    MoveDelta { d_row: -1, d_col: 2 },
    MoveDelta { d_row: 1, d_col: -2 },
    MoveDelta { d_row: 1, d_col: 2 },
    MoveDelta { d_row: 2, d_col: -1 },
    MoveDelta { d_row: 2, d_col: 1 },
];
