use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::core::position::Position;

/// Largest supported side length. Visit orders are `u32`, and 65 535² still fits.
pub const MAX_SIZE: usize = 65_535;

/// Bring a requested side length into `1..=MAX_SIZE`.
#[inline]
pub fn clamp_size(size: usize) -> usize {
    size.clamp(1, MAX_SIZE)
}

/// An N×N grid of visit orders.
///
/// `0` means unvisited; `k > 0` means the square was entered on the k-th move.
/// Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// An all-unvisited `size`×`size` board.
    ///
    /// `size` is capped at [`MAX_SIZE`], so `size * size` cannot overflow.
    pub fn new(size: usize) -> Self {
        let size = size.min(MAX_SIZE);
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of squares (N²).
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.in_bounds(self.size)
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row as usize * self.size + pos.col as usize)
        } else {
            None
        }
    }

    /// Visit order at `pos`, or `None` if `pos` is off the board.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<u32> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// On the board and not yet visited.
    #[inline]
    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos) == Some(0)
    }

    /// Record `pos` as entered on move `move_number`. Off-board positions are ignored.
    pub fn mark(&mut self, pos: Position, move_number: u32) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = move_number;
        }
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        // `max(1)` keeps `chunks` happy on the empty board; there are no cells to yield anyway.
        self.cells.chunks(self.size.max(1))
    }

    /// Square entered on move `move_number`, if any.
    pub fn position_of(&self, move_number: u32) -> Option<Position> {
        if move_number == 0 {
            return None;
        }
        self.cells
            .iter()
            .position(|&v| v == move_number)
            .map(|i| Position::new((i / self.size) as i32, (i % self.size) as i32))
    }

    /// Whether the visit orders are exactly `1..=move_count`, each appearing once.
    pub fn is_consistent_with(&self, move_count: u32) -> bool {
        let mut seen: FxHashSet<u32> = FxHashSet::default();
        for &v in &self.cells {
            if v == 0 {
                continue;
            }
            if v > move_count || !seen.insert(v) {
                return false;
            }
        }
        seen.len() == move_count as usize
    }
}
