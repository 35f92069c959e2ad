use serde::Serialize;

use crate::core::board::{clamp_size, Board};
use crate::core::position::Position;
use crate::rules::movegen::legal_moves;
use crate::search::warnsdorff::{rank_moves, recommend, Hint, MovePossibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TourStatus {
    Playing,
    /// Every square visited.
    Won,
    /// No legal move left before full coverage.
    Stuck,
}

impl TourStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, TourStatus::Playing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The tour already ended.
    NotPlaying,
    /// The target is not among the current legal moves.
    NotLegal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted,
    Rejected(Rejection),
}

impl MoveOutcome {
    #[inline]
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveOutcome::Accepted)
    }
}

/// Snapshot of one knight's tour.
///
/// Only [`TourState::attempt_move`] changes a live state; everything else reads it.
/// `legal_moves` is always the move-generator output for `occupant` against `board`
/// while playing, and empty once the tour is over.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TourState {
    board: Board,
    occupant: Position,
    move_count: u32,
    status: TourStatus,
    legal_moves: Vec<Position>,
}

impl TourState {
    /// A fresh tour on a `size`×`size` board with the knight on `(0,0)`.
    ///
    /// Sizes below 1 are treated as 1 and sizes above [`MAX_SIZE`] as `MAX_SIZE`.
    ///
    /// [`MAX_SIZE`]: crate::core::board::MAX_SIZE
    pub fn initialize(size: usize) -> Self {
        Self::initialize_at(size, Position::ORIGIN)
    }

    /// A fresh tour starting from `start`. An off-board `start` falls back to `(0,0)`.
    pub fn initialize_at(size: usize, start: Position) -> Self {
        let size = clamp_size(size);
        let start = if start.in_bounds(size) {
            start
        } else {
            Position::ORIGIN
        };

        let mut board = Board::new(size);
        board.mark(start, 1);

        let mut state = Self {
            board,
            occupant: start,
            move_count: 1,
            status: TourStatus::Playing,
            legal_moves: Vec::new(),
        };
        state.settle();
        state
    }

    /// Move the knight to `target` if it is one of the current legal moves.
    ///
    /// A rejected move leaves the state untouched.
    pub fn attempt_move(&mut self, target: Position) -> MoveOutcome {
        if self.status != TourStatus::Playing {
            return MoveOutcome::Rejected(Rejection::NotPlaying);
        }
        if !self.legal_moves.contains(&target) {
            return MoveOutcome::Rejected(Rejection::NotLegal);
        }

        self.move_count += 1;
        self.board.mark(target, self.move_count);
        self.occupant = target;
        self.settle();
        MoveOutcome::Accepted
    }

    /// Terminal check: full coverage first, then recompute moves and detect a dead end.
    fn settle(&mut self) {
        if self.move_count as usize == self.board.area() {
            self.status = TourStatus::Won;
            self.legal_moves.clear();
            return;
        }
        self.legal_moves = legal_moves(self.occupant, &self.board);
        if self.legal_moves.is_empty() {
            self.status = TourStatus::Stuck;
        }
    }

    /// Warnsdorff recommendation for the next move, if any move is available.
    pub fn recommend(&self) -> Option<Hint> {
        recommend(&self.legal_moves, &self.board, self.move_count + 1)
    }

    /// Accessibility of every current legal move, in legal-move order.
    pub fn ranked_moves(&self) -> Vec<MovePossibility> {
        rank_moves(&self.legal_moves, &self.board, self.move_count + 1)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn occupant(&self) -> Position {
        self.occupant
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    pub fn status(&self) -> TourStatus {
        self.status
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Position] {
        &self.legal_moves
    }

    /// Share of squares visited, rounded to a whole percent.
    pub fn progress_percent(&self) -> u32 {
        let area = self.board.area() as f64;
        ((self.move_count as f64 / area) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_playing_is_non_terminal() {
        assert!(!TourStatus::Playing.is_terminal());
        assert!(TourStatus::Won.is_terminal());
        assert!(TourStatus::Stuck.is_terminal());
    }

    #[test]
    fn two_by_two_starts_stuck() {
        let s = TourState::initialize(2);
        assert_eq!(s.status(), TourStatus::Stuck);
        assert!(s.legal_moves().is_empty());
        assert_eq!(s.recommend(), None);
    }

    #[test]
    fn zero_size_is_treated_as_one() {
        let s = TourState::initialize(0);
        assert_eq!(s.size(), 1);
        assert_eq!(s.status(), TourStatus::Won);
    }

    #[test]
    fn off_board_start_falls_back_to_origin() {
        let s = TourState::initialize_at(5, Position::new(9, -1));
        assert_eq!(s.occupant(), Position::ORIGIN);
        assert_eq!(s.board().get(Position::ORIGIN), Some(1));
    }

    #[test]
    fn progress_rounds_to_nearest_percent() {
        let s = TourState::initialize(8);
        // 1/64 = 1.5625%
        assert_eq!(s.progress_percent(), 2);
        assert_eq!(TourState::initialize(1).progress_percent(), 100);
        assert_eq!(TourState::initialize(3).progress_percent(), 11);
    }

    #[test]
    fn terminal_state_rejects_moves() {
        let mut s = TourState::initialize(1);
        let before = s.clone();
        assert_eq!(
            s.attempt_move(Position::new(0, 0)),
            MoveOutcome::Rejected(Rejection::NotPlaying)
        );
        assert_eq!(s, before);
    }
}
