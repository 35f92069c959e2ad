//! One-ply Warnsdorff advisor.
//!
//! Each candidate is scored by its *accessibility*: the number of onward legal moves
//! after hypothetically stepping onto it. The advisor prefers the least accessible
//! candidate. This is a heuristic, not a solver; following it does not guarantee a
//! complete tour.

use serde::Serialize;

use crate::core::board::Board;
use crate::core::position::Position;
use crate::rules::movegen::mobility;

/// A candidate move with its accessibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovePossibility {
    pub position: Position,
    pub accessibility: usize,
}

/// The advisor's recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hint {
    pub position: Position,
    pub accessibility: usize,
}

/// Score every candidate, keeping the input order.
///
/// Each candidate is tried on a private copy of `board` with the candidate marked as
/// move `next_move_number`; `board` itself is never touched.
pub fn rank_moves(
    candidates: &[Position],
    board: &Board,
    next_move_number: u32,
) -> Vec<MovePossibility> {
    let mut scratch = board.clone();
    candidates
        .iter()
        .map(|&position| {
            let prev = scratch.get(position).unwrap_or(0);
            scratch.mark(position, next_move_number);
            let accessibility = mobility(position, &scratch);
            scratch.mark(position, prev);
            MovePossibility {
                position,
                accessibility,
            }
        })
        .collect()
}

/// Warnsdorff's rule: the candidate with the strictly smallest accessibility.
///
/// Ties keep the earliest candidate, so the result is deterministic given the
/// legal-move order. Returns `None` iff `candidates` is empty.
pub fn recommend(candidates: &[Position], board: &Board, next_move_number: u32) -> Option<Hint> {
    let mut best: Option<MovePossibility> = None;
    for m in rank_moves(candidates, board, next_move_number) {
        if best.map_or(true, |b| m.accessibility < b.accessibility) {
            best = Some(m);
        }
    }
    best.map(|m| Hint {
        position: m.position,
        accessibility: m.accessibility,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::movegen::legal_moves;

    #[test]
    fn ranking_keeps_input_order() {
        let mut board = Board::new(8);
        board.mark(Position::ORIGIN, 1);
        let moves = legal_moves(Position::ORIGIN, &board);
        let ranked = rank_moves(&moves, &board, 2);
        let order: Vec<Position> = ranked.iter().map(|m| m.position).collect();
        assert_eq!(order, moves);
    }

    #[test]
    fn scratch_marks_do_not_leak_between_candidates() {
        let mut board = Board::new(8);
        board.mark(Position::ORIGIN, 1);
        let ranked = rank_moves(&[Position::new(1, 2), Position::new(2, 1)], &board, 2);
        assert_eq!(ranked[0].accessibility, 5);
        assert_eq!(ranked[1].accessibility, 5);
    }

    #[test]
    fn tie_goes_to_first_candidate() {
        let mut board = Board::new(8);
        board.mark(Position::ORIGIN, 1);
        let a = recommend(&[Position::new(1, 2), Position::new(2, 1)], &board, 2).unwrap();
        let b = recommend(&[Position::new(2, 1), Position::new(1, 2)], &board, 2).unwrap();
        assert_eq!(a.position, Position::new(1, 2));
        assert_eq!(b.position, Position::new(2, 1));
    }
}
