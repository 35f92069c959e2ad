use crate::core::board::Board;
use crate::core::position::{Position, KNIGHT_DELTAS};

/// Knight destinations from `from` that are on the board and unvisited.
///
/// Deltas are tried in [`KNIGHT_DELTAS`] order and the result keeps that order.
/// `from` itself may be off the board; the result is then partial or empty.
pub fn legal_moves(from: Position, board: &Board) -> Vec<Position> {
    let mut out: Vec<Position> = Vec::with_capacity(8);
    for delta in KNIGHT_DELTAS {
        let dst = from + delta;
        if board.is_open(dst) {
            out.push(dst);
        }
    }
    out
}

/// Number of legal moves from `from`, without allocating.
pub fn mobility(from: Position, board: &Board) -> usize {
    KNIGHT_DELTAS
        .iter()
        .filter(|&&delta| board.is_open(from + delta))
        .count()
}

/// Whether `to` is a knight jump away from `from` onto an open square.
pub fn is_legal_move(from: Position, to: Position, board: &Board) -> bool {
    board.is_open(to)
        && KNIGHT_DELTAS
            .iter()
            .any(|&delta| from + delta == to)
}
