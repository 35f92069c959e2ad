//! Plain-text rendition of a tour for terminal front ends.

use std::fmt::Write as _;

use crate::core::position::Position;
use crate::rules::movegen::is_legal_move;
use crate::search::warnsdorff::Hint;
use crate::state::{TourState, TourStatus};

/// Draw the board with 1-based labels.
///
/// `N` is the knight, numbers are visit orders, `*` marks legal destinations,
/// `?` the hinted one and `.` any other unvisited square.
pub fn render_board(state: &TourState, hint: Option<&Hint>) -> String {
    let board = state.board();
    let n = board.size();
    let width = n * n;
    let cell_w = width.to_string().len().max(2);

    let mut out = String::new();
    let _ = write!(out, "{:>3} ", "");
    for col in 1..=n {
        let _ = write!(out, "{:>cell_w$} ", col);
    }
    out.pop();
    out.push('\n');

    for (r, row) in board.rows().enumerate() {
        let _ = write!(out, "{:>3} ", r + 1);
        for (c, &v) in row.iter().enumerate() {
            let p = Position::new(r as i32, c as i32);
            let cell = if p == state.occupant() {
                "N".to_string()
            } else if hint.is_some_and(|h| h.position == p) {
                "?".to_string()
            } else if state.legal_moves().contains(&p) {
                "*".to_string()
            } else if v == 0 {
                ".".to_string()
            } else {
                v.to_string()
            };
            let _ = write!(out, "{:>cell_w$} ", cell);
        }
        out.pop();
        out.push('\n');
    }
    out
}

pub fn status_message(state: &TourState) -> String {
    let area = state.board().area();
    match state.status() {
        TourStatus::Won => format!("Tour complete: all {area} squares visited."),
        TourStatus::Stuck => format!(
            "Stuck after {}/{area} squares: no legal moves left.",
            state.move_count()
        ),
        TourStatus::Playing => format!(
            "Move {}/{area} - next moves: {} possible",
            state.move_count(),
            state.legal_moves().len()
        ),
    }
}

/// Why a move to `target` cannot be played from the current state.
pub fn rejection_message(state: &TourState, target: Position) -> String {
    if state.status().is_terminal() {
        "The tour is over. Type `reset` to play again.".to_string()
    } else if is_legal_move(state.occupant(), target, state.board()) {
        format!("{target} is playable.")
    } else if state.board().is_open(target) {
        format!("{target} is not a knight jump from here.")
    } else if state.board().contains(target) {
        format!("{target} has already been visited.")
    } else {
        format!("{target} is off the board.")
    }
}

pub fn hint_message(hint: &Hint) -> String {
    format!(
        "Hint: try {} ({} onward moves)",
        hint.position, hint.accessibility
    )
}

pub fn progress_line(state: &TourState) -> String {
    format!("Progress: {}%", state.progress_percent())
}
