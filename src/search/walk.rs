//! Hint walks: play the advisor's recommendation until the tour ends.
//!
//! This is the greedy one-ply walk, nothing more. It never backtracks, so a walk that
//! ends [`TourStatus::Stuck`] says nothing about whether a tour exists from that start.

use serde::Serialize;
use tracing::{debug, info};

use crate::core::board::clamp_size;
use crate::core::position::Position;
use crate::state::{TourState, TourStatus};

/// Apply recommendations to `state` until it is no longer playing.
///
/// Runs at most N² − 1 steps, since every accepted move visits a new square.
pub fn follow_hints(mut state: TourState) -> TourState {
    while !state.status().is_terminal() {
        let Some(hint) = state.recommend() else {
            break;
        };
        if !state.attempt_move(hint.position).is_accepted() {
            break;
        }
    }
    state
}

/// Outcome of hint walks from every start square of one board size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    pub size: usize,
    pub starts: usize,
    pub completed: usize,
    /// Shortest walk among the stuck ones, in visited squares.
    pub shortest_stuck: Option<u32>,
    /// Start squares whose walk got stuck, in row-major order.
    pub stuck_starts: Vec<Position>,
}

impl SweepReport {
    pub fn completion_rate(&self) -> f64 {
        if self.starts == 0 {
            0.0
        } else {
            self.completed as f64 / self.starts as f64
        }
    }
}

/// Run [`follow_hints`] from every square of a `size`×`size` board.
pub fn sweep(size: usize) -> SweepReport {
    let size = clamp_size(size);
    let mut report = SweepReport {
        size,
        starts: 0,
        completed: 0,
        shortest_stuck: None,
        stuck_starts: Vec::new(),
    };

    for row in 0..size as i32 {
        for col in 0..size as i32 {
            let start = Position::new(row, col);
            let end = follow_hints(TourState::initialize_at(size, start));
            report.starts += 1;
            match end.status() {
                TourStatus::Won => report.completed += 1,
                _ => {
                    debug!(
                        event = "walk_stuck",
                        size,
                        start = %start,
                        move_count = end.move_count(),
                    );
                    report.stuck_starts.push(start);
                    report.shortest_stuck = Some(
                        report
                            .shortest_stuck
                            .map_or(end.move_count(), |m| m.min(end.move_count())),
                    );
                }
            }
        }
    }

    info!(
        event = "sweep_end",
        size,
        starts = report.starts,
        completed = report.completed,
    );
    report
}
