use tracing::{debug, info};

use crate::config::TourConfig;
use crate::core::position::Position;
use crate::search::warnsdorff::Hint;
use crate::state::{MoveOutcome, TourState};

/// Tour controller: owns the live [`TourState`] and the settings it is rebuilt from.
///
/// This is what a front end drives. Illegal input is expected here (clicks on
/// non-adjacent squares, moves after the end), so every operation is a no-op on bad
/// input rather than an error.
#[derive(Clone, Debug)]
pub struct Tour {
    start: Position,
    state: TourState,
}

impl Tour {
    pub fn new(size: usize) -> Self {
        Self::with_start(size, Position::ORIGIN)
    }

    pub fn with_start(size: usize, start: Position) -> Self {
        let state = TourState::initialize_at(size, start);
        Self {
            start: state.occupant(),
            state,
        }
    }

    pub fn from_config(config: &TourConfig) -> Self {
        Self::with_start(config.board_size, config.start)
    }

    #[inline]
    pub fn state(&self) -> &TourState {
        &self.state
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.state.size()
    }

    pub fn attempt_move(&mut self, target: Position) -> MoveOutcome {
        let outcome = self.state.attempt_move(target);
        match outcome {
            MoveOutcome::Accepted => {
                debug!(
                    event = "move_accepted",
                    row = target.row,
                    col = target.col,
                    move_count = self.state.move_count(),
                    legal_moves = self.state.legal_moves().len(),
                );
                if self.state.status().is_terminal() {
                    info!(
                        event = "tour_end",
                        status = ?self.state.status(),
                        size = self.size(),
                        move_count = self.state.move_count(),
                    );
                }
            }
            MoveOutcome::Rejected(reason) => {
                debug!(
                    event = "move_rejected",
                    row = target.row,
                    col = target.col,
                    reason = ?reason,
                );
            }
        }
        outcome
    }

    /// Start over on the same board size and start square.
    pub fn reset(&mut self) {
        self.state = TourState::initialize_at(self.size(), self.start);
        debug!(event = "tour_reset", size = self.size());
    }

    /// Start over on a `size`×`size` board.
    ///
    /// The start square is kept if it still fits, otherwise it falls back to `(0,0)`.
    pub fn resize(&mut self, size: usize) {
        *self = Self::with_start(size, self.start);
        debug!(event = "tour_resize", size = self.size());
    }

    pub fn hint(&self) -> Option<Hint> {
        self.state.recommend()
    }

    /// Follow hints until the tour ends. Returns the number of moves played.
    pub fn play_hints(&mut self) -> u32 {
        let before = self.state.move_count();
        while let Some(hint) = self.hint() {
            if !self.attempt_move(hint.position).is_accepted() {
                break;
            }
        }
        self.state.move_count() - before
    }
}
