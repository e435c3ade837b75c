//! Error types for the game state machine.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::Position;

/// Why a move was not applied.
///
/// [`Timeline::apply_move`](crate::Timeline::apply_move) swallows these;
/// [`Timeline::try_apply_move`](crate::Timeline::try_apply_move) returns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejected {
    /// The active snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,
    /// The target square holds a mark.
    #[display("{position} square is already occupied")]
    Occupied {
        /// The square that was clicked.
        position: Position,
    },
}

/// Specific error conditions for the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// A jump targeted a step past the end of history.
    #[display("step {step} is out of range (history has {len} snapshots)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
    /// A board index outside 0-8.
    #[display("position index {_0} is out of range (must be 0-8)")]
    InvalidPosition(usize),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}
