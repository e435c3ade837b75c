//! Immutable board snapshots recorded in the game history.

use serde::{Deserialize, Serialize};

use crate::{Board, Mark, Position, Square};

/// A recorded board state and the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Position>,
}

impl Snapshot {
    /// The empty board at the start of every game.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Builds the snapshot that follows this one when `mark` plays `pos`.
    pub(crate) fn after_move(&self, pos: Position, mark: Mark) -> Self {
        Self {
            board: self.board.with(pos, Square::Occupied(mark)),
            last_move: Some(pos),
        }
    }

    /// The board at this point in the game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this snapshot, `None` for the initial board.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}
