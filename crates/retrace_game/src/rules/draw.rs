//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

use super::win::compute_winner;
use crate::Board;

/// Checks if every square is occupied.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| !s.is_empty())
}

/// A full board with no completed line.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && compute_winner(board).is_none()
}
