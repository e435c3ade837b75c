//! Read-only projection of a [`Timeline`] for presentation layers.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Mark, MoveOrder, Position, Timeline};

/// Label of the history entry for the empty board.
pub const GAME_START_LABEL: &str = "Go to game start";

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Text shown for the entry, e.g. `X @ (2, 3)`.
    label: String,
}

impl MoveEntry {
    fn new(step: usize, last_move: Option<Position>) -> Self {
        let label = match last_move {
            Some(pos) if step > 0 => {
                format!("{} @ {}", Mark::for_step(step - 1), pos.location())
            }
            _ => GAME_START_LABEL.to_string(),
        };
        Self { step, label }
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Squares of the active snapshot.
    board: Board,
    /// Positions of the completed line, empty when nobody has won.
    winning_line: Vec<Position>,
    /// Move that produced the active snapshot.
    last_move: Option<Position>,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Active step.
    current_step: usize,
    /// Order `moves` is listed in.
    order: MoveOrder,
    /// Status line.
    status: String,
}

impl GameView {
    /// Projects the timeline's active snapshot and move list.
    #[instrument(skip(timeline), fields(step = timeline.step(), order = %timeline.order()))]
    pub fn from_timeline(timeline: &Timeline) -> Self {
        let current = timeline.current();
        let winning_line = timeline
            .winner()
            .map(|win| win.line().to_vec())
            .unwrap_or_default();

        let mut moves: Vec<MoveEntry> = timeline
            .history()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry::new(step, snapshot.last_move()))
            .collect();
        if timeline.order() == MoveOrder::Descending {
            moves.reverse();
        }

        Self {
            board: *current.board(),
            winning_line,
            last_move: current.last_move(),
            moves,
            current_step: timeline.step(),
            order: timeline.order(),
            status: timeline.status().to_string(),
        }
    }

    /// Returns true if `pos` belongs to the winning line.
    pub fn is_winning(&self, pos: Position) -> bool {
        self.winning_line.contains(&pos)
    }

    /// Returns true if `pos` was the most recent move.
    pub fn is_last_move(&self, pos: Position) -> bool {
        self.last_move == Some(pos)
    }

    /// Returns true if `entry` is the active step.
    pub fn is_current(&self, entry: &MoveEntry) -> bool {
        entry.step == self.current_step
    }
}

impl From<&Timeline> for GameView {
    fn from(timeline: &Timeline) -> Self {
        Self::from_timeline(timeline)
    }
}
