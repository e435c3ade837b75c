//! Game status and display order.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::Mark;

/// Status of the active snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// A line is complete.
    #[display("Winner: {_0}")]
    Won(Mark),
    /// Board is full with no completed line.
    #[display("Draw")]
    Draw,
    /// Game continues; holds the mark to move.
    #[display("Current player: {_0}")]
    InProgress(Mark),
}

impl GameStatus {
    /// Returns true once no further moves can be played.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

/// Order in which the move list is shown.
///
/// Presentation state only; it never affects the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoveOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl MoveOrder {
    /// Flips between ascending and descending.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}
