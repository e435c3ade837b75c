//! History and time-travel state machine.
//!
//! A [`Timeline`] owns every snapshot played so far, the step pointer
//! selecting the active one, and the move-list display order. Transitions
//! take `&self` and return the next state; the caller decides when to redraw.

use tracing::{debug, instrument, warn};

use crate::rules::{Win, compute_winner, is_full};
use crate::{GameError, GameErrorKind, GameStatus, Mark, MoveOrder, MoveRejected, Position, Snapshot};

/// Game history plus the step currently displayed.
///
/// Invariants: history is never empty, `step < history.len()`, and the
/// player to move is derived from the parity of `step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    history: Vec<Snapshot>,
    step: usize,
    order: MoveOrder,
}

impl Timeline {
    /// Starts a game at the empty board with ascending move order.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(MoveOrder::Ascending)
    }

    /// Starts a game with the given move-list order.
    #[instrument]
    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            history: vec![Snapshot::initial()],
            step: 0,
            order,
        }
    }

    /// Every recorded snapshot, index 0 being the empty board.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Number of recorded snapshots. Always at least 1.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the active snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Move-list display order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// The active snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.step]
    }

    /// Mark to play next at the active step.
    pub fn to_move(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// Completed line on the active snapshot, evaluated fresh.
    pub fn winner(&self) -> Option<Win> {
        compute_winner(self.current().board())
    }

    /// Status of the active snapshot.
    pub fn status(&self) -> GameStatus {
        let board = self.current().board();
        if let Some(win) = compute_winner(board) {
            GameStatus::Won(win.mark())
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.to_move())
        }
    }

    /// Plays the mover's mark at `pos`, or explains why it cannot be played.
    ///
    /// Any snapshots after the active step are discarded before the new
    /// snapshot is appended.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected::GameOver`] if the active snapshot has a winner
    /// and [`MoveRejected::Occupied`] if `pos` already holds a mark.
    #[instrument(skip(self), fields(step = self.step, mover = %self.to_move()))]
    pub fn try_apply_move(&self, pos: Position) -> Result<Self, MoveRejected> {
        let current = self.current();
        if compute_winner(current.board()).is_some() {
            return Err(MoveRejected::GameOver);
        }
        if !current.board().is_empty(pos) {
            return Err(MoveRejected::Occupied { position: pos });
        }

        let next = current.after_move(pos, self.to_move());
        let mut history = self.history[..=self.step].to_vec();
        history.push(next);
        let step = history.len() - 1;
        debug!(
            new_step = step,
            discarded = self.history.len() - (self.step + 1),
            "Move applied"
        );

        Ok(Self {
            history,
            step,
            order: self.order,
        })
    }

    /// Plays the mover's mark at `pos`.
    ///
    /// Moves on an occupied square or after the game is won are ignored:
    /// the returned state equals `self`.
    #[instrument(skip(self))]
    pub fn apply_move(&self, pos: Position) -> Self {
        self.try_apply_move(pos).unwrap_or_else(|reason| {
            debug!(%reason, ?pos, "Move ignored");
            self.clone()
        })
    }

    /// Plays at a raw board index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidPosition`] for an index outside 0-8.
    /// Illegal moves on valid squares are ignored as in [`Self::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_index(&self, index: usize) -> Result<Self, GameError> {
        let pos = Position::from_index(index).ok_or(GameErrorKind::InvalidPosition(index))?;
        Ok(self.apply_move(pos))
    }

    /// Makes `step` the active snapshot without altering history.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::StepOutOfRange`] if `step` is not a history index.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&self, step: usize) -> Result<Self, GameError> {
        if step >= self.history.len() {
            warn!(step, len = self.history.len(), "Rejected jump outside history");
            return Err(GameErrorKind::StepOutOfRange {
                step,
                len: self.history.len(),
            }
            .into());
        }
        debug!(to = step, "Jumped");
        Ok(Self {
            history: self.history.clone(),
            step,
            order: self.order,
        })
    }

    /// Steps one snapshot back, staying put at the start.
    #[instrument(skip(self))]
    pub fn previous_step(&self) -> Self {
        match self.step.checked_sub(1) {
            Some(step) => self.at_step(step),
            None => self.clone(),
        }
    }

    /// Steps one snapshot forward, staying put at the latest move.
    #[instrument(skip(self))]
    pub fn next_step(&self) -> Self {
        if self.step + 1 < self.history.len() {
            self.at_step(self.step + 1)
        } else {
            self.clone()
        }
    }

    /// Flips the move-list order.
    #[instrument(skip(self), fields(order = %self.order))]
    pub fn toggle_order(&self) -> Self {
        Self {
            history: self.history.clone(),
            step: self.step,
            order: self.order.toggle(),
        }
    }

    fn at_step(&self, step: usize) -> Self {
        Self {
            history: self.history.clone(),
            step,
            order: self.order,
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(indices: &[usize]) -> Timeline {
        indices.iter().fold(Timeline::new(), |t, &i| {
            t.apply_index(i).expect("index in range")
        })
    }

    #[test]
    fn test_initial_state() {
        let t = Timeline::new();
        assert_eq!(t.history_len(), 1);
        assert_eq!(t.step(), 0);
        assert_eq!(t.order(), MoveOrder::Ascending);
        assert_eq!(t.current().last_move(), None);
        assert_eq!(t.status(), GameStatus::InProgress(Mark::X));
    }

    #[test]
    fn test_moves_alternate() {
        let t = play(&[4, 0]);
        assert_eq!(t.history_len(), 3);
        assert_eq!(t.step(), 2);
        let board = t.current().board();
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::O));
        assert_eq!(t.current().last_move(), Some(Position::TopLeft));
        assert_eq!(t.to_move(), Mark::X);
    }

    #[test]
    fn test_earlier_snapshots_unchanged() {
        let t = play(&[4, 0, 8]);
        assert_eq!(t.history()[0].board().occupied(), 0);
        assert_eq!(t.history()[1].board().occupied(), 1);
        assert_eq!(t.history()[2].board().occupied(), 2);
    }

    #[test]
    fn test_occupied_square_ignored() {
        let t = play(&[4]);
        assert_eq!(
            t.try_apply_move(Position::Center),
            Err(MoveRejected::Occupied {
                position: Position::Center
            })
        );
        assert_eq!(t.apply_move(Position::Center), t);
    }

    #[test]
    fn test_move_after_win_ignored() {
        let t = play(&[0, 3, 1, 4, 2]);
        assert_eq!(t.status(), GameStatus::Won(Mark::X));
        assert_eq!(
            t.try_apply_move(Position::BottomRight),
            Err(MoveRejected::GameOver)
        );
        let after = t.apply_move(Position::BottomRight);
        assert_eq!(after.history_len(), t.history_len());
        assert_eq!(after.step(), t.step());
    }

    #[test]
    fn test_jump_then_move_truncates() {
        let t = play(&[0, 1, 2, 3]);
        let t = t.jump_to(1).expect("valid step");
        assert_eq!(t.history_len(), 5);
        assert_eq!(t.to_move(), Mark::O);

        let t = t.apply_move(Position::Center);
        assert_eq!(t.history_len(), 3);
        assert_eq!(t.step(), 2);
        assert_eq!(
            t.current().board().get(Position::Center),
            Square::Occupied(Mark::O)
        );
        assert!(t.current().board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_jump_out_of_range() {
        let t = play(&[0, 1]);
        let err = t.jump_to(3).unwrap_err();
        assert_eq!(err.kind, GameErrorKind::StepOutOfRange { step: 3, len: 3 });
        assert!(t.jump_to(2).is_ok());
    }

    #[test]
    fn test_invalid_index() {
        let err = Timeline::new().apply_index(9).unwrap_err();
        assert_eq!(err.kind, GameErrorKind::InvalidPosition(9));
    }

    #[test]
    fn test_step_back_and_forward() {
        let t = play(&[0, 1]);
        let back = t.previous_step();
        assert_eq!(back.step(), 1);
        assert_eq!(back.previous_step().previous_step().step(), 0);
        assert_eq!(back.next_step().step(), 2);
        assert_eq!(t.next_step().step(), 2);
        assert_eq!(back.history_len(), 3);
    }

    #[test]
    fn test_toggle_order_is_presentation_only() {
        let t = play(&[0, 1]);
        let toggled = t.toggle_order();
        assert_eq!(toggled.order(), MoveOrder::Descending);
        assert_eq!(toggled.history(), t.history());
        assert_eq!(toggled.step(), t.step());
        assert_eq!(toggled.toggle_order(), t);
    }

    #[test]
    fn test_draw_status() {
        // X O X / X O O / O X X
        let t = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(t.winner(), None);
        assert_eq!(t.status(), GameStatus::Draw);
    }
}
