//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use retrace_game::{GameView, Position, Timeline};
use tracing::{debug, instrument, warn};

use super::input::{digit_position, move_cursor};
use crate::config::Theme;

/// Pane receiving arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running and redraw.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
///
/// `view` is rebuilt from `timeline` after every transition so rendering
/// never reads stale data.
#[derive(Debug, Getters)]
pub struct App {
    timeline: Timeline,
    view: GameView,
    cursor: Position,
    focus: Focus,
    /// Highlighted row of the move list, in display order.
    selected: usize,
    theme: Theme,
}

impl App {
    /// Creates the app around an existing timeline.
    #[instrument(skip(theme))]
    pub fn new(timeline: Timeline, theme: Theme) -> Self {
        let view = GameView::from_timeline(&timeline);
        let mut app = Self {
            timeline,
            view,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            theme,
        };
        app.select_current_step();
        app
    }

    /// Handles one key press. At most one game transition happens per call.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.select_current_step();
            }
            KeyCode::Char('o') => {
                let next = self.timeline.toggle_order();
                self.set_timeline(next);
            }
            KeyCode::Char('u') => {
                let next = self.timeline.previous_step();
                self.set_timeline(next);
            }
            KeyCode::Char('r') => {
                let next = self.timeline.next_step();
                self.set_timeline(next);
            }
            code => {
                if let Some(pos) = digit_position(code) {
                    self.cursor = pos;
                    self.play(pos);
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(code),
                        Focus::Moves => self.handle_moves_key(code),
                    }
                }
            }
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            _ => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let rows = self.view.moves().len();
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(rows - 1),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = rows - 1,
            KeyCode::Enter => {
                if let Some(step) = self.view.moves().get(self.selected).map(|m| *m.step()) {
                    self.jump(step);
                }
            }
            KeyCode::Left => {
                let next = self.timeline.previous_step();
                self.set_timeline(next);
            }
            KeyCode::Right => {
                let next = self.timeline.next_step();
                self.set_timeline(next);
            }
            _ => {}
        }
    }

    /// Plays the mover's mark at `pos`; ignored if illegal.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) {
        let next = self.timeline.apply_move(pos);
        if next == self.timeline {
            debug!(?pos, "Click had no effect");
        }
        self.set_timeline(next);
    }

    /// Makes `step` the active snapshot.
    #[instrument(skip(self))]
    pub fn jump(&mut self, step: usize) {
        match self.timeline.jump_to(step) {
            Ok(next) => self.set_timeline(next),
            Err(e) => warn!(error = %e, "Jump failed"),
        }
    }

    fn set_timeline(&mut self, timeline: Timeline) {
        self.timeline = timeline;
        self.view = GameView::from_timeline(&self.timeline);
        self.select_current_step();
    }

    fn select_current_step(&mut self) {
        let step = self.timeline.step();
        self.selected = self
            .view
            .moves()
            .iter()
            .position(|m| *m.step() == step)
            .unwrap_or(0);
    }
}
