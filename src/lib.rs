//! Retrace - tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Game**: pure state machine from [`retrace_game`] (history, step pointer, rules)
//! - **TUI**: ratatui front end that forwards key presses as game events
//! - **Replay**: non-interactive replay of a move list, printed as text or JSON
//! - **Config**: optional TOML file for move order, logging and colours
//!
//! # Example
//!
//! ```
//! use retrace::{GameView, MoveOrder, render_text, replay};
//!
//! # fn example() -> anyhow::Result<()> {
//! let timeline = replay(&[0, 3, 1, 4, 2], None, MoveOrder::Ascending)?;
//! let view = GameView::from_timeline(&timeline);
//! assert_eq!(view.status(), "Winner: X");
//! println!("{}", render_text(&view));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod logging;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command, OutputFormat};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, Theme, ThemeConfig};

// Crate-level exports - Logging
pub use logging::{init_file as init_file_logging, init_stderr as init_stderr_logging};

// Crate-level exports - Replay
pub use replay::{render, render_text, replay};

// Crate-level exports - TUI
pub use tui::{App, AppAction, Focus, draw, run_tui};

// Crate-level exports - Game types
pub use retrace_game::{
    Board, GAME_START_LABEL, GameError, GameErrorKind, GameStatus, GameView, LINES, Location,
    Mark, MoveEntry, MoveOrder, MoveRejected, Position, Snapshot, Square, Timeline, Win,
    compute_winner, is_draw, is_full,
};
