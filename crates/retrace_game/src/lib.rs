//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: [`compute_winner`], [`is_full`], [`is_draw`]
//! - **State machine**: [`Timeline`], a history of [`Snapshot`]s and a step pointer
//! - **View**: [`GameView`], the data a front end draws each frame
//!
//! # Example
//!
//! ```
//! use retrace_game::{GameView, Position, Timeline};
//!
//! let game = Timeline::new()
//!     .apply_move(Position::Center)
//!     .apply_move(Position::TopLeft);
//! let rewound = game.jump_to(1).expect("step 1 exists");
//!
//! assert_eq!(rewound.status().to_string(), "Current player: O");
//! assert_eq!(GameView::from_timeline(&game).moves().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
pub mod rules;
mod snapshot;
mod status;
mod timeline;
mod types;
mod view;

// Crate-level exports - Domain types
pub use position::{Location, Position};
pub use types::{Board, Mark, Square};

// Crate-level exports - Rules
pub use rules::{LINES, Win, compute_winner, is_draw, is_full};

// Crate-level exports - State machine
pub use snapshot::Snapshot;
pub use status::{GameStatus, MoveOrder};
pub use timeline::Timeline;

// Crate-level exports - Errors
pub use error::{GameError, GameErrorKind, MoveRejected};

// Crate-level exports - View
pub use view::{GAME_START_LABEL, GameView, MoveEntry};
