//! Terminal UI for retrace.

mod app;
mod input;
mod ui;

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use retrace_game::Timeline;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::config::AppConfig;
use crate::logging;

pub use app::{App, AppAction, Focus};
pub use ui::draw;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Runs the interactive game until the user quits.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    logging::init_file(config.log_file(), config.log_filter())?;
    info!(move_order = %config.move_order(), "Starting retrace TUI");

    let theme = config.theme().parse().context("Invalid theme")?;
    let mut app = App::new(Timeline::with_order(*config.move_order()), theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        snapshots = app.timeline().history_len(),
        status = %app.view().status(),
        "TUI closed"
    );
    res
}

/// Event loop: draw, wait for one key, apply it.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release on some platforms).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            debug!(code = ?key.code, "Key pressed");
            if app.handle_key(key) == AppAction::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
