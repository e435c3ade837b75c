//! Stateless UI rendering using ratatui.

mod board;
mod moves;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Focus};

pub use board::render_board;
pub use moves::render_moves;

const HELP: &str = "1-9/Enter: Play | Tab: Switch pane | u/r: Back/Forward | o: Order | q: Quit";

/// Draws one frame from the app's current view.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(9),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Retrace - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let view = app.view();
    let cursor = (*app.focus() == Focus::Board).then_some(*app.cursor());
    let selected = (*app.focus() == Focus::Moves).then_some(*app.selected());
    render_board(f, body[0], view, cursor, app.theme());
    render_moves(f, body[1], view, selected);

    let status_style = if view.winning_line().is_empty() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(app.theme().win).add_modifier(Modifier::BOLD)
    };
    let status = Paragraph::new(view.status().as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
