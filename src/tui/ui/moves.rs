//! Move list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use retrace_game::GameView;

/// Renders the move list. The active step is bold; `selected` is drawn only
/// when the list has focus.
pub fn render_moves(f: &mut Frame, area: Rect, view: &GameView, selected: Option<usize>) {
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let style = if view.is_current(entry) {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let text = format!("{:>2}. {}", entry.step(), entry.label());
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let border = if selected.is_some() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Moves ({})", view.order()))
                .border_style(border),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}
