//! Forms list (the home view)

use super::render_scrollable_list;
use crate::app::App;
use crate::state::{menu_items, MenuItem};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the list of forms
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Club Forms",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Pick a form to fill in",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = menu_items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let detail = match item {
                MenuItem::Form(_) => String::new(),
                MenuItem::Submissions => format!(" ({})", app.submissions.len()),
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(item.label(), style),
                Span::styled(detail, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Forms ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    render_scrollable_list(frame, chunks[1], list, app.state.selected_index);
}
