//! Log of forms accepted during this session

use super::render_scrollable_list;
use crate::app::App;
use crate::state::SubmissionRecord;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the submissions list with a detail pane for the selected record
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if app.submissions.is_empty() {
        let content = Paragraph::new("No submissions yet.\nSubmitted forms appear here.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(" Submitted Forms ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(content, area);
        return;
    }

    let records = app.submissions.list();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸" } else { " " };

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(
                    record.submitted_at.format("%H:%M:%S").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::styled(record.form.label(), Style::default().fg(Color::Cyan)),
                Span::raw(" - "),
                Span::styled(record.summary(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Submitted Forms ({}) ", records.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    render_scrollable_list(frame, chunks[0], list, app.state.selected_index);

    if let Some(record) = records.get(app.state.selected_index) {
        draw_detail(frame, chunks[1], record);
    }
}

fn draw_detail(frame: &mut Frame, area: Rect, record: &SubmissionRecord) {
    let label = Style::default().fg(Color::DarkGray);

    let mut content = vec![
        Line::from(vec![
            Span::styled("Form: ", label),
            Span::styled(
                record.form.label(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Submitted: ", label),
            Span::raw(record.submitted_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        ]),
        Line::from(vec![
            Span::styled("Id: ", label),
            Span::raw(record.id.to_string()),
        ]),
        Line::from(""),
    ];

    for (name, value) in &record.values {
        if value.is_empty() {
            continue;
        }
        content.push(Line::from(Span::styled(format!("{name}:"), label)));
        for line in value.lines() {
            content.push(Line::from(format!("  {line}")));
        }
    }

    let detail = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Details ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(detail, area);
}
