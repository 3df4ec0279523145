//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field box needs
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline() {
        5
    } else {
        3
    }
}

/// Draw a form field; its error, if any, goes on the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_color = match (&field.error, is_active) {
        (Some(_), _) => Color::Red,
        (None, true) => Color::Cyan,
        (None, false) => Color::DarkGray,
    };
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let mut lines: Vec<Line> = display_str
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }

    let required = if field.spec.required { " *" } else { "" };
    let mut block = Block::default()
        .title(format!(" {}{} ", field.label(), required))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if let Some(error) = &field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
