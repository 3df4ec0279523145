//! Generic form rendering, driven by the open form's schema

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::{FormButton, FormSession, SubmissionPhase, SubmissionResult};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Most validation messages listed under the fields
const MAX_SUMMARY_LINES: usize = 4;

/// Draw the open form
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.state.session.as_ref() else {
        return;
    };
    let form = &session.form;

    let block = Block::default()
        .title(format!(" {} ", form.schema.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let notice = notice_lines(session);
    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Length(notice.len() as u16));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Length(1)); // Help text
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, field) in form.fields.iter().enumerate() {
        draw_field(frame, chunks[idx], field, idx == form.active_field_index);
    }

    let n = form.fields.len();
    if !notice.is_empty() {
        frame.render_widget(
            Paragraph::new(notice).wrap(Wrap { trim: true }),
            chunks[n],
        );
    }
    draw_buttons(frame, chunks[n + 1], session);
    draw_help_text(frame, chunks[n + 2], session);
}

/// Result banner, or the validation summary when there is no banner
fn notice_lines(session: &FormSession) -> Vec<Line<'static>> {
    if let Some(result) = session.result() {
        let (color, icon) = match result {
            SubmissionResult::Success { .. } => (Color::Green, "✔"),
            SubmissionResult::Failure { .. } => (Color::Red, "✖"),
        };
        return vec![Line::from(Span::styled(
            format!("{icon} {}", result.message()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))];
    }

    let errors = session.form.error_messages();
    if errors.is_empty() {
        return Vec::new();
    }

    let style = Style::default().fg(Color::Red);
    let mut lines: Vec<Line> = errors
        .iter()
        .take(MAX_SUMMARY_LINES)
        .map(|m| Line::from(Span::styled(format!("• {m}"), style)))
        .collect();
    if errors.len() > MAX_SUMMARY_LINES {
        lines.push(Line::from(Span::styled(
            format!("  …and {} more", errors.len() - MAX_SUMMARY_LINES),
            style,
        )));
    }
    lines
}

fn draw_buttons(frame: &mut Frame, area: Rect, session: &FormSession) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(area);

    let form = &session.form;
    let focused = form.is_buttons_row_active();
    let submit_label = if session.is_submitting() {
        "Submitting…"
    } else {
        FormButton::Submit.label()
    };

    render_button(
        frame,
        chunks[0],
        submit_label,
        focused && form.selected_button == FormButton::Submit,
        session.can_submit(),
        Some(Color::Green),
    );
    render_button(
        frame,
        chunks[1],
        FormButton::Cancel.label(),
        focused && form.selected_button == FormButton::Cancel,
        !session.is_submitting(),
        None,
    );
}

fn draw_help_text(frame: &mut Frame, area: Rect, session: &FormSession) {
    let key = Style::default().fg(Color::Cyan);
    let spans = match session.phase() {
        SubmissionPhase::Submitting => vec![Span::raw("Sending…")],
        SubmissionPhase::Success => vec![
            Span::raw("Closing shortly  "),
            Span::styled("Esc", key),
            Span::raw(": close now"),
        ],
        SubmissionPhase::Idle | SubmissionPhase::Failure => {
            let mut spans = vec![
                Span::styled("Tab", key),
                Span::raw(": next field  "),
                Span::styled("Ctrl+S", key),
                Span::raw(": submit  "),
                Span::styled("Esc", key),
                Span::raw(": cancel"),
            ];
            if session
                .form
                .active_field()
                .is_some_and(|f| f.spec.is_choice())
            {
                spans.push(Span::raw("  "));
                spans.push(Span::styled("←/→", key));
                spans.push(Span::raw(": choose"));
            }
            spans
        }
    };

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
