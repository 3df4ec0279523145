//! Screen layout and status bar

use crate::app::{App, StatusLevel};
use crate::state::{SubmissionPhase, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the main area and a one-row status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_view_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            &msg.text,
            Style::default().fg(status_color(msg.level)),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Right-aligned submission count
    let count = format!(" {} submitted ", app.submissions.len());
    let count_width = count.chars().count() as u16;
    let count_area = Rect {
        x: area.x + area.width.saturating_sub(count_width),
        y: area.y,
        width: count_width.min(area.width),
        height: 1,
    };
    let count_widget =
        Paragraph::new(count).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(count_widget, count_area);
}

fn status_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Info => Color::Green,
        StatusLevel::Error => Color::Red,
    }
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> &'static str {
    match app.state.current_view {
        View::Forms => "j/k:nav  Enter:open  q:quit  ^C^C:quit",
        View::Form => match app.state.session.as_ref().map(|s| s.phase()) {
            Some(SubmissionPhase::Submitting) => "Submitting…",
            Some(SubmissionPhase::Success) => "Esc:close",
            _ => "Tab:next  Ctrl+S:submit  Esc:cancel",
        },
        View::Submissions => "j/k:nav  Enter:reopen  d:delete  Esc:back",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::state::{FormKind, InMemorySubmissions};
    use crate::submit::MockSubmitter;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn status_line(app: &App) -> (String, Vec<Color>) {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_status_bar(frame, frame.area(), app))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect();
        let colors = buffer.content().iter().map(|c| c.fg).collect();
        (text, colors)
    }

    #[test]
    fn test_status_color_follows_level() {
        assert_eq!(status_color(StatusLevel::Info), Color::Green);
        assert_eq!(status_color(StatusLevel::Error), Color::Red);
    }

    #[test]
    fn test_validation_notice_is_drawn_red_before_any_attempt() {
        let mut mock = MockSubmitter::new();
        mock.expect_submit().never();
        let mut app = App::new(
            AppConfig::default(),
            Box::new(mock),
            Box::new(InMemorySubmissions::new()),
        );
        app.open_form(FormKind::Registration);
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(
            app.state.session.as_ref().map(|s| s.phase()),
            Some(SubmissionPhase::Idle)
        );

        let (text, colors) = status_line(&app);
        let start = text.find("6 field(s)").unwrap();
        let column = text[..start].chars().count();
        assert_eq!(colors[column], Color::Red);
    }
}
