//! UI module for rendering the TUI

mod components;
mod forms;
mod forms_list;
mod layout;
mod submissions;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Forms => forms_list::draw(frame, main_area, app),
        View::Form => forms::draw_form(frame, main_area, app),
        View::Submissions => submissions::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog sits on top of everything
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message, app.state.errors.len());
    }
}

/// Render a list that scrolls to keep the selected item visible
pub(crate) fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    list: List,
    selected_index: usize,
) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}
