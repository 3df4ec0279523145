//! Application state definitions

use super::forms::{FormKind, FormSession};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Forms,
    Form,
    Submissions,
}

impl View {
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::Form)
    }
}

/// One entry in the forms list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Form(FormKind),
    Submissions,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Form(kind) => kind.label(),
            Self::Submissions => "Submitted Forms",
        }
    }
}

/// Entries of the forms list, in display order
pub fn menu_items() -> Vec<MenuItem> {
    FormKind::ALL
        .into_iter()
        .map(MenuItem::Form)
        .chain(std::iter::once(MenuItem::Submissions))
        .collect()
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Selection
    pub selected_index: usize,

    /// The open form, present only in the Form view
    pub session: Option<FormSession>,

    /// Errors not tied to a form, shown one at a time
    pub errors: VecDeque<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently on screen
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Drop the open form
    pub fn clear_form(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_forms() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Forms);
        assert!(state.session.is_none());
    }

    #[test]
    fn test_menu_lists_every_form_then_submissions() {
        let items = menu_items();
        assert_eq!(items.len(), FormKind::ALL.len() + 1);
        assert_eq!(items[0], MenuItem::Form(FormKind::Registration));
        assert_eq!(items.last(), Some(&MenuItem::Submissions));
    }

    #[test]
    fn test_move_selection_bounds() {
        let mut state = AppState::default();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        state.move_selection_down(2);
        state.move_selection_down(2);
        assert_eq!(state.selected_index, 1);
        state.move_selection_down(0);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_only_form_view_is_form_view() {
        assert!(View::Form.is_form_view());
        assert!(!View::Forms.is_form_view());
        assert!(!View::Submissions.is_form_view());
    }
}
