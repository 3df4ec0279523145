//! Application state and core logic

use crate::config::AppConfig;
use crate::state::{
    menu_items, AppState, FormButton, FormKind, FormSession, MenuItem, SubmissionPhase,
    SubmissionRecord, SubmissionRepository, SubmissionRequest, View,
};
use crate::submit::Submitter;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Window for the second Ctrl+C of a double-tap quit
const DOUBLE_CTRL_C_WINDOW: Duration = Duration::from_secs(1);

/// How a status bar message should read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// One line of feedback in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded configuration
    pub config: AppConfig,
    /// Sends validated forms to their collaborator
    submitter: Box<dyn Submitter>,
    /// Log of accepted submissions
    pub submissions: Box<dyn SubmissionRepository>,
    /// Request accepted by the open form, sent after the next draw
    pending_request: Option<SubmissionRequest>,
    /// Whether the app should quit
    quit: bool,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new(
        config: AppConfig,
        submitter: Box<dyn Submitter>,
        submissions: Box<dyn SubmissionRepository>,
    ) -> Self {
        Self {
            state: AppState::default(),
            config,
            submitter,
            submissions,
            pending_request: None,
            quit: false,
            status_message: None,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            level,
        });
    }

    /// Whether a submission is waiting to be sent
    pub fn has_pending_submit(&self) -> bool {
        self.pending_request.is_some()
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
        self.state.reset_selection();
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        // Skip form views in history to go back to the last non-form view
        while let Some(view) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.state.current_view = view;
            self.state.reset_selection();
            return;
        }
        self.state.current_view = View::Forms;
    }

    /// Open a fresh instance of a form
    pub fn open_form(&mut self, kind: FormKind) {
        self.state.session = Some(FormSession::new(kind.schema(), self.config.success_delay()));
        self.navigate(View::Form);
    }

    /// Discard the open form and leave the form view
    fn close_form(&mut self) {
        self.state.clear_form();
        self.pending_request = None;
        self.go_back();
    }

    /// Advance timers; closes a successfully submitted form once its delay passes
    pub fn tick(&mut self, now: Instant) {
        let closed = self
            .state
            .session
            .as_mut()
            .is_some_and(|session| session.tick(now));
        if closed {
            self.close_form();
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit: double Ctrl+C
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let now = Instant::now();
            if self
                .last_ctrl_c
                .is_some_and(|last| now.duration_since(last) < DOUBLE_CTRL_C_WINDOW)
            {
                self.quit = true;
            } else {
                self.last_ctrl_c = Some(now);
                self.set_status("Press Ctrl+C again to quit", StatusLevel::Info);
            }
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Forms => self.handle_forms_key(key),
            View::Form => self.handle_form_key(key),
            View::Submissions => self.handle_submissions_key(key),
        }
        Ok(())
    }

    /// Handle keys in the forms list
    fn handle_forms_key(&mut self, key: KeyEvent) {
        let items = menu_items();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(items.len()),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter => match items.get(self.state.selected_index) {
                Some(MenuItem::Form(kind)) => self.open_form(*kind),
                Some(MenuItem::Submissions) => self.navigate(View::Submissions),
                None => {}
            },
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in the open form
    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(session) = self.state.session.as_mut() else {
            self.go_back();
            return;
        };

        match session.phase() {
            // Network call in flight: input is blocked
            SubmissionPhase::Submitting => return,
            // Waiting for the success delay: only leaving early is allowed
            SubmissionPhase::Success => {
                if key.code == KeyCode::Esc {
                    self.close_form();
                }
                return;
            }
            SubmissionPhase::Idle | SubmissionPhase::Failure => {}
        }

        let form = &mut session.form;
        let on_buttons = form.is_buttons_row_active();

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.request_submit();
            }
            KeyCode::Esc => self.close_form(),
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l')
                if on_buttons =>
            {
                form.selected_button.toggle();
            }
            KeyCode::Enter if on_buttons => match form.selected_button {
                FormButton::Submit => self.request_submit(),
                FormButton::Cancel => self.close_form(),
            },
            KeyCode::Left => form.cycle_choice(false),
            KeyCode::Right => form.cycle_choice(true),
            KeyCode::Enter => {
                if form.is_active_field_multiline() {
                    form.push_char('\n');
                } else {
                    form.next_field();
                }
            }
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Char(c) if !on_buttons => form.push_char(c),
            _ => {}
        }
    }

    /// Validate the open form and queue its request if it is valid
    pub fn request_submit(&mut self) {
        let Some(session) = self.state.session.as_mut() else {
            return;
        };
        if let Some(request) = session.begin_submit() {
            self.pending_request = Some(request);
        } else if session.form.has_errors() {
            let count = session.form.error_messages().len();
            self.set_status(
                format!("{count} field(s) need attention"),
                StatusLevel::Error,
            );
        }
    }

    /// Send the queued request and record its outcome on the form
    pub async fn process_pending_submit(&mut self) {
        let Some(request) = self.pending_request.take() else {
            return;
        };

        let outcome = self.submitter.submit(&request).await;

        let Some(session) = self.state.session.as_mut() else {
            tracing::warn!("{:?} form closed before its submission finished", request.form);
            return;
        };
        let result = session.finish_submit(outcome, Instant::now()).clone();
        if result.is_success() {
            let record = SubmissionRecord::new(request.form, session.form.values());
            self.submissions.insert(record);
        }
        let level = if result.is_success() {
            StatusLevel::Info
        } else {
            StatusLevel::Error
        };
        self.set_status(result.message(), level);
    }

    /// Handle keys in the submissions log
    fn handle_submissions_key(&mut self, key: KeyEvent) {
        let count = self.submissions.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(count),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_submission_id() {
                    self.submissions.remove(id);
                    let remaining = self.submissions.len();
                    if self.state.selected_index >= remaining {
                        self.state.selected_index = remaining.saturating_sub(1);
                    }
                    self.set_status("Submission removed from log", StatusLevel::Info);
                }
            }
            KeyCode::Enter => self.reopen_submission(),
            KeyCode::Esc | KeyCode::Char('q') => self.go_back(),
            _ => {}
        }
    }

    /// Id of the highlighted record in the newest-first log
    fn selected_submission_id(&self) -> Option<Uuid> {
        self.submissions
            .list()
            .get(self.state.selected_index)
            .map(|r| r.id)
    }

    /// Open a fresh form prefilled with the selected record's values
    fn reopen_submission(&mut self) {
        let Some(record) = self
            .selected_submission_id()
            .and_then(|id| self.submissions.get(id))
            .cloned()
        else {
            return;
        };

        self.open_form(record.form);
        if let Some(session) = self.state.session.as_mut() {
            for (name, value) in &record.values {
                session.form.set_field(name, value.as_str());
            }
        }
        self.set_status(
            format!("Reopened {} entries", record.form.label()),
            StatusLevel::Info,
        );
    }
}
