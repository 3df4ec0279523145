//! Submission pipeline for one form instance
//!
//! `idle -> submitting -> (success | failure)`. A failure keeps every value
//! and allows another attempt. A success shows its banner until the delay
//! passes, then the form is cleared and the caller closes it.

use super::form_state::FormState;
use super::payload::{build_request, SubmissionRequest};
use super::schema::FormSchema;
use super::validate::validate;
use crate::submit::{SubmitError, SubmitReply};
use std::time::{Duration, Instant};

/// Where the current submission attempt stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

/// Outcome shown to the user as a banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success { message: String },
    Failure { message: String },
}

impl SubmissionResult {
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Failure { message } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// A form plus the state of its submission
#[derive(Debug, Clone)]
pub struct FormSession {
    pub form: FormState,
    phase: SubmissionPhase,
    result: Option<SubmissionResult>,
    success_delay: Duration,
    close_at: Option<Instant>,
}

impl FormSession {
    pub fn new(schema: FormSchema, success_delay: Duration) -> Self {
        Self {
            form: FormState::new(schema),
            phase: SubmissionPhase::Idle,
            result: None,
            success_delay,
            close_at: None,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Banner to render, if any
    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    /// Whether a submit action would be accepted right now
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Idle | SubmissionPhase::Failure)
    }

    /// Validate and, if valid, move to `submitting` and hand back the request.
    ///
    /// Returns `None` when a submission is already running or has succeeded,
    /// or when validation fails. Validation errors are left on the fields.
    pub fn begin_submit(&mut self) -> Option<SubmissionRequest> {
        if !self.can_submit() {
            tracing::debug!("Ignoring submit while {:?}", self.phase);
            return None;
        }

        self.result = None;
        self.form.clear_errors();
        let errors = validate(&self.form);
        if !errors.is_empty() {
            errors.apply_to(&mut self.form);
            tracing::debug!(
                "{:?} form has {} validation errors",
                self.form.schema.kind,
                errors.len()
            );
            return None;
        }

        self.phase = SubmissionPhase::Submitting;
        Some(build_request(&self.form))
    }

    /// Record the outcome of the network call started by `begin_submit`
    pub fn finish_submit(
        &mut self,
        outcome: Result<SubmitReply, SubmitError>,
        now: Instant,
    ) -> &SubmissionResult {
        let result = match outcome {
            Ok(reply) => {
                self.phase = SubmissionPhase::Success;
                self.close_at = Some(now + self.success_delay);
                SubmissionResult::Success {
                    message: reply
                        .message
                        .unwrap_or_else(|| self.form.schema.success_message.clone()),
                }
            }
            Err(err) => {
                self.phase = SubmissionPhase::Failure;
                SubmissionResult::Failure {
                    message: self.failure_message(err),
                }
            }
        };
        self.result.insert(result)
    }

    /// Advance timers. Returns true once a successful form has been cleared
    /// and should be closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.close_at {
            Some(deadline) if now >= deadline => {
                self.form.clear();
                self.phase = SubmissionPhase::Idle;
                self.result = None;
                self.close_at = None;
                true
            }
            _ => false,
        }
    }

    /// Put remote field errors on their fields and build the banner text
    fn failure_message(&mut self, err: SubmitError) -> String {
        let SubmitError::FieldErrors(fields) = &err else {
            return err.to_string();
        };

        let mut unmatched = Vec::new();
        for (key, message) in fields {
            match self.form.schema.field_for_payload_key(key).map(|f| f.name.clone()) {
                Some(name) => self.form.set_error(&name, message.clone()),
                None => unmatched.push(format!("{key}: {message}")),
            }
        }

        if unmatched.is_empty() {
            err.to_string()
        } else {
            format!("{} {}", err, unmatched.join("; "))
        }
    }
}
