//! Trait abstraction for submitters to enable mocking in tests

use super::error::{SubmitError, SubmitReply};
use crate::state::SubmissionRequest;
use async_trait::async_trait;

/// Sends one submission request and reports the remote outcome.
///
/// Exactly one network call per `submit`: no retry, no backoff.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmitReply, SubmitError>;
}
