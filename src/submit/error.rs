//! Submission outcomes

use std::collections::BTreeMap;
use thiserror::Error;

/// Successful reply from a remote collaborator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitReply {
    /// Message the remote side wants shown, if any
    pub message: Option<String>,
}

/// Why a submission attempt failed. Every variant ends the attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Network error. Please check your internet connection and try again.")]
    Network(String),

    /// Field-keyed errors reported by the backend, keyed by payload key
    #[error("Please correct the highlighted fields.")]
    FieldErrors(BTreeMap<String, String>),

    #[error("{0}")]
    Rejected(String),

    #[error("Server error (status {0}). Please try again later.")]
    Status(u16),

    #[error("Unexpected response from server: {0}")]
    InvalidResponse(String),

    #[error("Submission endpoint is not configured")]
    NotConfigured,
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_message_mentions_connection() {
        let message = SubmitError::Network("dns error".to_string()).to_string();
        assert!(message.contains("check your internet connection"));
    }

    #[test]
    fn test_rejected_shows_remote_text() {
        let err = SubmitError::Rejected("Sheet is full".to_string());
        assert_eq!(err.to_string(), "Sheet is full");
    }

    #[test]
    fn test_status_message() {
        assert_eq!(
            SubmitError::Status(502).to_string(),
            "Server error (status 502). Please try again later."
        );
    }
}
