//! Spreadsheet webhook: request envelope and reply interpretation

use super::error::{SubmitError, SubmitReply};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

const DEFAULT_REJECTION: &str = "Submission was rejected. Please try again.";

/// Reply shape the webhook script sends back
#[derive(Debug, Deserialize)]
struct WebhookReply {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Wrap form data in the `{ type, data, timestamp }` envelope
pub fn envelope(submission_type: &str, data: &Value, now: DateTime<Utc>) -> Value {
    json!({
        "type": submission_type,
        "data": data,
        "timestamp": now.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

pub fn interpret_reply(status: u16, body: &str) -> Result<SubmitReply, SubmitError> {
    if !(200..=299).contains(&status) {
        return Err(SubmitError::Status(status));
    }

    let reply: WebhookReply = serde_json::from_str(body)
        .map_err(|e| SubmitError::InvalidResponse(e.to_string()))?;

    if reply.success {
        Ok(SubmitReply {
            message: reply.message,
        })
    } else {
        Err(SubmitError::Rejected(
            reply
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_envelope_shape() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let data = json!({"name": "Grace"});
        assert_eq!(
            envelope("event_registration", &data, now),
            json!({
                "type": "event_registration",
                "data": {"name": "Grace"},
                "timestamp": "2026-03-01T09:30:00.000Z",
            })
        );
    }

    #[test]
    fn test_success_reply() {
        assert_eq!(
            interpret_reply(200, r#"{"success": true}"#),
            Ok(SubmitReply::default())
        );
        let reply = interpret_reply(200, r#"{"success": true, "message": "Row 12 added"}"#);
        assert_eq!(reply.unwrap().message.as_deref(), Some("Row 12 added"));
    }

    #[test]
    fn test_failure_reply_uses_error_text() {
        assert_eq!(
            interpret_reply(200, r#"{"success": false, "error": "Duplicate email"}"#),
            Err(SubmitError::Rejected("Duplicate email".to_string()))
        );
    }

    #[test]
    fn test_failure_reply_without_error_text() {
        assert_eq!(
            interpret_reply(200, r#"{"success": false, "error": "  "}"#),
            Err(SubmitError::Rejected(DEFAULT_REJECTION.to_string()))
        );
    }

    #[test]
    fn test_non_json_reply_is_invalid() {
        assert!(matches!(
            interpret_reply(200, "<html>moved</html>"),
            Err(SubmitError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_non_success_status() {
        assert_eq!(
            interpret_reply(302, r#"{"success": true}"#),
            Err(SubmitError::Status(302))
        );
    }
}
