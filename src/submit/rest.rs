//! REST backend: URL building and reply interpretation

use super::error::{SubmitError, SubmitReply};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Keys in a 4xx body that carry a general message rather than a field error
const MESSAGE_KEYS: &[&str] = &["detail", "error", "message", "non_field_errors"];

pub fn endpoint_url(api_base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        api_base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Map an HTTP status and body from the REST backend to an outcome
pub fn interpret_reply(status: u16, body: &str) -> Result<SubmitReply, SubmitError> {
    match status {
        200..=299 => {
            let message = serde_json::from_str::<Value>(body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string));
            Ok(SubmitReply { message })
        }
        400..=499 => match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => Err(client_error(status, &map)),
            _ => Err(SubmitError::Status(status)),
        },
        _ => Err(SubmitError::Status(status)),
    }
}

fn client_error(status: u16, map: &Map<String, Value>) -> SubmitError {
    let fields: BTreeMap<String, String> = map
        .iter()
        .filter(|(key, _)| !MESSAGE_KEYS.contains(&key.as_str()))
        .filter_map(|(key, value)| error_text(value).map(|text| (key.clone(), text)))
        .collect();
    if !fields.is_empty() {
        return SubmitError::FieldErrors(fields);
    }

    MESSAGE_KEYS
        .iter()
        .find_map(|key| map.get(*key).and_then(error_text))
        .map(SubmitError::Rejected)
        .unwrap_or(SubmitError::Status(status))
}

/// A field error is a string or a list of strings
fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            (!parts.is_empty()).then(|| parts.join(" "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_endpoint_url_joins_slashes() {
        assert_eq!(
            endpoint_url("http://localhost:8000/", "/api/membership/register/"),
            "http://localhost:8000/api/membership/register/"
        );
        assert_eq!(
            endpoint_url("https://club.example", "api/x/"),
            "https://club.example/api/x/"
        );
    }

    #[test]
    fn test_success_with_message() {
        let reply = interpret_reply(201, r#"{"message": "Welcome aboard"}"#).unwrap();
        assert_eq!(reply.message.as_deref(), Some("Welcome aboard"));
    }

    #[test]
    fn test_success_with_empty_body() {
        assert_eq!(interpret_reply(204, "").unwrap(), SubmitReply::default());
    }

    #[test]
    fn test_field_errors_from_lists_and_strings() {
        let body = r#"{"email": ["Enter a valid email.", "Already registered."], "student_id": "Taken"}"#;
        let Err(SubmitError::FieldErrors(fields)) = interpret_reply(400, body) else {
            panic!("expected field errors");
        };
        assert_eq!(fields["email"], "Enter a valid email. Already registered.");
        assert_eq!(fields["student_id"], "Taken");
    }

    #[test]
    fn test_field_errors_take_precedence_over_detail() {
        let body = r#"{"detail": "Invalid input", "phone": ["Bad number"]}"#;
        let Err(SubmitError::FieldErrors(fields)) = interpret_reply(400, body) else {
            panic!("expected field errors");
        };
        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key("phone"));
    }

    #[test]
    fn test_detail_becomes_rejection() {
        assert_eq!(
            interpret_reply(403, r#"{"detail": "Registrations are closed"}"#),
            Err(SubmitError::Rejected("Registrations are closed".to_string()))
        );
    }

    #[test]
    fn test_non_field_errors_becomes_rejection() {
        assert_eq!(
            interpret_reply(400, r#"{"non_field_errors": ["Duplicate application"]}"#),
            Err(SubmitError::Rejected("Duplicate application".to_string()))
        );
    }

    #[test]
    fn test_client_error_without_usable_body() {
        assert_eq!(interpret_reply(404, "<html>"), Err(SubmitError::Status(404)));
        assert_eq!(interpret_reply(400, r#"{"count": 3}"#), Err(SubmitError::Status(400)));
    }

    #[test]
    fn test_server_error_ignores_body() {
        assert_eq!(
            interpret_reply(500, r#"{"email": "x"}"#),
            Err(SubmitError::Status(500))
        );
    }
}
