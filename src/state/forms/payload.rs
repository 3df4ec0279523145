//! Turning a validated form into a submission request

use super::form_state::FormState;
use super::schema::{FormKind, SubmitTarget};
use serde_json::{Map, Value};

/// Everything a submitter needs to send one form
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    pub form: FormKind,
    pub target: SubmitTarget,
    /// JSON object keyed by payload key
    pub payload: Value,
}

/// Build the JSON body: trimmed values keyed by each field's payload key
pub fn build_payload(form: &FormState) -> Value {
    let map: Map<String, Value> = form
        .fields
        .iter()
        .map(|field| {
            (
                field.spec.payload_key().to_string(),
                Value::String(field.value.trim().to_string()),
            )
        })
        .collect();
    Value::Object(map)
}

pub fn build_request(form: &FormState) -> SubmissionRequest {
    SubmissionRequest {
        form: form.schema.kind,
        target: form.schema.target.clone(),
        payload: build_payload(form),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_payload_renames_and_trims() {
        let mut form = FormState::new(FormKind::Registration.schema());
        form.set_field("first_name", "  Ada ");
        form.set_field("last_name", "Lovelace");
        form.set_field("email", "ada@example.com");
        form.set_field("phone", "9876543210");
        form.set_field("college", "Analytical College");
        form.set_field("year", "2nd Year");

        assert_eq!(
            build_payload(&form),
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "phone": "9876543210",
                "college": "Analytical College",
                "year": "2nd Year",
            })
        );
    }

    #[test]
    fn test_optional_fields_are_sent_empty() {
        let form = FormState::new(FormKind::WebTeam.schema());
        let payload = build_payload(&form);
        assert_eq!(payload["githubUrl"], json!(""));
        assert_eq!(payload["portfolioUrl"], json!(""));
        assert!(payload.get("github").is_none());
    }

    #[test]
    fn test_request_carries_schema_target() {
        let form = FormState::new(FormKind::Membership.schema());
        let request = build_request(&form);
        assert_eq!(request.form, FormKind::Membership);
        assert_eq!(request.target, form.schema.target);
    }
}
