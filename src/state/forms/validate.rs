//! Client-side validation of a form against its schema

use super::field::{FieldKind, FieldSpec, PhoneRule};
use super::form_state::FormState;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern"));
static PHONE_STRICT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("strict phone pattern"));
static PHONE_LOOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s-]{10,15}$").expect("loose phone pattern"));

/// One failed rule, tied to the field it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered list of validation failures, in schema field order.
/// At most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrorSet {
    errors: Vec<FieldError>,
}

impl ValidationErrorSet {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Copy every error onto its field so the form can show it inline
    pub fn apply_to(&self, form: &mut FormState) {
        for error in &self.errors {
            form.set_error(&error.field, error.message.clone());
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

pub fn is_valid_phone(value: &str, rule: PhoneRule) -> bool {
    match rule {
        PhoneRule::Strict => PHONE_STRICT.is_match(value),
        PhoneRule::Loose => PHONE_LOOSE.is_match(value),
    }
}

/// Check one value against its field spec
pub fn validate_field(spec: &FieldSpec, value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return spec
            .required
            .then(|| format!("{} is required", spec.label));
    }

    match &spec.kind {
        FieldKind::Email if !is_valid_email(value) => {
            Some(format!("{} must be a valid email address", spec.label))
        }
        FieldKind::Phone(rule) if !is_valid_phone(value, *rule) => Some(match rule {
            PhoneRule::Strict => format!("{} must be a 10-digit phone number", spec.label),
            PhoneRule::Loose => format!("{} must be a valid phone number", spec.label),
        }),
        FieldKind::Choice(options) if !options.iter().any(|o| o == value) => Some(format!(
            "{} must be one of: {}",
            spec.label,
            options.join(", ")
        )),
        _ => None,
    }
}

/// Validate every field of a form. Pure: the form is not modified.
pub fn validate(form: &FormState) -> ValidationErrorSet {
    let errors = form
        .fields
        .iter()
        .filter_map(|field| {
            validate_field(&field.spec, &field.value).map(|message| FieldError {
                field: field.name().to_string(),
                message,
            })
        })
        .collect();
    ValidationErrorSet { errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormKind;
    use pretty_assertions::assert_eq;

    fn filled_registration() -> FormState {
        let mut form = FormState::new(FormKind::Registration.schema());
        form.set_field("first_name", "Ada");
        form.set_field("last_name", "Lovelace");
        form.set_field("email", "ada@example.com");
        form.set_field("phone", "9876543210");
        form.set_field("college", "Analytical College");
        form.set_field("year", "2nd Year");
        form
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&filled_registration()).is_empty());
    }

    #[test]
    fn test_each_missing_required_field_is_reported() {
        let filled = filled_registration();
        for field in filled.fields.iter().filter(|f| f.spec.required) {
            let mut form = filled.clone();
            form.set_field(field.name(), "   ");
            let errors = validate(&form);
            assert_eq!(errors.len(), 1, "{}", field.name());
            let messages = errors_of(&form);
            assert!(messages[0].starts_with(field.label()), "{}", messages[0]);
        }
    }

    #[test]
    fn test_missing_required_reports_only_required() {
        let mut form = filled_registration();
        form.set_field("email", "");
        assert_eq!(errors_of(&form), vec!["Email is required"]);
    }

    #[test]
    fn test_bad_email_and_phone_both_reported() {
        let mut form = filled_registration();
        form.set_field("email", "bad");
        form.set_field("phone", "123");
        assert_eq!(
            errors_of(&form),
            vec![
                "Email must be a valid email address",
                "Phone must be a 10-digit phone number",
            ]
        );
    }

    #[test]
    fn test_empty_form_reports_in_field_order() {
        let form = FormState::new(FormKind::Registration.schema());
        assert_eq!(
            errors_of(&form),
            vec![
                "First Name is required",
                "Last Name is required",
                "Email is required",
                "Phone is required",
                "College is required",
                "Year is required",
            ]
        );
    }

    #[test]
    fn test_optional_empty_fields_pass() {
        let mut form = FormState::new(FormKind::EventRegistration.schema());
        form.set_field("name", "Grace");
        form.set_field("email", "grace@navy.mil");
        form.set_field("phone", "+1 555-123-4567");
        form.set_field("event_name", "Hack Night");
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_email_rule() {
        for ok in ["a@b.co", "first.last@uni.edu", "x+tag@sub.domain.org"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in ["bad", "a@b", "@b.co", "a b@c.de", "a@b.", "a@.b"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn test_strict_phone_requires_ten_digits() {
        assert!(is_valid_phone("0123456789", PhoneRule::Strict));
        assert!(!is_valid_phone("123456789", PhoneRule::Strict));
        assert!(!is_valid_phone("01234567890", PhoneRule::Strict));
        assert!(!is_valid_phone("012-345-6789", PhoneRule::Strict));
    }

    #[test]
    fn test_loose_phone_accepts_separators() {
        assert!(is_valid_phone("+91 98765 43210", PhoneRule::Loose));
        assert!(is_valid_phone("555-123-4567", PhoneRule::Loose));
        assert!(!is_valid_phone("12345", PhoneRule::Loose));
        assert!(!is_valid_phone("555.123.4567", PhoneRule::Loose));
    }

    #[test]
    fn test_values_are_trimmed_before_format_checks() {
        let spec = FieldSpec::email("email", "Email");
        assert!(validate_field(&spec, "  ada@example.com ").is_none());
    }

    #[test]
    fn test_choice_must_match_an_option() {
        let spec = FieldSpec::choice("year", "Year", &["1st", "2nd"]);
        assert!(validate_field(&spec, "2nd").is_none());
        assert_eq!(
            validate_field(&spec, "5th").unwrap(),
            "Year must be one of: 1st, 2nd"
        );
    }

    #[test]
    fn test_apply_to_marks_fields() {
        let mut form = filled_registration();
        form.set_field("phone", "123");
        validate(&form).apply_to(&mut form);
        assert_eq!(
            form.error("phone"),
            Some("Phone must be a 10-digit phone number")
        );
        assert!(form.error("email").is_none());
    }

    #[test]
    fn test_validate_does_not_touch_form() {
        let form = FormState::new(FormKind::Membership.schema());
        let errors = validate(&form);
        assert!(!errors.is_empty());
        assert!(!form.has_errors());
    }

    fn errors_of(form: &FormState) -> Vec<String> {
        let mut shown = form.clone();
        validate(form).apply_to(&mut shown);
        shown.error_messages().into_iter().map(str::to_string).collect()
    }
}
