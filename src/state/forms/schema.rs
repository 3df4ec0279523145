//! Form schemas: the field lists and submit targets of every form

use super::field::{FieldSpec, PhoneRule};
use serde::{Deserialize, Serialize};

/// Which form a schema or submission belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Registration,
    Membership,
    EventRegistration,
    WebTeam,
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::Registration,
        FormKind::Membership,
        FormKind::EventRegistration,
        FormKind::WebTeam,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Registration => "Registration",
            Self::Membership => "Membership Application",
            Self::EventRegistration => "Event Registration",
            Self::WebTeam => "Web Team Registration",
        }
    }

    /// Build the schema for this form
    pub fn schema(self) -> FormSchema {
        match self {
            Self::Registration => registration(),
            Self::Membership => membership(),
            Self::EventRegistration => event_registration(),
            Self::WebTeam => web_team(),
        }
    }
}

/// Where a form is sent on submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    /// `POST {api_base}{path}`
    Rest { path: String },
    /// `POST {webhook_url}` with `{ type, data, timestamp }`
    Webhook { submission_type: String },
}

/// Data description of one form
#[derive(Debug, Clone)]
pub struct FormSchema {
    pub kind: FormKind,
    pub title: String,
    pub fields: Vec<FieldSpec>,
    pub target: SubmitTarget,
    pub success_message: String,
}

impl FormSchema {
    /// Map a payload key back to the field it came from
    pub fn field_for_payload_key(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.payload_key() == key)
    }
}

const YEARS: &[&str] = &["1st Year", "2nd Year", "3rd Year", "4th Year"];

fn registration() -> FormSchema {
    FormSchema {
        kind: FormKind::Registration,
        title: "Registration".to_string(),
        fields: vec![
            FieldSpec::text("first_name", "First Name").renamed("firstName"),
            FieldSpec::text("last_name", "Last Name").renamed("lastName"),
            FieldSpec::email("email", "Email"),
            FieldSpec::phone("phone", "Phone", PhoneRule::Strict),
            FieldSpec::text("college", "College"),
            FieldSpec::choice("year", "Year", YEARS),
        ],
        target: SubmitTarget::Webhook {
            submission_type: "registration".to_string(),
        },
        success_message: "Registration successful! We'll be in touch soon.".to_string(),
    }
}

fn membership() -> FormSchema {
    FormSchema {
        kind: FormKind::Membership,
        title: "Membership Application".to_string(),
        fields: vec![
            FieldSpec::text("full_name", "Full Name"),
            FieldSpec::email("email", "Email"),
            FieldSpec::phone("phone", "Phone", PhoneRule::Strict),
            FieldSpec::text("student_id", "Student ID"),
            FieldSpec::text("department", "Department"),
            FieldSpec::choice("year_of_study", "Year of Study", YEARS),
            FieldSpec::multiline("motivation", "Why do you want to join?").optional(),
        ],
        target: SubmitTarget::Rest {
            path: "/api/membership/register/".to_string(),
        },
        success_message: "Application submitted! You'll hear from us after review.".to_string(),
    }
}

fn event_registration() -> FormSchema {
    FormSchema {
        kind: FormKind::EventRegistration,
        title: "Event Registration".to_string(),
        fields: vec![
            FieldSpec::text("name", "Name"),
            FieldSpec::email("email", "Email"),
            FieldSpec::phone("phone", "Phone", PhoneRule::Loose),
            FieldSpec::text("event_name", "Event"),
            FieldSpec::text("team_name", "Team Name (optional)").optional(),
        ],
        target: SubmitTarget::Webhook {
            submission_type: "event_registration".to_string(),
        },
        success_message: "You're registered for the event!".to_string(),
    }
}

fn web_team() -> FormSchema {
    FormSchema {
        kind: FormKind::WebTeam,
        title: "Web Team Registration".to_string(),
        fields: vec![
            FieldSpec::text("name", "Name"),
            FieldSpec::email("email", "Email"),
            FieldSpec::phone("phone", "Phone", PhoneRule::Strict),
            FieldSpec::text("github", "GitHub Profile (optional)")
                .renamed("githubUrl")
                .optional(),
            FieldSpec::text("portfolio", "Portfolio (optional)")
                .renamed("portfolioUrl")
                .optional(),
            FieldSpec::multiline("skills", "Skills"),
        ],
        target: SubmitTarget::Webhook {
            submission_type: "web_team".to_string(),
        },
        success_message: "Thanks for applying to the web team!".to_string(),
    }
}
