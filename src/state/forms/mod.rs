//! Form domain layer
//!
//! One schema-driven engine serves every form: a schema lists the fields and
//! where to send them, `FormState` holds the values, `validate` checks them
//! and `FormSession` runs the submission.

mod field;
mod form_state;
mod payload;
mod schema;
mod session;
mod validate;

pub use field::FormField;
pub use form_state::FormButton;
pub use payload::SubmissionRequest;
pub use schema::{FormKind, SubmitTarget};
pub use session::{FormSession, SubmissionPhase, SubmissionResult};
