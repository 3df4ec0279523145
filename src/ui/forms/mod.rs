//! Form rendering module
//!
//! - `field_renderer`: one field box with its inline error
//! - `form_view`: any form schema, plus banner, error summary and buttons

mod field_renderer;
mod form_view;

pub use form_view::draw_form;
