//! Submitters: sending validated forms to the REST backend or the webhook

mod client;
mod error;
mod rest;
mod traits;
mod webhook;

pub use client::HttpSubmitter;
pub use error::{SubmitError, SubmitReply};
pub use traits::Submitter;

#[cfg(test)]
pub use traits::MockSubmitter;
