//! Contact form domain layer
//!
//! Field identifiers, validators, the submission payload and the controller
//! that ties them together.

mod field;
mod form_state;
mod submission;
mod validators;

pub use field::{ContactField, FieldDisplay, FieldMap};
pub use form_state::{FormController, SubmitStart};
pub use submission::{ContactSubmission, SubmissionStatus};
