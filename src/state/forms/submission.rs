//! Submission payload and lifecycle status

use serde::Serialize;

/// The three field values sent to the email service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Where the form is in its submit lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// A dispatch is in flight
    Submitting,
    /// The last dispatch succeeded and the form was cleared
    Success,
    /// The last dispatch failed; `message` is shown to the user
    Error { message: String },
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Error detail, when the last dispatch failed
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error { .. } => "error",
        }
    }
}
