//! Trait abstraction for email dispatch to enable mocking in tests

use super::error::DispatchError;
use crate::state::ContactSubmission;
use async_trait::async_trait;

/// Sends a contact submission to an external email service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    /// Deliver the submission. One attempt, no retry.
    async fn send(&self, submission: &ContactSubmission) -> Result<(), DispatchError>;
}
