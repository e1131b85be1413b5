//! Contact form controller
//!
//! Owns the field values, touched flags and error messages, and drives the
//! submit lifecycle `Idle -> Submitting -> Success | Error`. Keystrokes are
//! validated through a per-field debouncer; blur and submit validate
//! synchronously.

use super::field::{ContactField, FieldDisplay, FieldMap};
use super::submission::{ContactSubmission, SubmissionStatus};
use super::validators::{is_form_valid, trim_blank, validate_field};
use crate::dispatch::{DispatchError, EmailDispatcher};
use crate::state::debounce::KeyedDebouncer;
use crate::state::ContactContent;
use chrono::{DateTime, Local};
use std::time::Duration;
use uuid::Uuid;

/// Result of asking the controller to start a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation passed; the caller must dispatch this payload and report
    /// back through [`FormController::finish_submit`]
    Dispatch(ContactSubmission),
    /// At least one field is invalid; nothing was sent
    Invalid,
    /// A dispatch is already in flight
    AlreadySubmitting,
}

pub struct FormController {
    session_id: Uuid,
    values: FieldMap<String>,
    errors: FieldMap<String>,
    touched: FieldMap<bool>,
    submit_attempted: bool,
    status: SubmissionStatus,
    fallback_error: String,
    sent_at: Option<DateTime<Local>>,
    debouncer: KeyedDebouncer<ContactField, String>,
}

impl FormController {
    /// Create a controller.
    ///
    /// `on_debounced` runs when a field's keystroke burst settles; the owner
    /// is expected to answer it with [`FormController::apply_debounced`].
    pub fn new(
        content: &ContactContent,
        debounce_delay: Duration,
        on_debounced: impl Fn(ContactField, String) + Send + Sync + 'static,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            values: FieldMap::default(),
            errors: FieldMap::default(),
            touched: FieldMap::default(),
            submit_attempted: false,
            status: SubmissionStatus::Idle,
            fallback_error: content.form_status.error.clone(),
            sent_at: None,
            debouncer: KeyedDebouncer::new(debounce_delay, on_debounced),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn value(&self, field: ContactField) -> &str {
        &self.values[field]
    }

    /// Current error for a field, empty when valid
    pub fn error(&self, field: ContactField) -> &str {
        &self.errors[field]
    }

    #[allow(dead_code)] // read by tests; rendering goes through field_display
    pub fn is_touched(&self, field: ContactField) -> bool {
        self.touched[field]
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    #[allow(dead_code)]
    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Local time of the last successful dispatch
    pub fn sent_at(&self) -> Option<DateTime<Local>> {
        self.sent_at
    }

    /// Record an edit. The field's error is recomputed once the keystroke
    /// burst settles.
    pub fn on_change(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        self.values[field] = value.clone();
        self.touched[field] = true;
        self.debouncer.call(field, value);
    }

    /// Recompute a field's error from its current value.
    ///
    /// Called when a debounced revalidation fires. The current value is used
    /// rather than the one captured by the timer.
    pub fn apply_debounced(&mut self, field: ContactField) {
        self.revalidate(field);
    }

    /// The field lost focus: mark it touched and validate immediately
    pub fn on_blur(&mut self, field: ContactField) {
        self.touched[field] = true;
        self.debouncer.cancel(&field);
        self.revalidate(field);
    }

    fn revalidate(&mut self, field: ContactField) {
        self.errors[field] = validate_field(field, &self.values[field]).message;
    }

    /// Aggregate validity: no errors and no blank fields
    pub fn is_form_valid(&self) -> bool {
        is_form_valid(&self.errors) && self.values.values().all(|v| !trim_blank(v).is_empty())
    }

    /// Whether to show the "complete all fields" banner
    pub fn show_incomplete_banner(&self) -> bool {
        self.submit_attempted && !self.is_form_valid()
    }

    /// Error to display under a field; hidden until the field is touched
    pub fn visible_error(&self, field: ContactField) -> Option<&str> {
        let error = self.error(field);
        (self.touched[field] && !error.is_empty()).then_some(error)
    }

    pub fn field_display(&self, field: ContactField) -> FieldDisplay {
        match (self.touched[field], self.errors[field].is_empty()) {
            (false, _) => FieldDisplay::Untouched,
            (true, true) => FieldDisplay::Valid,
            (true, false) => FieldDisplay::Invalid,
        }
    }

    /// Validate every field and, if all pass, move to `Submitting`.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.status.is_submitting() {
            tracing::debug!(session = %self.session_id, "submit ignored, dispatch in flight");
            return SubmitStart::AlreadySubmitting;
        }

        // A previous failure's server text does not survive a new attempt
        if let SubmissionStatus::Error { message } = &mut self.status {
            message.clone_from(&self.fallback_error);
        }

        let pending = self.debouncer.pending_count();
        if pending > 0 {
            tracing::debug!(session = %self.session_id, pending, "dropping pending validations");
        }
        self.debouncer.cancel_all();
        let values = &self.values;
        self.errors = FieldMap::from_fn(|field| validate_field(field, &values[field]).message);
        self.touched = FieldMap::from_fn(|_| true);
        self.submit_attempted = true;

        if !is_form_valid(&self.errors) {
            let failing: Vec<&str> = self
                .errors
                .iter()
                .filter(|(_, error)| !error.is_empty())
                .map(|(field, _)| field.name())
                .collect();
            tracing::info!(session = %self.session_id, ?failing, "submit blocked by validation");
            return SubmitStart::Invalid;
        }

        self.status = SubmissionStatus::Submitting;
        tracing::info!(session = %self.session_id, "dispatching contact submission");

        SubmitStart::Dispatch(ContactSubmission {
            name: self.values.name.clone(),
            email: self.values.email.clone(),
            message: self.values.message.clone(),
        })
    }

    /// Settle an in-flight dispatch
    pub fn finish_submit(&mut self, result: Result<(), DispatchError>) {
        if !self.status.is_submitting() {
            tracing::warn!(
                session = %self.session_id,
                status = self.status.label(),
                "dispatch result arrived with no submission in flight"
            );
            return;
        }

        match result {
            Ok(()) => {
                tracing::info!(session = %self.session_id, "contact submission sent");
                self.status = SubmissionStatus::Success;
                self.sent_at = Some(Local::now());
                self.clear_fields();
            }
            Err(err) => {
                tracing::warn!(session = %self.session_id, error = %err, "contact submission failed");
                let message = err
                    .user_text()
                    .map(str::to_string)
                    .unwrap_or_else(|| self.fallback_error.clone());
                self.status = SubmissionStatus::Error { message };
            }
        }
    }

    /// Validate, dispatch and settle in one step.
    ///
    /// A no-op while another dispatch is in flight. The TUI splits this into
    /// `begin_submit` and `finish_submit` so the dispatch can run off the
    /// event loop.
    #[allow(dead_code)]
    pub async fn attempt_submit(&mut self, dispatcher: &dyn EmailDispatcher) {
        if let SubmitStart::Dispatch(submission) = self.begin_submit() {
            let result = dispatcher.send(&submission).await;
            self.finish_submit(result);
        }
    }

    fn clear_fields(&mut self) {
        self.debouncer.cancel_all();
        self.values = FieldMap::default();
        self.touched = FieldMap::default();
        self.submit_attempted = false;
    }
}
