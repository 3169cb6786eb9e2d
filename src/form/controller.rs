//! Lead form state machine
//!
//! Drives `Idle -> Sending -> Success | Error`. Submission is split in two so
//! the UI thread can hand the blocking delivery to a worker:
//! [`LeadFormController::begin_submit`] validates and enters `Sending`,
//! [`LeadFormController::finish_submit`] applies the outcome.
//! [`LeadFormController::submit`] does both inline for headless callers.

use crate::config::FormConfig;
use crate::error::{Result, SiteError};
use crate::form::{Field, LeadForm, LeadSink, LeadSubmission, ValidationErrors};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Submission status shown next to the submit control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// Nothing in flight
    #[default]
    Idle,
    /// Request in flight; the submit control is disabled
    Sending,
    /// Last submission was accepted
    Success,
    /// Last submission failed (validation never lands here)
    Error,
}

impl FormStatus {
    /// Whether the submit control should accept clicks
    pub fn can_submit(self) -> bool {
        self != FormStatus::Sending
    }

    /// Banner text for this status, if any
    pub fn banner(self) -> Option<&'static str> {
        match self {
            FormStatus::Idle | FormStatus::Sending => None,
            FormStatus::Success => Some("Thank you! We'll contact you within 30 minutes."),
            FormStatus::Error => Some("Something went wrong. Please try again or call us directly."),
        }
    }
}

/// Owns the lead form input, its validation errors and its submission status
pub struct LeadFormController {
    form: LeadForm,
    errors: ValidationErrors,
    status: FormStatus,
    client_validation: bool,
    success_reset: Duration,
    sink: Arc<dyn LeadSink>,
}

impl LeadFormController {
    /// Create a controller delivering through `sink`
    pub fn new(config: &FormConfig, sink: Arc<dyn LeadSink>) -> Self {
        Self {
            form: LeadForm::default(),
            errors: ValidationErrors::default(),
            status: FormStatus::Idle,
            client_validation: config.client_validation,
            success_reset: Duration::from_millis(config.success_reset_ms),
            sink,
        }
    }

    /// Current input
    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    /// Current field errors
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Current status
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// How long a success banner stays before [`Self::acknowledge_success`] should run
    pub fn success_reset_after(&self) -> Duration {
        self.success_reset
    }

    /// Shared handle to the delivery sink, for running delivery off-thread
    pub fn sink(&self) -> Arc<dyn LeadSink> {
        Arc::clone(&self.sink)
    }

    /// Update one field. Editing clears that field's error and an error banner.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.clear(field);
        if self.status == FormStatus::Error {
            self.status = FormStatus::Idle;
        }
    }

    /// Validate and enter `Sending`, returning the payload to deliver
    ///
    /// Validation failures make no network call and return a finished
    /// submission (`Error` or `Success`) to `Idle`.
    pub fn begin_submit(&mut self) -> Result<LeadSubmission> {
        if self.status == FormStatus::Sending {
            debug!("Submit ignored: a submission is already in flight");
            return Err(SiteError::SubmissionInProgress);
        }

        let submission = if self.client_validation {
            match self.form.validate() {
                Ok(submission) => submission,
                Err(errors) => {
                    debug!("Lead form rejected with {} field error(s)", errors.len());
                    self.errors = errors.clone();
                    self.status = FormStatus::Idle;
                    return Err(SiteError::Validation(errors));
                }
            }
        } else {
            self.form.to_submission()
        };

        self.errors = ValidationErrors::default();
        self.status = FormStatus::Sending;
        info!("Submitting lead form");
        Ok(submission)
    }

    /// Apply the delivery outcome: success clears the form, failure keeps it
    pub fn finish_submit(&mut self, outcome: &Result<()>) {
        if self.status != FormStatus::Sending {
            warn!("Submission outcome arrived while not sending; ignoring");
            return;
        }

        match outcome {
            Ok(()) => {
                info!("Lead form submitted successfully");
                self.form = LeadForm::default();
                self.status = FormStatus::Success;
            }
            Err(e) => {
                warn!("Lead form submission failed: {}", e);
                self.status = FormStatus::Error;
            }
        }
    }

    /// Validate, deliver and apply the outcome on the calling thread
    pub fn submit(&mut self) -> Result<FormStatus> {
        let submission = self.begin_submit()?;
        let outcome = self.sink.deliver(&submission);
        self.finish_submit(&outcome);
        outcome.map(|()| self.status)
    }

    /// Return from `Success` to `Idle` once the banner has been shown
    pub fn acknowledge_success(&mut self) {
        if self.status == FormStatus::Success {
            self.status = FormStatus::Idle;
        }
    }
}
