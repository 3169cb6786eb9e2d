//! Error types for the `ProjectTown` site
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains so the log keeps the
//! full cause while the page shows a single generic message.

use crate::form::ValidationErrors;
use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the `ProjectTown` site
#[derive(Debug, Error)]
pub enum SiteError {
    /// One or more lead form fields failed client-side validation
    #[error("Form validation failed: {0}")]
    Validation(ValidationErrors),

    /// A submission is already in flight
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    /// The form endpoint answered with a non-success status
    #[error("Form endpoint returned status {0}")]
    SubmissionRejected(u16),

    /// The request never produced a response (DNS, TLS, timeout, ...)
    /// Preserves the underlying error source for full error chain transparency
    #[error("Failed to reach form endpoint: {0}")]
    TransportError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl SiteError {
    /// Whether this error belongs to the generic "delivery failed" class shown as one banner
    pub fn is_delivery_failure(&self) -> bool {
        matches!(
            self,
            SiteError::SubmissionRejected(_) | SiteError::TransportError(_)
        )
    }
}

/// Result type alias for `ProjectTown` operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Convert an error to a user-friendly message
///
/// Network failures and non-2xx answers deliberately map to the same text:
/// visitors only need to know the message did not go through.
pub fn get_user_friendly_error(error: &SiteError) -> String {
    match error {
        SiteError::Validation(errors) => {
            format!("Please correct the highlighted fields:\n\n{errors}")
        }
        SiteError::SubmissionInProgress => {
            "Your request is already being sent. Please wait a moment.".to_string()
        }
        SiteError::SubmissionRejected(_) | SiteError::TransportError(_) => {
            "Something went wrong. Please try again or call us directly.".to_string()
        }
        SiteError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             The site will run with default settings.\n\
             Check that the configuration directory is writable."
            .to_string(),
        SiteError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        SiteError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The site will use default settings."
            )
        }
    }
}
