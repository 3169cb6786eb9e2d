//! Lead delivery
//!
//! `LeadSink` is the seam between the form state machine and the network.
//! `HttpLeadSink` posts the submission as JSON to the configured form
//! collection endpoint using a blocking reqwest client; callers run it off the
//! UI thread.

use crate::config::FormConfig;
use crate::error::{Result, SiteError};
use crate::form::LeadSubmission;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Destination for validated lead submissions
pub trait LeadSink: Send + Sync {
    /// Deliver one submission. Any failure is reported, never retried.
    fn deliver(&self, submission: &LeadSubmission) -> Result<()>;
}

/// Posts submissions to an HTTP form collection endpoint
pub struct HttpLeadSink {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpLeadSink {
    /// Create a sink for `endpoint` with the given request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(format!("ProjectTown/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                warn!("Failed to create HTTP client: {}", e);
                // Preserve error chain by wrapping the source error
                SiteError::ConfigError(Box::new(e))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Create a sink from the form section of the configuration
    pub fn from_config(config: &FormConfig) -> Result<Self> {
        Self::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Endpoint this sink posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl LeadSink for HttpLeadSink {
    fn deliver(&self, submission: &LeadSubmission) -> Result<()> {
        debug!("Posting lead submission to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(submission)
            .send()
            .map_err(|e| {
                warn!("Failed to post lead submission: {}", e);
                SiteError::TransportError(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Form endpoint returned error status: {}", status);
            return Err(SiteError::SubmissionRejected(status.as_u16()));
        }

        info!("Lead submission accepted ({})", status);
        Ok(())
    }
}
