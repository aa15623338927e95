//! Best-effort click analytics client.
//!
//! The client is explicitly constructed and passed to whoever needs
//! it; configuration arrives at construction time, never from ambient
//! process state. Callers treat `track` as fire-and-forget: a failure
//! is reported once as a warning and never retried, queued or shown
//! as a user-facing error.

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Construction-time configuration for the analytics client.
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// POST endpoint for click events.
    pub endpoint: String,
    /// Affiliate identifier attached to every event.
    pub affiliate: String,
    /// API access key. Absent key disables tracking entirely.
    pub access_key: Option<String>,
}

/// One search-result click.
#[derive(Debug, Clone, Serialize)]
pub struct ClickEvent {
    pub url: String,
    pub query: String,
    pub position: usize,
    pub module_code: String,
}

#[derive(Debug, Serialize)]
struct ClickPayload<'a> {
    #[serde(flatten)]
    event: &'a ClickEvent,
    affiliate: &'a str,
    access_key: &'a str,
}

/// What happened to a tracked event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    /// The endpoint accepted the event.
    Sent,
    /// Tracking is disabled (no access key configured).
    Disabled,
}

/// Structured errors for analytics calls.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("analytics request failed: {0}")]
    Network(String),

    #[error("analytics endpoint returned status {0}")]
    Status(u16),
}

/// Dependency-injected click-tracking client.
pub struct AnalyticsClient {
    client: reqwest::blocking::Client,
    config: AnalyticsConfig,
}

impl AnalyticsClient {
    pub fn new(config: AnalyticsConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("failed to build HTTP client");
        Self { client, config }
    }

    /// Is tracking enabled (an access key was supplied)?
    pub fn is_enabled(&self) -> bool {
        self.config.access_key.is_some()
    }

    /// Send one click event.
    ///
    /// Returns `Disabled` without touching the network when no access
    /// key is configured. Network failures and non-2xx statuses are
    /// returned as errors for the caller to log and swallow.
    pub fn track(&self, event: &ClickEvent) -> Result<TrackOutcome, AnalyticsError> {
        let access_key = match &self.config.access_key {
            Some(key) => key,
            None => return Ok(TrackOutcome::Disabled),
        };

        let payload = ClickPayload {
            event,
            affiliate: &self.config.affiliate,
            access_key,
        };

        let resp = self
            .client
            .post(&self.config.endpoint)
            .json(&payload)
            .send()
            .map_err(|e| AnalyticsError::Network(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            Ok(TrackOutcome::Sent)
        } else {
            Err(AnalyticsError::Status(status.as_u16()))
        }
    }
}
