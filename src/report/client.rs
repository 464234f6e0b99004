//! HTTP submission of a report

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use tracing::{debug, info, warn};

use crate::error::ReportError;

use super::Payload;

/// Result of a submission the collector could be asked about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Collector answered 200
    Posted,
    /// Collector answered with another status
    Rejected(StatusCode),
    /// Collector could not be reached
    Unreachable(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Posted)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Posted => write!(f, "Posted successfully"),
            Outcome::Rejected(status) => {
                write!(f, "Failed to post (status code {})", status.as_u16())
            }
            Outcome::Unreachable(reason) => {
                write!(f, "An error occurred while attempting to connect: {}", reason)
            }
        }
    }
}

/// Sends payloads to a fixed collector endpoint
pub struct Reporter {
    client: Client,
    endpoint: String,
}

impl Reporter {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ReportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `payload` as JSON. Connection failures and timeouts are reported
    /// as [`Outcome::Unreachable`] rather than as errors.
    pub fn submit(&self, payload: &Payload) -> Result<Outcome, ReportError> {
        let body = payload.to_json()?;
        debug!(endpoint = %self.endpoint, bytes = body.len(), "posting report");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send();

        match response {
            Ok(response) => {
                let status = response.status();
                info!(status = status.as_u16(), "collector responded");
                if status == StatusCode::OK {
                    Ok(Outcome::Posted)
                } else {
                    Ok(Outcome::Rejected(status))
                }
            }
            Err(e) if e.is_connect() || e.is_timeout() => {
                warn!(error = %e, "collector unreachable");
                Ok(Outcome::Unreachable(e.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
