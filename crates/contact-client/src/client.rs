//! Contact endpoint HTTP client
//!
//! Sends one validated submission per call to `POST /api/contact` and maps
//! the answer to a [`SubmissionReceipt`] or a [`ClientError`]. There is no
//! retry: a failed submission is reported and the user decides whether to
//! send it again.

use contact_core::{FieldError, NewContactSubmission, SubmissionAccepted, CONTACT_ROUTE};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::error::{ClientError, Result};

/// Success body of the contact endpoint
pub type SubmissionReceipt = SubmissionAccepted;

/// Configuration for the submission client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the contact server, without a trailing path
    pub base_url: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// HTTP client for the contact endpoint
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    client: Client,
    config: ClientConfig,
}

impl SubmissionClient {
    /// Create a client with the default timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig {
            base_url: base_url.into(),
            ..Default::default()
        })
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Send a validated submission
    ///
    /// Issues exactly one request.
    pub async fn submit(&self, submission: &NewContactSubmission) -> Result<SubmissionReceipt> {
        let url = self.endpoint();
        tracing::debug!(url = %url, "Sending contact submission");

        let response = self
            .client
            .post(&url)
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Contact submission request failed");
                ClientError::Transport(e.to_string())
            })?;

        let status = response.status();

        if status.is_success() {
            let receipt: SubmissionReceipt = response
                .json()
                .await
                .map_err(|e| ClientError::Decode(e.to_string()))?;
            tracing::debug!(submission_id = receipt.id, "Contact submission accepted");
            return Ok(receipt);
        }

        let body = response.text().await.unwrap_or_default();
        let error = rejection(status, &body);
        tracing::warn!(status = status.as_u16(), error = %error, "Contact submission rejected");
        Err(error)
    }

    /// Full URL of the contact endpoint
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            CONTACT_ROUTE
        )
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the timeout in milliseconds
    pub fn timeout_ms(&self) -> u64 {
        self.config.timeout_ms
    }
}

/// Map a non-success response to an error
///
/// Uses the server's message whenever the body carries one, otherwise a
/// generic message carrying the status code. Field errors are kept when
/// they parse and skipped one by one when they don't.
fn rejection(status: StatusCode, body: &str) -> ClientError {
    let parsed = serde_json::from_str::<Value>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|body| body.get("message"))
        .and_then(Value::as_str);

    match (message, &parsed) {
        (Some(message), Some(body)) => ClientError::Rejected {
            status: status.as_u16(),
            message: message.to_string(),
            errors: field_errors(body),
        },
        _ => ClientError::Rejected {
            status: status.as_u16(),
            message: format!("Request failed with status {}", status.as_u16()),
            errors: Vec::new(),
        },
    }
}

fn field_errors(body: &Value) -> Vec<FieldError> {
    body.get("errors")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Builder for SubmissionClient
pub struct SubmissionClientBuilder {
    config: ClientConfig,
}

impl SubmissionClientBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout_ms(mut self, timeout: u64) -> Self {
        self.config.timeout_ms = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<SubmissionClient> {
        SubmissionClient::with_config(self.config)
    }
}

impl Default for SubmissionClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
