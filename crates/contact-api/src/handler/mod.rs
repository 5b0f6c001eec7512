//! HTTP handlers for the contact endpoint
//!
//! - `routes`: router construction, shared state, and handlers
//! - `error`: mapping of handler failures to status codes and JSON bodies
//!
//! Every handler completes with an explicit status and a JSON body; nothing
//! internal (store errors, rejection details) reaches the caller.

pub mod error;
pub mod routes;

pub use error::ApiError;
pub use routes::{create_router, health_check, submit_contact, AppState};

use serde::{Deserialize, Serialize};

/// Confirmation sent with `201 Created`
pub const SUBMISSION_ACCEPTED: &str = "Contact form submitted successfully";
/// Top-level message of a `400` response
pub const INVALID_FORM_DATA: &str = "Invalid form data";
/// Message of a `500` response
pub const SUBMISSION_FAILED: &str = "Failed to submit contact form";

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: HealthStatus,
    /// Number of stored submissions, when the store is reachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submissions: Option<usize>,
    pub uptime_seconds: u64,
    /// Timestamp of health check (ISO 8601)
    pub timestamp: String,
    pub version: String,
}

/// Health status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}
