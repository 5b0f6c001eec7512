//! Error types for submitting the contact form

use contact_core::{FieldError, ValidationErrors};
use thiserror::Error;

/// Why a submission did not go through
#[derive(Error, Debug)]
pub enum ClientError {
    /// Local validation failed; no request was sent
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// The server answered with a non-success status
    #[error("{message}")]
    Rejected {
        status: u16,
        message: String,
        /// Per-field errors, when the server reported any
        errors: Vec<FieldError>,
    },

    /// The request could not be completed
    #[error("Network error: {0}")]
    Transport(String),

    /// A success response carried an unexpected body
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// The HTTP client could not be built
    #[error("Client configuration error: {0}")]
    Configuration(String),

    /// Another submission from the same form is still in flight
    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

impl ClientError {
    /// Single line to show the user
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Field errors to render next to the inputs
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ClientError::Rejected { errors, .. } => errors,
            _ => &[],
        }
    }

    /// The HTTP status, for server rejections
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
