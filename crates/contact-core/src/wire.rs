//! Bodies exchanged over the contact endpoint
//!
//! Shared by the server, which writes them, and the client, which reads them.

use serde::{Deserialize, Serialize};

use crate::submission::SubmissionId;
use crate::validation::FieldError;

/// Route accepting contact submissions
pub const CONTACT_ROUTE: &str = "/api/contact";

/// `201 Created` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAccepted {
    pub message: String,
    pub id: SubmissionId,
}

/// Body of every non-success response
///
/// `errors` is present only on validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            message: message.into(),
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_error_omits_errors_key() {
        let body = serde_json::to_value(ErrorResponse::message("Failed")).unwrap();
        assert_eq!(body, json!({ "message": "Failed" }));
    }

    #[test]
    fn test_error_body_parses_without_errors() {
        let body: ErrorResponse = serde_json::from_str(r#"{"message":"Nope"}"#).unwrap();
        assert_eq!(body.message, "Nope");
        assert!(body.errors.is_none());
    }

    #[test]
    fn test_validation_error_body_keeps_empty_list() {
        let body = serde_json::to_value(ErrorResponse::with_errors("Invalid form data", vec![]))
            .unwrap();
        assert_eq!(body, json!({ "message": "Invalid form data", "errors": [] }));
    }
}
