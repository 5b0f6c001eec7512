//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contact_core::{ErrorResponse, StoreError, ValidationErrors};
use thiserror::Error;

use super::{INVALID_FORM_DATA, SUBMISSION_FAILED};

/// Failures of a contact request
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more fields broke the contact rules
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// The body could not be read as a JSON object
    #[error("Malformed request body: {detail}")]
    MalformedBody { status: StatusCode, detail: String },

    /// The store failed to accept a valid submission
    #[error("Store failure: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        ApiError::MalformedBody {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody { status, .. } => *status,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::Validation(errors) => {
                ErrorResponse::with_errors(INVALID_FORM_DATA, errors.into_vec())
            }
            ApiError::MalformedBody { detail, .. } => {
                tracing::debug!(detail = %detail, "Rejected unreadable contact body");
                ErrorResponse::with_errors(INVALID_FORM_DATA, Vec::new())
            }
            // Logged by the handler with the request id; only the generic message leaves
            ApiError::Store(_) => ErrorResponse::message(SUBMISSION_FAILED),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(ValidationErrors::default()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::malformed("eof").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MalformedBody {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                detail: "too big".to_string(),
            }
            .status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ApiError::from(StoreError::unavailable("down")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_store_error_hides_details() {
        let response = ApiError::from(StoreError::unavailable("lock poisoned at 0xdead")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "message": SUBMISSION_FAILED }));
    }
}
