//! Route definitions for the contact server
//!
//! - POST /api/contact - Validate and store a contact submission
//! - GET /health - Health check endpoint

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use contact_core::{
    validate_contact, InMemorySubmissionStore, SubmissionAccepted, SubmissionStore, CONTACT_ROUTE,
};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use super::{ApiError, HealthResponse, HealthStatus, SUBMISSION_ACCEPTED};
use crate::config::ServerConfig;

/// State shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SubmissionStore>,
    /// Start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }

    /// State backed by a fresh, empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemorySubmissionStore::new()))
    }
}

/// Create the router with all routes
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route(CONTACT_ROUTE, post(submit_contact))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.cors_allowed_origins)),
        )
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

/// POST /api/contact - Validate and store a contact submission
///
/// The body is read as raw JSON and run through the contact rules before
/// anything typed touches it. Exactly one store write happens per valid
/// request and none otherwise.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmissionAccepted>), ApiError> {
    let request_id = Uuid::new_v4();

    let Json(body) = body.map_err(|rejection| ApiError::MalformedBody {
        status: rejection_status(&rejection),
        detail: rejection.body_text(),
    })?;

    let serde_json::Value::Object(fields) = body else {
        return Err(ApiError::malformed("expected a JSON object"));
    };

    let submission = validate_contact(&fields).map_err(|errors| {
        tracing::info!(
            request_id = %request_id,
            error_count = errors.len(),
            "Rejected invalid contact submission"
        );
        ApiError::Validation(errors)
    })?;

    let record = state.store.create(submission).await.map_err(|err| {
        tracing::error!(request_id = %request_id, error = %err, "Contact submission not stored");
        ApiError::Store(err)
    })?;

    tracing::info!(
        request_id = %request_id,
        submission_id = record.id,
        "Accepted contact submission"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmissionAccepted {
            message: SUBMISSION_ACCEPTED.to_string(),
            id: record.id,
        }),
    ))
}

fn rejection_status(rejection: &JsonRejection) -> StatusCode {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        StatusCode::PAYLOAD_TOO_LARGE
    } else {
        StatusCode::BAD_REQUEST
    }
}

/// GET /health - Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let submissions = match state.store.count().await {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not read the store");
            None
        }
    };

    let status = if submissions.is_some() {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    Json(HealthResponse {
        status,
        submissions,
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_state_starts_empty() {
        let state = AppState::in_memory();
        assert_eq!(state.store.count().await.unwrap(), 0);
    }
}
