//! Contact form backend
//!
//! Accepts contact submissions on `POST /api/contact`, re-validates them with
//! the shared contact rules, and stores accepted ones in an in-memory
//! [`contact_core::SubmissionStore`].
//!
//! ## Responses
//!
//! | Outcome | Status | Body |
//! |---|---|---|
//! | Accepted | 201 | `{"message": "...", "id": 1}` |
//! | Invalid fields | 400 | `{"message": "Invalid form data", "errors": [...]}` |
//! | Store failure | 500 | `{"message": "Failed to submit contact form"}` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use contact_api::{serve, AppState, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::default();
//!     serve(config, AppState::in_memory()).await.unwrap();
//! }
//! ```

pub mod cli;
pub mod config;
pub mod handler;
pub mod server;
pub mod telemetry;

pub use config::{ConfigError, LogFormat, ServerConfig};
pub use handler::{create_router, ApiError, AppState, HealthResponse, HealthStatus};
pub use server::{serve, serve_until, ServerError};
pub use telemetry::init_tracing;
