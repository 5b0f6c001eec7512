//! Contact submission core
//!
//! Shared by the HTTP endpoint and the submitting client so both sides enforce
//! the same rules against the same record shapes.
//!
//! ## Modules
//!
//! - [`submission`]: the validated record ([`NewContactSubmission`]) and the
//!   stored record ([`ContactSubmission`]).
//! - [`validation`]: the contact form rule table and [`validate_contact`].
//! - [`store`]: the [`SubmissionStore`] seam and its in-memory implementation.
//! - [`wire`]: request/response bodies exchanged over `POST /api/contact`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use contact_core::{validate_contact, InMemorySubmissionStore, SubmissionStore};
//! use std::collections::HashMap;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut fields = HashMap::new();
//!     fields.insert("name".to_string(), "Ada Lovelace".to_string());
//!     fields.insert("email".to_string(), "ada@example.com".to_string());
//!     fields.insert(
//!         "message".to_string(),
//!         "Interested in your consulting services.".to_string(),
//!     );
//!
//!     let submission = validate_contact(&fields).unwrap();
//!     let store = InMemorySubmissionStore::new();
//!     let stored = store.create(submission).await.unwrap();
//!     assert_eq!(stored.id, 1);
//!     assert!(stored.phone.is_none());
//! }
//! ```

pub mod error;
pub mod store;
pub mod submission;
pub mod validation;
pub mod wire;

pub use error::{StoreError, StoreResult};
pub use store::{InMemorySubmissionStore, SubmissionStore};
pub use submission::{ContactSubmission, NewContactSubmission, SubmissionId};
pub use validation::{
    validate_contact, FieldError, FieldErrorCode, FieldFormat, FieldRule, FieldValue, FormFields,
    ValidationErrors, CONTACT_SCHEMA,
};
pub use wire::{ErrorResponse, SubmissionAccepted, CONTACT_ROUTE};
