//! Contact form controller
//!
//! [`ContactForm`] holds what the user has typed, the field errors to show
//! next to each input, and whether a submission is in flight. It is shared
//! by reference (`Arc<ContactForm>`) between the input handlers and the
//! submit action, so every method takes `&self`.

use contact_core::{validate_contact, ValidationErrors, CONTACT_SCHEMA};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::client::{SubmissionClient, SubmissionReceipt};
use crate::error::{ClientError, Result};
use crate::feedback::{keys, Notice, Notifier, Translator};

#[derive(Debug)]
struct FormState {
    values: BTreeMap<String, String>,
    errors: ValidationErrors,
}

impl FormState {
    fn blank() -> Self {
        Self {
            values: CONTACT_SCHEMA
                .iter()
                .map(|rule| (rule.path.to_string(), String::new()))
                .collect(),
            errors: ValidationErrors::default(),
        }
    }
}

/// User input state for the contact form
#[derive(Debug)]
pub struct ContactForm {
    state: Mutex<FormState>,
    in_flight: Arc<AtomicBool>,
}

impl ContactForm {
    /// Empty form with one blank value per known field
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FormState::blank()),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        // Form state stays consistent after a panicking reader, so recover it.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Update one input and clear its stale error
    pub fn set(&self, field: &str, value: impl Into<String>) {
        let mut state = self.state();
        state.values.insert(field.to_string(), value.into());
        state.errors.clear_field(field);
    }

    /// Current text of one input
    pub fn value(&self, field: &str) -> Option<String> {
        self.state().values.get(field).cloned()
    }

    pub fn errors(&self) -> ValidationErrors {
        self.state().errors.clone()
    }

    /// Error message to render next to one input
    pub fn field_error(&self, field: &str) -> Option<String> {
        self.state().errors.field(field).map(str::to_string)
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Handle that observes the in-flight flag from elsewhere
    pub fn submission_indicator(&self) -> SubmitIndicator {
        SubmitIndicator {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    /// Label for the submit button
    pub fn submit_label(&self, translator: &dyn Translator) -> String {
        if self.is_submitting() {
            translator.text(keys::SUBMITTING)
        } else {
            translator.text(keys::SUBMIT)
        }
    }

    /// Clear all input and errors
    pub fn reset(&self) {
        *self.state() = FormState::blank();
    }

    /// Validate and send the form
    ///
    /// Invalid input is recorded as field errors and no request is made.
    /// On acceptance the user is notified and the form is reset; on any
    /// other outcome the user is notified and their input is kept.
    pub async fn submit(
        &self,
        client: &SubmissionClient,
        notifier: &dyn Notifier,
        translator: &dyn Translator,
    ) -> Result<SubmissionReceipt> {
        let validated = {
            let mut state = self.state();
            let outcome = validate_contact(&state.values);
            state.errors = match &outcome {
                Ok(_) => ValidationErrors::default(),
                Err(errors) => errors.clone(),
            };
            outcome
        };
        let submission = validated?;

        let _guard = InFlight::acquire(&self.in_flight).ok_or(ClientError::AlreadySubmitting)?;

        match client.submit(&submission).await {
            Ok(receipt) => {
                tracing::info!(submission_id = receipt.id, "Contact form submitted");
                self.reset();
                notifier.notify(Notice::success(
                    translator.text(keys::SUCCESS_TITLE),
                    translator.text(keys::SUCCESS_DESCRIPTION),
                ));
                Ok(receipt)
            }
            Err(error) => {
                let server_errors = error.field_errors();
                if !server_errors.is_empty() {
                    self.state().errors = ValidationErrors::new(server_errors.to_vec());
                }
                notifier.notify(Notice::failure(
                    translator.text(keys::FAILURE_TITLE),
                    error.user_message(),
                ));
                Err(error)
            }
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of whether a form is submitting
#[derive(Debug, Clone)]
pub struct SubmitIndicator {
    in_flight: Arc<AtomicBool>,
}

impl SubmitIndicator {
    pub fn is_active(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Holds the in-flight flag until dropped
struct InFlight<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
