//! Contact submission records
//!
//! A [`NewContactSubmission`] can only be produced by the validator, so every
//! record that reaches a [`crate::SubmissionStore`] has passed the full rule
//! table. The store turns it into a [`ContactSubmission`] by assigning the id
//! and the acceptance timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned submission identifier
pub type SubmissionId = u64;

/// A validated contact submission that has not been stored yet
///
/// Serializes to the request body of `POST /api/contact`. Optional fields are
/// written as `null` rather than omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewContactSubmission {
    name: String,
    email: String,
    message: String,
    phone: Option<String>,
    service: Option<String>,
}

impl NewContactSubmission {
    pub(crate) fn new(
        name: String,
        email: String,
        message: String,
        phone: Option<String>,
        service: Option<String>,
    ) -> Self {
        Self {
            name,
            email,
            message,
            phone,
            service,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// Attach store-assigned identity, producing the stored record
    pub fn into_stored(self, id: SubmissionId, created_at: DateTime<Utc>) -> ContactSubmission {
        ContactSubmission {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
            phone: self.phone,
            service: self.service,
            created_at,
        }
    }
}

/// A submission held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: SubmissionId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
impl ContactSubmission {
    /// Whether the user-supplied fields equal those of `submission`
    pub(crate) fn has_fields_of(&self, submission: &NewContactSubmission) -> bool {
        self.name == submission.name
            && self.email == submission.email
            && self.message == submission.message
            && self.phone == submission.phone
            && self.service == submission.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewContactSubmission {
        NewContactSubmission::new(
            "Ada Lovelace".to_string(),
            "ada@example.com".to_string(),
            "Interested in your consulting services.".to_string(),
            None,
            Some("strategy".to_string()),
        )
    }

    #[test]
    fn test_new_submission_serializes_absent_fields_as_null() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["phone"], serde_json::Value::Null);
        assert!(json.as_object().unwrap().contains_key("phone"));
        assert_eq!(json["service"], "strategy");
    }

    #[test]
    fn test_stored_record_uses_camel_case_and_null() {
        let created_at = Utc::now();
        let stored = sample().into_stored(7, created_at);

        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["id"], 7);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["phone"], serde_json::Value::Null);
    }

    #[test]
    fn test_into_stored_keeps_fields() {
        let submission = sample();
        let stored = submission.clone().into_stored(1, Utc::now());
        assert!(stored.has_fields_of(&submission));
        assert_eq!(stored.id, 1);
    }
}
