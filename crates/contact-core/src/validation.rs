//! Contact form validation
//!
//! The rule table in [`CONTACT_SCHEMA`] is the single definition of what a
//! valid submission looks like. The browser-side form and the HTTP endpoint
//! both call [`validate_contact`], each through its own [`FormFields`] view of
//! the input, so the two can never drift apart.
//!
//! Validation is pure: it reads the fields, and returns either a
//! [`NewContactSubmission`] or one [`FieldError`] per offending field.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::sync::OnceLock;

use crate::submission::NewContactSubmission;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Format constraint applied to a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Email,
}

impl FieldFormat {
    pub fn matches(self, value: &str) -> bool {
        match self {
            FieldFormat::Email => email_regex().is_match(value),
        }
    }
}

/// Constraints for a single form field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Field name, used as the error path
    pub path: &'static str,
    /// Display label used in the "is required" message
    pub label: &'static str,
    pub required: bool,
    /// Minimum length in characters
    pub min_chars: Option<usize>,
    pub format: Option<FieldFormat>,
    /// Message shown when the length or format constraint fails
    pub message: &'static str,
}

pub const NAME: FieldRule = FieldRule {
    path: "name",
    label: "Name",
    required: true,
    min_chars: Some(2),
    format: None,
    message: "Name must be at least 2 characters",
};

pub const EMAIL: FieldRule = FieldRule {
    path: "email",
    label: "Email",
    required: true,
    min_chars: None,
    format: Some(FieldFormat::Email),
    message: "Please enter a valid email address",
};

pub const MESSAGE: FieldRule = FieldRule {
    path: "message",
    label: "Message",
    required: true,
    min_chars: Some(10),
    format: None,
    message: "Message must be at least 10 characters",
};

pub const PHONE: FieldRule = FieldRule {
    path: "phone",
    label: "Phone",
    required: false,
    min_chars: None,
    format: None,
    message: "",
};

pub const SERVICE: FieldRule = FieldRule {
    path: "service",
    label: "Service",
    required: false,
    min_chars: None,
    format: None,
    message: "",
};

/// Every rule of the contact form, in the order errors are reported
pub const CONTACT_SCHEMA: [FieldRule; 5] = [NAME, EMAIL, MESSAGE, PHONE, SERVICE];

impl FieldRule {
    /// Check one raw value, returning the normalized text on success
    ///
    /// Optional fields that are absent or empty normalize to `None`.
    pub fn check(&self, value: FieldValue<'_>) -> Result<Option<String>, FieldError> {
        let text = match value {
            FieldValue::Absent if self.required => {
                return Err(self.error(
                    FieldErrorCode::RequiredFieldMissing,
                    format!("{} is required", self.label),
                ));
            }
            FieldValue::Absent => return Ok(None),
            FieldValue::Other(kind) => {
                return Err(self.error(
                    FieldErrorCode::TypeMismatch,
                    format!("Expected string, received {}", kind),
                ));
            }
            FieldValue::Text(text) => text,
        };

        if !self.required && text.is_empty() {
            return Ok(None);
        }

        if let Some(min) = self.min_chars {
            if text.chars().count() < min {
                return Err(self.error(FieldErrorCode::TooShort, self.message));
            }
        }

        if let Some(format) = self.format {
            if !format.matches(text) {
                return Err(self.error(FieldErrorCode::InvalidFormat, self.message));
            }
        }

        Ok(Some(text.to_string()))
    }

    fn error(&self, code: FieldErrorCode, message: impl Into<String>) -> FieldError {
        FieldError {
            path: self.path.to_string(),
            code,
            message: message.into(),
        }
    }
}

/// A raw field value as seen by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Missing or explicitly null
    Absent,
    Text(&'a str),
    /// Any non-text value, carrying its type name
    Other(&'static str),
}

/// A field-name to value mapping the validator can read
pub trait FormFields {
    fn field(&self, name: &str) -> FieldValue<'_>;
}

impl FormFields for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match self.get(name) {
            None | Some(serde_json::Value::Null) => FieldValue::Absent,
            Some(serde_json::Value::String(text)) => FieldValue::Text(text),
            Some(other) => FieldValue::Other(json_type_name(other)),
        }
    }
}

impl<S: BuildHasher> FormFields for HashMap<String, String, S> {
    fn field(&self, name: &str) -> FieldValue<'_> {
        self.get(name)
            .map_or(FieldValue::Absent, |text| FieldValue::Text(text))
    }
}

impl FormFields for BTreeMap<String, String> {
    fn field(&self, name: &str) -> FieldValue<'_> {
        self.get(name)
            .map_or(FieldValue::Absent, |text| FieldValue::Text(text))
    }
}

impl FormFields for NewContactSubmission {
    fn field(&self, name: &str) -> FieldValue<'_> {
        let value = match name {
            "name" => Some(self.name()),
            "email" => Some(self.email()),
            "message" => Some(self.message()),
            "phone" => self.phone(),
            "service" => self.service(),
            _ => None,
        };
        value.map_or(FieldValue::Absent, FieldValue::Text)
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Machine-readable reason for a field error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldErrorCode {
    RequiredFieldMissing,
    TypeMismatch,
    TooShort,
    InvalidFormat,
}

/// A single violated field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field
    pub path: String,
    pub code: FieldErrorCode,
    /// Human-readable reason, suitable for display next to the input
    pub message: String,
}

/// The set of field errors from one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.iter().map(|e| e.path.as_str()).collect();
        write!(f, "Invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for the named field, if it failed
    pub fn field(&self, path: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.message.as_str())
    }

    /// Drop the error for one field, typically after the user edits it
    pub fn clear_field(&mut self, path: &str) {
        self.errors.retain(|e| e.path != path);
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }

    fn take(&mut self, outcome: Result<Option<String>, FieldError>) -> Option<String> {
        match outcome {
            Ok(value) => value,
            Err(error) => {
                self.errors.push(error);
                None
            }
        }
    }
}

/// Validate a contact form
///
/// Every rule is checked so the caller gets all field errors at once.
pub fn validate_contact<F>(fields: &F) -> Result<NewContactSubmission, ValidationErrors>
where
    F: FormFields + ?Sized,
{
    let mut errors = ValidationErrors::default();

    let name = errors.take(NAME.check(fields.field(NAME.path)));
    let email = errors.take(EMAIL.check(fields.field(EMAIL.path)));
    let message = errors.take(MESSAGE.check(fields.field(MESSAGE.path)));
    let phone = errors.take(PHONE.check(fields.field(PHONE.path)));
    let service = errors.take(SERVICE.check(fields.field(SERVICE.path)));

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(
            NewContactSubmission::new(name, email, message, phone, service),
        ),
        _ => Err(errors),
    }
}

impl NewContactSubmission {
    /// Run the rule table again over an accepted record
    pub fn revalidate(&self) -> Result<(), ValidationErrors> {
        validate_contact(self).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_accepts_minimal_valid_form() {
        let body = object(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "message": "Interested in your consulting services."
        }));

        let submission = validate_contact(&body).unwrap();
        assert_eq!(submission.name(), "Ada Lovelace");
        assert_eq!(submission.email(), "ada@example.com");
        assert!(submission.phone().is_none());
        assert!(submission.service().is_none());
    }

    #[test]
    fn test_rejects_each_invalid_required_field() {
        let body = object(json!({
            "name": "A",
            "email": "not-an-email",
            "message": "short"
        }));

        let errors = validate_contact(&body).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.field("name"), Some("Name must be at least 2 characters"));
        assert_eq!(errors.field("email"), Some("Please enter a valid email address"));
        assert_eq!(
            errors.field("message"),
            Some("Message must be at least 10 characters")
        );
        let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["name", "email", "message"]);
    }

    #[test]
    fn test_missing_and_null_required_fields() {
        let body = object(json!({ "name": null }));

        let errors = validate_contact(&body).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.code == FieldErrorCode::RequiredFieldMissing));
        assert_eq!(errors.field("email"), Some("Email is required"));
    }

    #[test]
    fn test_non_string_values_are_type_mismatches() {
        let body = object(json!({
            "name": 42,
            "email": "ada@example.com",
            "message": "Interested in your consulting services.",
            "phone": ["555"]
        }));

        let errors = validate_contact(&body).unwrap_err();
        assert_eq!(errors.len(), 2);
        let name = errors.iter().find(|e| e.path == "name").unwrap();
        assert_eq!(name.code, FieldErrorCode::TypeMismatch);
        assert_eq!(name.message, "Expected string, received number");
        assert_eq!(errors.field("phone"), Some("Expected string, received array"));
    }

    #[test]
    fn test_optional_fields_normalize_to_none() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "Grace Hopper".to_string());
        fields.insert("email".to_string(), "grace@navy.mil".to_string());
        fields.insert("message".to_string(), "Please call me back soon.".to_string());
        fields.insert("phone".to_string(), String::new());
        fields.insert("service".to_string(), "cloud-migration".to_string());

        let submission = validate_contact(&fields).unwrap();
        assert_eq!(submission.phone(), None);
        assert_eq!(submission.service(), Some("cloud-migration"));
    }

    #[test]
    fn test_whitespace_optional_is_kept_verbatim() {
        let fields = object(json!({
            "name": "Grace Hopper",
            "email": "grace@navy.mil",
            "message": "Please call me back soon.",
            "phone": "   ",
            "service": null
        }));

        let submission = validate_contact(&fields).unwrap();
        assert_eq!(submission.phone(), Some("   "));
        assert_eq!(submission.service(), None);
        assert!(submission.revalidate().is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), "Zoë".to_string());
        fields.insert("email".to_string(), "zoe@example.org".to_string());
        fields.insert("message".to_string(), "ééééééééé".to_string());

        let errors = validate_contact(&fields).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.field("message").is_some());
    }

    #[test]
    fn test_email_grammar() {
        let valid = [
            "ada@example.com",
            "first.last@sub.example.co.uk",
            "o'brien+news@example.io",
        ];
        let invalid = [
            "not-an-email",
            "@example.com",
            "ada@",
            "ada@example",
            "ada..lovelace@example.com",
            ".ada@example.com",
            "ada@-example.com",
            "ada lovelace@example.com",
        ];

        for email in valid {
            assert!(FieldFormat::Email.matches(email), "{} should match", email);
        }
        for email in invalid {
            assert!(!FieldFormat::Email.matches(email), "{} should not match", email);
        }
    }

    #[test]
    fn test_revalidate_accepted_record() {
        let body = object(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "message": "Interested in your consulting services.",
            "phone": "+44 20 7946 0000"
        }));

        let submission = validate_contact(&body).unwrap();
        assert!(submission.revalidate().is_ok());
    }

    #[test]
    fn test_clear_field() {
        let mut errors = ValidationErrors::new(vec![
            NAME.check(FieldValue::Text("A")).unwrap_err(),
            EMAIL.check(FieldValue::Absent).unwrap_err(),
        ]);
        errors.clear_field("name");
        assert_eq!(errors.len(), 1);
        assert!(errors.field("name").is_none());
        assert_eq!(errors.to_string(), "Invalid fields: email");
    }

    #[test]
    fn test_errors_serialize_as_list() {
        let errors = ValidationErrors::new(vec![NAME.check(FieldValue::Text("")).unwrap_err()]);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            json!([{ "path": "name", "code": "TOO_SHORT", "message": "Name must be at least 2 characters" }])
        );
    }
}
