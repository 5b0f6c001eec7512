//! User feedback collaborators
//!
//! The form controller never renders anything itself. Outcomes are handed
//! to a [`Notifier`] as a [`Notice`], with display text looked up through a
//! [`Translator`] so locale handling stays outside this crate.

use std::collections::HashMap;

/// Translation keys used by the contact form
pub mod keys {
    pub const SUCCESS_TITLE: &str = "contact.success.title";
    pub const SUCCESS_DESCRIPTION: &str = "contact.success.description";
    pub const FAILURE_TITLE: &str = "contact.failure.title";
    pub const SUBMIT: &str = "contact.submit";
    pub const SUBMITTING: &str = "contact.submitting";
}

/// Success or failure marker for a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

/// Presents notices to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Supplies display strings by key
pub trait Translator: Send + Sync {
    /// Look up a key, `None` when the catalog has no entry
    fn translate(&self, key: &str) -> Option<String>;

    /// Look up a key, falling back to the key itself
    fn text(&self, key: &str) -> String {
        self.translate(key).unwrap_or_else(|| key.to_string())
    }
}

/// Fixed in-memory catalog
#[derive(Debug, Clone, Default)]
pub struct StaticTranslator {
    entries: HashMap<String, String>,
}

impl StaticTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// English catalog for the contact form
    pub fn english() -> Self {
        Self::new()
            .with(keys::SUCCESS_TITLE, "Message sent")
            .with(
                keys::SUCCESS_DESCRIPTION,
                "Thanks for reaching out. We'll get back to you soon.",
            )
            .with(keys::FAILURE_TITLE, "Something went wrong")
            .with(keys::SUBMIT, "Send message")
            .with(keys::SUBMITTING, "Sending...")
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl Translator for StaticTranslator {
    fn translate(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_catalog_covers_form_keys() {
        let t = StaticTranslator::english();
        for key in [
            keys::SUCCESS_TITLE,
            keys::SUCCESS_DESCRIPTION,
            keys::FAILURE_TITLE,
            keys::SUBMIT,
            keys::SUBMITTING,
        ] {
            assert!(t.translate(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let t = StaticTranslator::new().with("greeting", "Hallo");
        assert_eq!(t.text("greeting"), "Hallo");
        assert_eq!(t.text("farewell"), "farewell");
    }

    #[test]
    fn test_notice_kind() {
        assert!(Notice::success("a", "b").is_success());
        assert!(!Notice::failure("a", "b").is_success());
    }
}
