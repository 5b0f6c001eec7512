//! Output formatting for the `check` command

use clap::ValueEnum;
use colored::Colorize;
use contact_core::{FieldError, ValidationErrors};
use serde::Serialize;
use std::fmt::Write;

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors
    #[default]
    Text,
    /// JSON format for machine processing
    Json,
}

/// Result of checking one submission file
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl CheckOutput {
    pub fn valid() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn invalid(errors: ValidationErrors) -> Self {
        Self {
            valid: false,
            errors: errors.into_vec(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();

        if self.valid {
            let _ = writeln!(out, "{} Submission is valid", "✓".green());
            return out;
        }

        let _ = writeln!(
            out,
            "{} Submission has {} invalid field(s):",
            "x".red(),
            self.errors.len().to_string().red()
        );
        for error in &self.errors {
            let _ = writeln!(
                out,
                "  {} {}: {}",
                "ERROR".red().bold(),
                error.path.cyan(),
                error.message
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact_core::validate_contact;
    use std::collections::HashMap;

    fn invalid_errors() -> ValidationErrors {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "A".to_string());
        fields.insert("email".to_string(), "ada@example.com".to_string());
        fields.insert("message".to_string(), "Hello there, friends".to_string());
        validate_contact(&fields).unwrap_err()
    }

    #[test]
    fn test_text_output_lists_fields() {
        colored::control::set_override(false);
        let text = CheckOutput::invalid(invalid_errors())
            .render(OutputFormat::Text)
            .unwrap();
        assert!(text.contains("1 invalid field(s)"));
        assert!(text.contains("name: Name must be at least 2 characters"));
    }

    #[test]
    fn test_json_output() {
        let json = CheckOutput::invalid(invalid_errors())
            .render(OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["errors"][0]["path"], "name");
        assert_eq!(value["errors"][0]["code"], "TOO_SHORT");

        let json = CheckOutput::valid().render(OutputFormat::Json).unwrap();
        assert!(json.contains("\"valid\": true"));
    }
}
