//! CLI module for the contact server

pub mod commands;
pub mod output;

pub use commands::{ServerCli, ServerCommands};
pub use output::{CheckOutput, OutputFormat};

use contact_core::validate_contact;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    /// The submission broke at least one rule
    InvalidSubmission = 1,
    /// The file could not be read or is not a JSON object
    InvalidInput = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Errors raised by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object with the contact form fields")]
    NotAnObject,
}

impl CliError {
    /// Every CLI error stems from the input file
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::InvalidInput
    }
}

/// Validate a submission file and print the result
pub fn run_check(file: &Path, format: OutputFormat) -> Result<ExitCode, CliError> {
    let content = std::fs::read_to_string(file).map_err(|source| CliError::Io {
        path: file.to_path_buf(),
        source,
    })?;

    let output = check_submission(&content)?;
    println!("{}", output.render(format)?);

    Ok(if output.valid {
        ExitCode::Success
    } else {
        ExitCode::InvalidSubmission
    })
}

/// Validate one JSON submission document
pub fn check_submission(content: &str) -> Result<CheckOutput, CliError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let serde_json::Value::Object(fields) = value else {
        return Err(CliError::NotAnObject);
    };

    Ok(match validate_contact(&fields) {
        Ok(_) => CheckOutput::valid(),
        Err(errors) => CheckOutput::invalid(errors),
    })
}
