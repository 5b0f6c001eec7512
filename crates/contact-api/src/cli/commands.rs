//! CLI command definitions for the contact server

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::output::OutputFormat;
use crate::config::LogFormat;

/// Contact form backend
///
/// Serve the contact endpoint, or check a submission file against the
/// contact form rules without starting a server.
#[derive(Parser, Debug)]
#[command(name = "contact-server")]
#[command(about = "Contact form backend - accept and validate contact submissions", long_about = None)]
#[command(version)]
pub struct ServerCli {
    #[command(subcommand)]
    pub command: ServerCommands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum ServerCommands {
    /// Start the HTTP server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long, env = "CONTACT_CONFIG")]
        config: Option<PathBuf>,

        /// IP address to bind to
        #[arg(long, env = "CONTACT_HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "CONTACT_PORT")]
        port: Option<u16>,

        /// Log output format
        #[arg(long, value_enum, env = "CONTACT_LOG_FORMAT")]
        log_format: Option<LogFormat>,
    },

    /// Validate a JSON submission file
    ///
    /// Runs the same rules as the endpoint. Exits with 1 when the
    /// submission is invalid.
    Check {
        /// Path to a JSON file holding one submission object
        #[arg(short, long)]
        file: PathBuf,

        /// Output format for the result
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },
}
