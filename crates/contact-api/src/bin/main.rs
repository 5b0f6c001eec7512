//! Contact server entry point
//!
//! # Usage
//!
//! ```bash
//! # Serve on the default port with an in-memory store
//! contact-server serve
//!
//! # Override from a config file and flags
//! contact-server serve --config contact.toml --port 9000 --log-format json
//!
//! # Check a submission without starting a server
//! contact-server check --file submission.json --output json
//! ```

use clap::Parser;
use contact_api::cli::{self, ServerCli, ServerCommands};
use contact_api::{init_tracing, serve, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = ServerCli::parse();

    match cli.command {
        ServerCommands::Serve {
            config,
            host,
            port,
            log_format,
        } => {
            let base = match config {
                Some(path) => ServerConfig::from_file(path)?,
                None => ServerConfig::default(),
            };
            let config = base.with_overrides(host, port, log_format);

            init_tracing(config.log_format)?;
            tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting contact server");

            serve(config, AppState::in_memory()).await?;
        }

        ServerCommands::Check { file, output } => {
            let code = match cli::run_check(&file, output) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    e.exit_code()
                }
            };
            std::process::exit(code.into());
        }
    }

    Ok(())
}
