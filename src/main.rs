//! Contact Book - Main entry point
//!
//! Runs the interactive command loop on stdin/stdout. Logs go to stderr so
//! they never interleave with command output.

use anyhow::Result;
use contact_book::{Config, Repl};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // LOG_LEVEL only matters when RUST_LOG is absent or unparsable.
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config.fallback_filter()?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Starting contact book");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(stdin.lock(), stdout.lock()).with_prompt(config.prompt);
    repl.run()?;

    info!("Contact book shutdown complete");
    Ok(())
}
