//! depsync CLI entry point
//!
//! Parses command-line arguments, runs the reconciliation, and turns any
//! failure into a user-friendly error report with a non-zero exit code.

use anyhow::Result;
use clap::Parser;
use depsync_cli::cli;
use depsync_cli::core::user_friendly_error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logging goes to stderr so it never mixes with the change report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
