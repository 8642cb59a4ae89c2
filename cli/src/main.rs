//! MAM CLI - rule-engine and maintenance commands for the MAM platform

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;
use mam_cli::cli::Cli;
use mam_cli::output::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = cli.run().await {
        let message = format!("{e:#}");
        match json::format_error(&message, "command_failed") {
            Ok(text) if json_mode => eprintln!("{text}"),
            _ => eprintln!("Error: {message}"),
        }
        std::process::exit(1);
    }
}
