//! jotter - Turn talks, lectures, and videos into markdown notes
//!
//! Entry point for the jotter CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jotter::cli::Cli;
use jotter::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; diagnostics go to stderr so piped stdout stays
    // clean.
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Some(shell) = cli.completions {
        jotter::cli::completions::print(shell);
        return Ok(());
    }

    // Load configuration only when the pipeline actually runs.
    let settings = Settings::load()?;

    let source = match cli.source.as_deref() {
        Some(source) => source,
        // clap enforces SOURCE unless --completions was handled above.
        None => unreachable!(),
    };

    jotter::cli::commands::take_notes(&settings, source, &cli.dest, cli.transcript).await
}
