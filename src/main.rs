//! Entry point: parse CLI, set up logging and run the build.

use anyhow::Context;
use clap::Parser;
use nba_fantasy::{cli::NbaFantasy, commands::build_averages::handle_build_averages};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = NbaFantasy::parse().into_config();

    let summary = handle_build_averages(&config)
        .await
        .with_context(|| format!("failed to build fantasy averages for {}", config.season))?;

    println!(
        "✓ Wrote {} and {} ({} players)",
        summary.csv_path.display(),
        summary.json_path.display(),
        summary.rows
    );

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default: info for this crate, warn elsewhere).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nba_fantasy=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
