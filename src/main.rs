//! lru_replay - replays an LRU cache operation script
//!
//! Reads a script from the path given as the first argument, or from stdin,
//! and prints the JSON report to stdout. Logs go to stderr.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_cache::models::ReplayScript;
use lru_cache::{replay, Config};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Script to replay (JSON); reads stdin when omitted
    script: Option<PathBuf>,
}

/// Main entry point for the replay binary.
///
/// # Startup Sequence
/// 1. Parse command line arguments
/// 2. Initialize tracing subscriber for logging
/// 3. Load configuration from environment variables
/// 4. Read and parse the script
/// 5. Replay it and print the report
fn main() -> Result<()> {
    let args = Args::parse();

    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_cache=info,lru_replay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: max_capacity={}, pretty_output={}, include_stats={}",
        config.max_capacity, config.pretty_output, config.include_stats
    );

    let text = read_script(args.script.as_deref())?;
    let script = ReplayScript::from_json(&text).context("Failed to parse script")?;

    let report = replay(&script, &config).context("Failed to replay script")?;
    println!("{}", report.to_json(config.pretty_output)?);

    Ok(())
}

/// Reads the script text from `path`, or from stdin when no path is given.
fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading script from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))
        }
        None => {
            info!("Reading script from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read script from stdin")?;
            Ok(text)
        }
    }
}
