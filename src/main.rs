//! gridpoints -- board inspection over a line protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Logs go to stderr and are filtered through `RUST_LOG`.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gridpoints::config::GameConfig;
use gridpoints::engine::{Flow, Session};
use gridpoints::protocol::parser::parse_command;

/// Score placements on a square board.
#[derive(Parser)]
#[command(name = "gridpoints", about = "Inspect and score square-grid boards")]
struct Cli {
    /// Path to TOML game configuration
    #[arg(long, default_value = "gridpoints.toml")]
    config: PathBuf,
}

/// Runs the main protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new(config).context("starting session")?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;

        let Some(cmd) = parse_command(&line) else {
            continue;
        };

        if session.handle(cmd, &mut out)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}
