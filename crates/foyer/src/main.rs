#![forbid(unsafe_code)]

//! # Foyer
//!
//! Demo host for the curtsy greeting counter.
//!
//! Foyer plays the part of the rendering framework: it owns the event loop,
//! translates terminal input into key messages, executes the commands the
//! widget returns, consumes its notifications (logging them), and re-renders
//! after every update.
//!
//! ## Usage
//!
//! ```bash
//! foyer --first Alice --last Smith      # interactive session
//! foyer --config foyer.toml             # configure from a TOML file
//! foyer --self-check                    # headless contract check (for CI)
//! ```

mod cli;
mod config;
mod host;
mod self_check;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbosity);

    let config = config::Config::resolve(&cli).context("failed to load configuration")?;

    if cli.self_check {
        self_check::run(&config)
    } else {
        host::run(config.widget())
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
/// Logs go to stderr so they don't tear the rendered view.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
