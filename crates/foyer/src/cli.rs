//! Command-line interface for foyer.
//!
//! Defines the CLI contract using clap derive macros. Every widget property
//! can be set from the command line or a `FOYER_*` environment variable,
//! and any of them may also come from a TOML config file (CLI wins).
//!
//! # Examples
//!
//! ```bash
//! # Greet a named visitor with a tight counter
//! foyer --first Alice --last Smith --max 3
//!
//! # Load settings from a file, override one of them
//! foyer --config foyer.toml --min 1
//!
//! # Headless contract check with debug logging
//! foyer --self-check -vv
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Foyer - interactive host for the curtsy greeting counter.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "foyer",
    author,
    version,
    about = "Interactive host for the curtsy greeting counter"
)]
pub struct Cli {
    /// First name shown in the greeting
    #[arg(long, env = "FOYER_FIRST")]
    pub first: Option<String>,

    /// Middle name shown in the greeting
    #[arg(long, env = "FOYER_MIDDLE")]
    pub middle: Option<String>,

    /// Last name shown in the greeting
    #[arg(long, env = "FOYER_LAST")]
    pub last: Option<String>,

    /// Lower counter bound
    #[arg(long, env = "FOYER_MIN")]
    pub min: Option<i32>,

    /// Upper counter bound
    #[arg(long, env = "FOYER_MAX")]
    pub max: Option<i32>,

    /// Initial counter value (clamped into bounds)
    #[arg(long, env = "FOYER_COUNT")]
    pub count: Option<i32>,

    /// Path to a TOML config file
    #[arg(long, short = 'c', env = "FOYER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Run the headless self-check and exit
    #[arg(long)]
    pub self_check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["foyer"]);
        assert!(cli.first.is_none());
        assert!(cli.min.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.verbosity, 0);
        assert!(!cli.self_check);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "foyer",
            "--first",
            "Alice",
            "--last",
            "Smith",
            "--max",
            "3",
            "-vv",
            "--self-check",
        ]);
        assert_eq!(cli.first.as_deref(), Some("Alice"));
        assert_eq!(cli.last.as_deref(), Some("Smith"));
        assert_eq!(cli.max, Some(3));
        assert_eq!(cli.verbosity, 2);
        assert!(cli.self_check);
    }
}
