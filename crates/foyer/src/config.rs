//! Runtime configuration for foyer.
//!
//! The [`Config`] struct is the single source of truth for widget settings,
//! independent of how they were specified (CLI flags, environment, file).
//! Resolution order: defaults, then config file, then CLI/env overrides.

use std::fs;
use std::path::Path;

use curtsy::greeting_counter::GreetingCounter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Cli;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config file was not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Widget settings, resolved from all sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// First name shown in the greeting.
    pub first: Option<String>,
    /// Middle name shown in the greeting.
    pub middle: Option<String>,
    /// Last name shown in the greeting.
    pub last: Option<String>,
    /// Lower counter bound.
    pub min: i32,
    /// Upper counter bound.
    pub max: i32,
    /// Initial counter value.
    pub count: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first: None,
            middle: None,
            last: None,
            min: 0,
            max: 10,
            count: 0,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Resolves the effective configuration for the given CLI invocation.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if cli.first.is_some() {
            config.first = cli.first.clone();
        }
        if cli.middle.is_some() {
            config.middle = cli.middle.clone();
        }
        if cli.last.is_some() {
            config.last = cli.last.clone();
        }
        if let Some(min) = cli.min {
            config.min = min;
        }
        if let Some(max) = cli.max {
            config.max = max;
        }
        if let Some(count) = cli.count {
            config.count = count;
        }

        Ok(config)
    }

    /// Builds the configured widget.
    #[must_use]
    pub fn widget(&self) -> GreetingCounter {
        let mut widget = GreetingCounter::new()
            .min(self.min)
            .max(self.max)
            .with_count(self.count);
        widget.set_names(
            self.first.as_deref(),
            self.middle.as_deref(),
            self.last.as_deref(),
        );
        widget
    }
}
