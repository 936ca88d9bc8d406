// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management for the command-line harness
//!
//! Sources, lowest precedence first: built-in defaults, a TOML file, then
//! `GRAPHYARD_*` environment variables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for overrides (`GRAPHYARD_SOURCE=2`)
pub const ENV_PREFIX: &str = "GRAPHYARD";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Default source vertex for shortest-path runs
    pub source: usize,
    /// Print results as JSON
    pub json: bool,
    /// Colour status lines
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            source: 0,
            json: false,
            color: true,
        }
    }
}

/// Default location of the configuration file
#[must_use]
pub fn default_path() -> PathBuf {
    directories::ProjectDirs::from("com", "hyperpolymath", "graphyard")
        .map(|d| d.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("graphyard.toml"))
}

/// Load configuration from `path` (or the default location) and the
/// environment. A missing file is not an error.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let file = path.map_or_else(default_path, Path::to_path_buf);
    // An explicitly named file has to exist.
    let required = path.is_some();

    let settings = config::Config::builder()
        .add_source(
            config::File::new(&file.to_string_lossy(), config::FileFormat::Toml)
                .required(required),
        )
        .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()
        .with_context(|| format!("Failed to read configuration from {}", file.display()))?;

    settings
        .try_deserialize()
        .with_context(|| format!("Invalid configuration in {}", file.display()))
}

/// Render a configuration as TOML
pub fn to_toml(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize configuration")
}
