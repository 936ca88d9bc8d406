// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

use crate::config::{self, Config};
use anyhow::Result;

/// Print the effective configuration
pub fn run(config: &Config) -> Result<()> {
    tracing::info!("Config file: {}", config::default_path().display());
    print!("{}", config::to_toml(config)?);
    Ok(())
}
