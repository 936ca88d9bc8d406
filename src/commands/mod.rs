// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod config;
pub mod export;
pub mod mst;
pub mod shortest_path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// How command output is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    /// Emit JSON instead of text
    pub json: bool,
    /// Colour status lines
    pub color: bool,
}

impl Style {
    /// A line reporting an abnormal outcome
    #[must_use]
    pub fn alert(&self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// A summary line
    #[must_use]
    pub fn summary(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Open `path` for reading, or stdin when no path is given
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}
