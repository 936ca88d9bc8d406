// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Shortest-path command - Bellman-Ford over an edge list read from input

use super::{open_input, Style};
use crate::error::GraphError;
use crate::input::{read_edge_list, EdgeList};
use crate::shortest_path::bellman_ford;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// JSON shape of a shortest-path run
#[derive(Debug, Serialize)]
struct Report {
    source: usize,
    negative_cycle: bool,
    /// `null` for unreachable vertices
    distances: Vec<Option<i64>>,
    paths: Vec<Option<Vec<usize>>>,
}

/// Run the shortest-path command
pub fn run(input: Option<PathBuf>, source: usize, style: Style) -> Result<()> {
    let list = read_edge_list(open_input(input.as_deref())?)
        .context("Failed to read edge list")?;

    let mut stdout = io::stdout().lock();
    render(&list, source, style, &mut stdout)
}

/// Solve and write the result for `list`
pub fn render(list: &EdgeList, source: usize, style: Style, out: &mut impl Write) -> Result<()> {
    info!(
        vertices = list.vertex_count,
        edges = list.edges.len(),
        source,
        "Computing shortest paths"
    );

    let report = match bellman_ford(list.vertex_count, &list.edges, source) {
        Ok(paths) => Report {
            source,
            negative_cycle: false,
            distances: (0..paths.vertex_count()).map(|v| paths.distance(v)).collect(),
            paths: (0..paths.vertex_count()).map(|v| paths.path_to(v)).collect(),
        },
        Err(GraphError::NegativeCycleDetected) => Report {
            source,
            negative_cycle: true,
            distances: Vec::new(),
            paths: Vec::new(),
        },
        Err(err) => return Err(err).context("Shortest-path search failed"),
    };

    if style.json {
        serde_json::to_writer_pretty(&mut *out, &report).context("Failed to serialize result")?;
        writeln!(out)?;
        return Ok(());
    }

    if report.negative_cycle {
        writeln!(out, "{}", style.alert("Negative cycle detected"))?;
        return Ok(());
    }

    for (vertex, distance) in report.distances.iter().enumerate() {
        match distance {
            Some(d) => writeln!(out, "{vertex}: {d}")?,
            None => writeln!(out, "{vertex}: INF")?,
        }
    }
    for path in &report.paths {
        match path {
            Some(path) => {
                let line: Vec<String> = path.iter().map(ToString::to_string).collect();
                writeln!(out, "{}", line.join(" "))?;
            }
            None => writeln!(out, "unreachable")?,
        }
    }

    Ok(())
}
