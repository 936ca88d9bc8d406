// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Minimum spanning forest command - Kruskal over a matrix or edge list

use super::{open_input, Style};
use crate::input::{read_adjacency_list, read_matrix};
use crate::mst::{spanning_forest, SpanningForest, WeightedUndirected};
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Run the mst command
///
/// Reads a weight matrix, or an undirected edge list when `list` is set.
pub fn run(input: Option<PathBuf>, list: bool, style: Style) -> Result<()> {
    let reader = open_input(input.as_deref())?;
    let forest = if list {
        let graph = read_adjacency_list(reader).context("Failed to read edge list")?;
        solve(&graph)?
    } else {
        let graph = read_matrix(reader).context("Failed to read weight matrix")?;
        solve(&graph)?
    };

    let mut stdout = io::stdout().lock();
    render(&forest, style, &mut stdout)
}

fn solve<G: WeightedUndirected>(graph: &G) -> Result<SpanningForest> {
    info!(vertices = graph.vertex_count(), "Computing minimum spanning forest");
    spanning_forest(graph).context("Minimum spanning forest failed")
}

/// Write the selected edges and their total weight
pub fn render(forest: &SpanningForest, style: Style, out: &mut impl Write) -> Result<()> {
    if style.json {
        serde_json::to_writer_pretty(&mut *out, forest).context("Failed to serialize result")?;
        writeln!(out)?;
        return Ok(());
    }

    for edge in forest.edges() {
        writeln!(out, "{} - {}: {}", edge.u, edge.v, edge.weight)?;
    }
    let summary = format!(
        "total: {} ({} edges, {} trees)",
        forest.total_weight(),
        forest.edges().len(),
        forest.tree_count()
    );
    writeln!(out, "{}", style.summary(&summary))?;
    Ok(())
}
