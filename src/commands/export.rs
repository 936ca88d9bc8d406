// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Export command - builds a graph from an edge list and prints it

use super::open_input;
use crate::graph::{Edge, Graph, GraphKind, Vertex, VertexId};
use crate::input::{read_edge_list, EdgeList};
use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Graphviz DOT format
    Dot,
    /// JSON format
    Json,
}

impl ExportFormat {
    /// Parse format from string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Some(Self::Dot),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Build the graph model for an edge list; vertex `i` holds the value `i`
#[must_use]
pub fn build_graph(list: &EdgeList, kind: GraphKind) -> Graph<usize> {
    let vertices = (0..list.vertex_count).map(Vertex::new).collect();
    let edges = list
        .edges
        .iter()
        .map(|e| Edge::new(VertexId::new(e.from), VertexId::new(e.to), e.weight))
        .collect();
    Graph::from_parts(vertices, edges, kind)
}

/// Run the export command
pub fn run(
    input: Option<PathBuf>,
    format: &str,
    directed: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let Some(export_format) = ExportFormat::parse(format) else {
        bail!("Unknown export format: {}. Supported: dot, json", format);
    };
    info!("Exporting to {}", format);

    let list = read_edge_list(open_input(input.as_deref())?)
        .context("Failed to read edge list")?;
    let kind = if directed {
        GraphKind::Directed
    } else {
        GraphKind::Undirected
    };
    let graph = build_graph(&list, kind);

    let mut content = match export_format {
        ExportFormat::Dot => graph.to_dot(),
        ExportFormat::Json => {
            serde_json::to_string_pretty(&graph).context("Failed to serialize graph to JSON")?
        }
    };
    if !content.ends_with('\n') {
        content.push('\n');
    }

    match output {
        Some(path) => {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
        }
    }

    Ok(())
}
