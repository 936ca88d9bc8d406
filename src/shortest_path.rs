// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Single-source shortest paths (Bellman-Ford)
//!
//! Handles negative edge weights. A negative-weight cycle reachable from
//! the source aborts the search with [`GraphError::NegativeCycleDetected`];
//! no partial distances are returned in that case.
//!
//! Distances use [`INFINITY`] (`i64::MAX`) for unreachable vertices.
//! Relaxation runs on `i128` working distances so extreme weights neither
//! wrap nor flatten a real improvement into "no change"; the results are
//! clamped back into `i64`, where anything at or past `i64::MAX` reads as
//! unreachable.

use crate::error::{GraphError, Result};
use crate::graph::{CostPathPair, CostVertexPair, EdgeId, Graph, VertexId};
use crate::INFINITY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

/// A directed edge between two vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge {
    /// Source vertex index
    pub from: usize,
    /// Target vertex index
    pub to: usize,
    /// Edge weight, may be negative
    pub weight: i64,
}

impl WeightedEdge {
    /// Create an edge `from -> to`
    #[must_use]
    pub const fn new(from: usize, to: usize, weight: i64) -> Self {
        Self { from, to, weight }
    }
}

impl From<(usize, usize, i64)> for WeightedEdge {
    fn from((from, to, weight): (usize, usize, i64)) -> Self {
        Self::new(from, to, weight)
    }
}

/// Distances and predecessor links from a single source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<i64>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// The source vertex
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Raw distances, [`INFINITY`] where unreachable
    #[must_use]
    pub fn distances(&self) -> &[i64] {
        &self.distances
    }

    /// Raw predecessor links; `None` for the source and unreachable vertices
    #[must_use]
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// Number of vertices covered
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Distance to `target`, `None` if unreachable or out of range
    #[must_use]
    pub fn distance(&self, target: usize) -> Option<i64> {
        self.distances.get(target).copied().filter(|&d| d != INFINITY)
    }

    /// Whether `target` can be reached from the source
    #[must_use]
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance(target).is_some()
    }

    /// Vertices on the shortest path from the source to `target`, both ends
    /// included. `None` if `target` is unreachable.
    #[must_use]
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path: Vec<usize> =
            std::iter::successors(Some(target), |&v| self.predecessors[v])
                .take(self.distances.len())
                .collect();
        path.reverse();

        (path.first() == Some(&self.source)).then_some(path)
    }
}

/// Distances plus, for every vertex, the index of the edge that last
/// improved it.
struct Relaxation {
    distances: Vec<i64>,
    via: Vec<Option<usize>>,
}

/// Candidate distance for `edge.to` through `edge`, if it improves on the
/// current one. `None` in `distances` means "not reached yet".
fn improvement(distances: &[Option<i128>], edge: &WeightedEdge) -> Option<i128> {
    let candidate = distances[edge.from]?.saturating_add(i128::from(edge.weight));
    distances[edge.to]
        .map_or(true, |current| candidate < current)
        .then_some(candidate)
}

/// Clamp a working distance into the public `i64` range
fn narrow(distance: Option<i128>) -> i64 {
    distance.map_or(INFINITY, |d| {
        i64::try_from(d).unwrap_or(if d < 0 { i64::MIN } else { INFINITY })
    })
}

fn relax(vertex_count: usize, edges: &[WeightedEdge], source: usize) -> Result<Relaxation> {
    if source >= vertex_count {
        return Err(GraphError::InvalidSource {
            vertex: source,
            vertex_count,
        });
    }
    if let Some(edge) = edges
        .iter()
        .find(|e| e.from >= vertex_count || e.to >= vertex_count)
    {
        return Err(GraphError::invalid_edge(format!(
            "edge {} -> {} outside a graph of {vertex_count} vertices",
            edge.from, edge.to
        )));
    }

    debug!(vertex_count, edges = edges.len(), source, "Running Bellman-Ford");

    let mut distances: Vec<Option<i128>> = vec![None; vertex_count];
    let mut via = vec![None; vertex_count];
    distances[source] = Some(0);

    for pass in 1..vertex_count {
        let mut updated = false;
        for (index, edge) in edges.iter().enumerate() {
            if let Some(candidate) = improvement(&distances, edge) {
                distances[edge.to] = Some(candidate);
                via[edge.to] = Some(index);
                updated = true;
            }
        }
        trace!(pass, updated, "Relaxation pass");

        if !updated {
            debug!(passes = pass, "Distances settled early");
            break;
        }
    }

    if edges.iter().any(|edge| improvement(&distances, edge).is_some()) {
        warn!(source, "Negative cycle reachable from source");
        return Err(GraphError::NegativeCycleDetected);
    }

    Ok(Relaxation {
        distances: distances.into_iter().map(narrow).collect(),
        via,
    })
}

/// Shortest distances from `source` over a directed edge list.
///
/// # Errors
///
/// - [`GraphError::InvalidSource`] if `source >= vertex_count`
/// - [`GraphError::InvalidEdge`] if an edge names a vertex outside the graph
/// - [`GraphError::NegativeCycleDetected`] if a negative cycle is reachable
///   from `source`
pub fn bellman_ford(
    vertex_count: usize,
    edges: &[WeightedEdge],
    source: usize,
) -> Result<ShortestPaths> {
    let Relaxation { distances, via } = relax(vertex_count, edges, source)?;
    let predecessors = via
        .into_iter()
        .map(|edge| edge.map(|i| edges[i].from))
        .collect();

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}

/// Edge list of a graph model, in storage order (reciprocals included)
#[must_use]
pub fn edges_of<T>(graph: &Graph<T>) -> Vec<WeightedEdge> {
    graph
        .edges()
        .iter()
        .map(|e| WeightedEdge::new(e.from().index(), e.to().index(), e.cost()))
        .collect()
}

/// Cost and edge sequence of the shortest path to every reachable vertex
///
/// The source maps to a zero-cost empty path. Unreachable vertices are
/// absent from the map.
///
/// # Errors
///
/// Same as [`bellman_ford`].
pub fn shortest_paths_in<T>(
    graph: &Graph<T>,
    source: VertexId,
) -> Result<BTreeMap<VertexId, CostPathPair>> {
    let edges = edges_of(graph);
    let Relaxation { distances, via } = relax(graph.vertex_count(), &edges, source.index())?;

    let paths = distances
        .iter()
        .enumerate()
        .filter(|(_, d)| **d != INFINITY)
        .map(|(target, &cost)| {
            let mut path: Vec<EdgeId> = Vec::new();
            let mut current = target;
            while let Some(edge) = via[current] {
                if path.len() == edges.len() {
                    break;
                }
                path.push(EdgeId::new(edge));
                current = edges[edge].from;
            }
            path.reverse();
            (VertexId::new(target), CostPathPair::new(cost, path))
        })
        .collect();

    Ok(paths)
}

/// Every vertex ranked by its distance from `source`
///
/// Unreachable vertices keep an infinite cost and sort last.
///
/// # Errors
///
/// Same as [`bellman_ford`].
pub fn ranked_vertices<T>(graph: &Graph<T>, source: VertexId) -> Result<Vec<CostVertexPair>> {
    let paths = bellman_ford(graph.vertex_count(), &edges_of(graph), source.index())?;

    let mut ranked: Vec<_> = graph
        .vertex_ids()
        .map(|id| {
            let mut pair = CostVertexPair::new(id);
            if let Some(cost) = paths.distance(id.index()) {
                pair.set_cost(cost);
            }
            pair
        })
        .collect();
    ranked.sort();
    Ok(ranked)
}
