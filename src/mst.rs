// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Minimum spanning forests via Kruskal's algorithm
//!
//! Input is an undirected weighted graph given either as an
//! [`AdjacencyMatrix`] or an [`AdjacencyList`]. The result is the same
//! representation restricted to the edges of a minimum spanning forest, one
//! tree per connected component.
//!
//! Equal-weight edges keep their extraction order (row-major, smaller
//! endpoint first) through a stable sort. When several forests share the
//! minimum weight, which one is returned follows from that order only.

use crate::disjoint_set::DisjointSet;
use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Largest difference tolerated between `w(i, j)` and `w(j, i)`
pub const SYMMETRY_TOLERANCE: f64 = 1e-6;

fn same_weight(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= SYMMETRY_TOLERANCE
}

/// An undirected weighted edge `u - v`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForestEdge {
    /// Smaller endpoint
    pub u: usize,
    /// Larger endpoint
    pub v: usize,
    /// Edge weight
    pub weight: f64,
}

/// Edges selected by Kruskal's algorithm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningForest {
    vertex_count: usize,
    edges: Vec<ForestEdge>,
    total_weight: f64,
}

impl SpanningForest {
    /// Number of vertices in the input graph
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Selected edges, in selection (ascending weight) order
    #[must_use]
    pub fn edges(&self) -> &[ForestEdge] {
        &self.edges
    }

    /// Sum of the selected edge weights
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of trees, isolated vertices included
    #[must_use]
    pub fn tree_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }
}

/// An undirected weighted graph Kruskal's algorithm can consume
pub trait WeightedUndirected: Sized {
    /// Number of vertices
    fn vertex_count(&self) -> usize;

    /// Check that every weight is mirrored.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::AsymmetricGraph`] naming the first entry
    /// without a matching reverse entry.
    fn check_symmetry(&self) -> Result<()>;

    /// Each undirected edge once, smaller endpoint first, in row-major order
    fn undirected_edges(&self) -> Vec<ForestEdge>;

    /// Build this representation holding exactly the forest's edges
    fn from_forest(forest: &SpanningForest) -> Self;
}

/// Dense symmetric weight matrix; `f64::INFINITY` means "no edge"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    weights: Vec<Vec<f64>>,
}

impl AdjacencyMatrix {
    /// Wrap a weight matrix. Shape and symmetry are checked by the algorithm.
    #[must_use]
    pub fn new(weights: Vec<Vec<f64>>) -> Self {
        Self { weights }
    }

    /// An `n x n` matrix with no edges
    #[must_use]
    pub fn disconnected(n: usize) -> Self {
        Self::new(vec![vec![f64::INFINITY; n]; n])
    }

    /// Set `w(u, v)` and `w(v, u)`
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is out of range.
    pub fn set_edge(&mut self, u: usize, v: usize, weight: f64) {
        self.weights[u][v] = weight;
        self.weights[v][u] = weight;
    }

    /// Weight of `u - v`, `None` when there is no edge
    #[must_use]
    pub fn weight(&self, u: usize, v: usize) -> Option<f64> {
        self.weights
            .get(u)
            .and_then(|row| row.get(v))
            .copied()
            .filter(|w| w.is_finite())
    }

    /// The raw rows
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.weights
    }
}

impl WeightedUndirected for AdjacencyMatrix {
    fn vertex_count(&self) -> usize {
        self.weights.len()
    }

    fn check_symmetry(&self) -> Result<()> {
        let n = self.weights.len();
        for (row, weights) in self.weights.iter().enumerate() {
            if weights.len() != n {
                return Err(GraphError::AsymmetricGraph {
                    row,
                    col: weights.len().min(n),
                });
            }
        }

        for row in 0..n {
            for col in row + 1..n {
                if !same_weight(self.weights[row][col], self.weights[col][row]) {
                    return Err(GraphError::AsymmetricGraph { row, col });
                }
            }
        }
        Ok(())
    }

    fn undirected_edges(&self) -> Vec<ForestEdge> {
        self.weights
            .iter()
            .enumerate()
            .flat_map(|(u, row)| {
                row.iter()
                    .enumerate()
                    .skip(u + 1)
                    .filter(|(_, w)| w.is_finite())
                    .map(move |(v, &weight)| ForestEdge { u, v, weight })
            })
            .collect()
    }

    fn from_forest(forest: &SpanningForest) -> Self {
        let mut matrix = Self::disconnected(forest.vertex_count());
        for edge in forest.edges() {
            matrix.set_edge(edge.u, edge.v, edge.weight);
        }
        matrix
    }
}

/// Sparse symmetric adjacency list; a missing key means "no edge"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyList {
    neighbours: Vec<BTreeMap<usize, f64>>,
}

impl AdjacencyList {
    /// `n` vertices without edges
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            neighbours: vec![BTreeMap::new(); n],
        }
    }

    /// Wrap per-vertex neighbour maps. Symmetry is checked by the algorithm.
    #[must_use]
    pub fn from_neighbours(neighbours: Vec<BTreeMap<usize, f64>>) -> Self {
        Self { neighbours }
    }

    /// Insert `u - v` in both directions
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is out of range.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) {
        self.neighbours[u].insert(v, weight);
        self.neighbours[v].insert(u, weight);
    }

    /// Neighbours of `u` and the weights towards them
    #[must_use]
    pub fn neighbours(&self, u: usize) -> Option<&BTreeMap<usize, f64>> {
        self.neighbours.get(u)
    }

    /// Weight of `u - v`, `None` when there is no edge
    #[must_use]
    pub fn weight(&self, u: usize, v: usize) -> Option<f64> {
        self.neighbours.get(u).and_then(|n| n.get(&v)).copied()
    }
}

impl WeightedUndirected for AdjacencyList {
    fn vertex_count(&self) -> usize {
        self.neighbours.len()
    }

    fn check_symmetry(&self) -> Result<()> {
        for (row, neighbours) in self.neighbours.iter().enumerate() {
            for (&col, &weight) in neighbours {
                let mirrored = self.weight(col, row);
                if !mirrored.is_some_and(|back| same_weight(weight, back)) {
                    return Err(GraphError::AsymmetricGraph { row, col });
                }
            }
        }
        Ok(())
    }

    fn undirected_edges(&self) -> Vec<ForestEdge> {
        self.neighbours
            .iter()
            .enumerate()
            .flat_map(|(u, neighbours)| {
                neighbours
                    .range(u + 1..)
                    .filter(|(_, w)| w.is_finite())
                    .map(move |(&v, &weight)| ForestEdge { u, v, weight })
            })
            .collect()
    }

    fn from_forest(forest: &SpanningForest) -> Self {
        let mut list = Self::new(forest.vertex_count());
        for edge in forest.edges() {
            list.add_edge(edge.u, edge.v, edge.weight);
        }
        list
    }
}

/// Select the edges of a minimum spanning forest
///
/// # Errors
///
/// Returns [`GraphError::AsymmetricGraph`] if the input is not symmetric;
/// no edge is selected in that case.
pub fn spanning_forest<G: WeightedUndirected>(graph: &G) -> Result<SpanningForest> {
    graph.check_symmetry()?;

    let vertex_count = graph.vertex_count();
    let mut candidates = graph.undirected_edges();
    candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight));
    debug!(vertex_count, candidates = candidates.len(), "Running Kruskal");

    let mut sets = DisjointSet::with_capacity(vertex_count);
    let ids: Vec<_> = (0..vertex_count).map(|v| sets.make_set(v)).collect();

    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut total_weight = 0.0;
    for edge in candidates {
        if edges.len() + 1 >= vertex_count {
            break;
        }
        if sets.union(ids[edge.u], ids[edge.v]) {
            total_weight += edge.weight;
            edges.push(edge);
        }
    }

    debug!(
        selected = edges.len(),
        trees = sets.set_count(),
        total_weight,
        "Spanning forest built"
    );

    Ok(SpanningForest {
        vertex_count,
        edges,
        total_weight,
    })
}

/// The input graph restricted to a minimum spanning forest
///
/// # Errors
///
/// Returns [`GraphError::AsymmetricGraph`] if the input is not symmetric.
pub fn minimum_spanning_forest<G: WeightedUndirected>(graph: &G) -> Result<G> {
    spanning_forest(graph).map(|forest| G::from_forest(&forest))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    fn classic() -> AdjacencyMatrix {
        let mut matrix = AdjacencyMatrix::disconnected(4);
        matrix.set_edge(0, 1, 1.0);
        matrix.set_edge(1, 2, 2.0);
        matrix.set_edge(0, 2, 3.0);
        matrix.set_edge(2, 3, 4.0);
        matrix
    }

    fn is_acyclic(forest: &SpanningForest) -> bool {
        let mut sets = DisjointSet::new();
        let ids: Vec<_> = (0..forest.vertex_count()).map(|v| sets.make_set(v)).collect();
        forest.edges().iter().all(|e| sets.union(ids[e.u], ids[e.v]))
    }

    #[test]
    fn test_classic_matrix() {
        let forest = spanning_forest(&classic()).unwrap();

        assert_eq!(forest.edges().len(), 3);
        assert!((forest.total_weight() - 7.0).abs() < 1e-9);
        assert!(is_acyclic(&forest));
        assert_eq!(forest.tree_count(), 1);
    }

    #[test]
    fn test_result_is_same_representation() {
        let result = minimum_spanning_forest(&classic()).unwrap();

        assert_eq!(result.weight(0, 1), Some(1.0));
        assert_eq!(result.weight(1, 0), Some(1.0));
        assert_eq!(result.weight(2, 1), Some(2.0));
        assert_eq!(result.weight(3, 2), Some(4.0));
        assert_eq!(result.weight(0, 2), None);
        assert_eq!(result.rows()[0][2], INF);
        assert!(result.check_symmetry().is_ok());
    }

    #[test]
    fn test_disconnected_components() {
        let mut matrix = AdjacencyMatrix::disconnected(4);
        matrix.set_edge(0, 1, 2.0);
        matrix.set_edge(2, 3, 5.0);

        let forest = spanning_forest(&matrix).unwrap();
        assert_eq!(forest.edges().len(), 2);
        assert_eq!(forest.tree_count(), 2);
        assert!(forest
            .edges()
            .iter()
            .all(|e| (e.u < 2) == (e.v < 2)));
    }

    #[test]
    fn test_no_edges() {
        let forest = spanning_forest(&AdjacencyMatrix::disconnected(3)).unwrap();
        assert!(forest.edges().is_empty());
        assert_eq!(forest.total_weight(), 0.0);

        let empty = spanning_forest(&AdjacencyList::new(0)).unwrap();
        assert!(empty.edges().is_empty());
    }

    #[test]
    fn test_asymmetric_matrix_rejected() {
        let mut weights = vec![vec![INF; 2]; 2];
        weights[0][1] = 5.0;
        weights[1][0] = 7.0;

        let err = spanning_forest(&AdjacencyMatrix::new(weights)).unwrap_err();
        assert_eq!(err, GraphError::AsymmetricGraph { row: 0, col: 1 });
    }

    #[test]
    fn test_tolerance_and_diagonal() {
        let weights = vec![
            vec![0.0, 2.0 + 1e-9, INF],
            vec![2.0, 42.0, 1.0],
            vec![INF, 1.0, -3.0],
        ];
        let forest = spanning_forest(&AdjacencyMatrix::new(weights)).unwrap();
        assert_eq!(forest.edges().len(), 2);
    }

    #[test]
    fn test_ragged_matrix_rejected() {
        let weights = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(matches!(
            spanning_forest(&AdjacencyMatrix::new(weights)),
            Err(GraphError::AsymmetricGraph { row: 1, col: 1 })
        ));
    }

    #[test]
    fn test_adjacency_list() {
        let mut list = AdjacencyList::new(4);
        list.add_edge(0, 1, 1.0);
        list.add_edge(1, 2, 2.0);
        list.add_edge(0, 2, 3.0);
        list.add_edge(2, 3, 4.0);

        let result = minimum_spanning_forest(&list).unwrap();
        assert_eq!(result.neighbours(2).unwrap().len(), 2);
        assert_eq!(result.weight(0, 2), None);
        assert_eq!(result.weight(3, 2), Some(4.0));
    }

    #[test]
    fn test_asymmetric_list_rejected() {
        let mut neighbours = vec![BTreeMap::new(); 2];
        neighbours[0].insert(1, 5.0);
        neighbours[1].insert(0, 7.0);
        assert!(matches!(
            spanning_forest(&AdjacencyList::from_neighbours(neighbours)),
            Err(GraphError::AsymmetricGraph { row: 0, col: 1 })
        ));

        let mut dangling = vec![BTreeMap::new(); 2];
        dangling[1].insert(4, 1.0);
        assert!(matches!(
            spanning_forest(&AdjacencyList::from_neighbours(dangling)),
            Err(GraphError::AsymmetricGraph { row: 1, col: 4 })
        ));
    }
}
