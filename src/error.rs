// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types shared by the graph model and both algorithms

use thiserror::Error;

/// Errors raised by graph construction and the graph algorithms
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// An edge was built with an endpoint that is missing or not in the graph
    #[error("invalid edge: {reason}")]
    InvalidEdge {
        /// Which endpoint was missing and why
        reason: String,
    },

    /// Bellman-Ford was started from a vertex outside `[0, vertex_count)`
    #[error("invalid source vertex {vertex} for a graph of {vertex_count} vertices")]
    InvalidSource {
        /// Requested source index
        vertex: usize,
        /// Number of vertices in the graph
        vertex_count: usize,
    },

    /// A negative-weight cycle is reachable from the source
    #[error("negative cycle detected")]
    NegativeCycleDetected,

    /// Kruskal input does not describe an undirected graph
    #[error("asymmetric graph: weight at ({row}, {col}) has no matching ({col}, {row}) entry")]
    AsymmetricGraph {
        /// Row (or list owner) of the offending entry
        row: usize,
        /// Column (or neighbour) of the offending entry
        col: usize,
    },
}

impl GraphError {
    pub(crate) fn invalid_edge(reason: impl Into<String>) -> Self {
        Self::InvalidEdge {
            reason: reason.into(),
        }
    }
}

/// Result alias for graph operations
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GraphError::InvalidSource {
            vertex: 7,
            vertex_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid source vertex 7 for a graph of 3 vertices"
        );

        let err = GraphError::AsymmetricGraph { row: 0, col: 1 };
        assert!(err.to_string().contains("(0, 1)"));
        assert!(err.to_string().contains("(1, 0)"));

        assert_eq!(
            GraphError::NegativeCycleDetected.to_string(),
            "negative cycle detected"
        );
    }
}
