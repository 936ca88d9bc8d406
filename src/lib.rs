// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Graphyard library - weighted graph engine
//!
//! This crate provides an arena-backed weighted graph model, single-source
//! shortest paths with negative-cycle detection (Bellman-Ford), and minimum
//! spanning forests (Kruskal) on top of a disjoint-set forest.
//!
//! ```
//! use graphyard::shortest_path::{bellman_ford, WeightedEdge};
//!
//! let edges = [
//!     WeightedEdge::new(0, 1, 4),
//!     WeightedEdge::new(0, 2, 1),
//!     WeightedEdge::new(2, 1, 1),
//! ];
//! let paths = bellman_ford(3, &edges, 0).unwrap();
//! assert_eq!(paths.distance(1), Some(2));
//! assert_eq!(paths.path_to(1), Some(vec![0, 2, 1]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod disjoint_set;
pub mod error;
pub mod graph;
pub mod input;
pub mod mst;
pub mod shortest_path;

pub use error::{GraphError, Result};

/// Distance of an unreachable vertex, and the default cost of an unranked one
pub const INFINITY: i64 = i64::MAX;

/// Prelude for common imports
pub mod prelude {
    pub use crate::disjoint_set::{DisjointSet, SetId};
    pub use crate::error::{GraphError, Result};
    pub use crate::graph::{
        CostPathPair, CostVertexPair, Edge, EdgeId, Graph, GraphKind, Vertex, VertexId,
    };
    pub use crate::mst::{
        minimum_spanning_forest, spanning_forest, AdjacencyList, AdjacencyMatrix,
        SpanningForest, WeightedUndirected,
    };
    pub use crate::shortest_path::{bellman_ford, ShortestPaths, WeightedEdge};
    pub use crate::INFINITY;
}
