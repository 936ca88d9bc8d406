// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph vertices

use super::edge::EdgeId;
use serde::Serialize;
use std::fmt;

/// Index of a vertex inside a [`Graph`](super::Graph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    /// Wrap a raw vertex index
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw vertex index
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex carrying a value, an auxiliary weight and its outgoing edges
///
/// The outgoing edge list is owned by the graph: it is filled in when the
/// vertex is wired into a [`Graph`](super::Graph) and never touched by the
/// algorithms.
#[derive(Debug, Clone, Serialize)]
pub struct Vertex<T> {
    value: T,
    weight: i64,
    edges: Vec<EdgeId>,
}

impl<T> Vertex<T> {
    /// Create a vertex with weight 0 and no edges
    #[must_use]
    pub fn new(value: T) -> Self {
        Self::with_weight(value, 0)
    }

    /// Create a vertex with the given auxiliary weight
    #[must_use]
    pub fn with_weight(value: T, weight: i64) -> Self {
        Self {
            value,
            weight,
            edges: Vec::new(),
        }
    }

    /// The vertex value
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replace the vertex value
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// The auxiliary weight (not used by any algorithm)
    #[must_use]
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Replace the auxiliary weight
    pub fn set_weight(&mut self, weight: i64) {
        self.weight = weight;
    }

    /// Outgoing edges, in insertion order
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub(super) fn attach(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    pub(super) fn detach_all(&mut self) {
        self.edges.clear();
    }
}
