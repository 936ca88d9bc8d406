// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Cost-annotated vertices and paths produced by searches

use super::edge::EdgeId;
use super::vertex::VertexId;
use crate::INFINITY;
use serde::Serialize;

/// A vertex ranked by the cost of reaching it
///
/// Orders by cost first, then by vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CostVertexPair {
    cost: i64,
    vertex: VertexId,
}

impl CostVertexPair {
    /// Pair `vertex` with an infinite cost
    #[must_use]
    pub const fn new(vertex: VertexId) -> Self {
        Self::with_cost(INFINITY, vertex)
    }

    /// Pair `vertex` with a known cost
    #[must_use]
    pub const fn with_cost(cost: i64, vertex: VertexId) -> Self {
        Self { cost, vertex }
    }

    /// Cost of reaching the vertex, [`INFINITY`] if unknown
    #[must_use]
    pub const fn cost(&self) -> i64 {
        self.cost
    }

    /// Update the cost
    pub fn set_cost(&mut self, cost: i64) {
        self.cost = cost;
    }

    /// The ranked vertex
    #[must_use]
    pub const fn vertex(&self) -> VertexId {
        self.vertex
    }

    /// Whether a finite cost has been recorded
    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        self.cost != INFINITY
    }
}

/// Total cost of a path together with the edges it walks
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CostPathPair {
    cost: i64,
    path: Vec<EdgeId>,
}

impl CostPathPair {
    /// Create a path record
    #[must_use]
    pub fn new(cost: i64, path: Vec<EdgeId>) -> Self {
        Self { cost, path }
    }

    /// Summed cost of every edge in the path
    #[must_use]
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Edges from the source to the destination, in walking order
    #[must_use]
    pub fn path(&self) -> &[EdgeId] {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cost_is_infinite() {
        let pair = CostVertexPair::new(VertexId::new(3));
        assert_eq!(pair.cost(), INFINITY);
        assert!(!pair.is_reachable());
    }

    #[test]
    fn test_ordering_by_cost_then_vertex() {
        let mut pairs = vec![
            CostVertexPair::new(VertexId::new(0)),
            CostVertexPair::with_cost(5, VertexId::new(2)),
            CostVertexPair::with_cost(5, VertexId::new(1)),
            CostVertexPair::with_cost(-1, VertexId::new(4)),
        ];
        pairs.sort();

        let order: Vec<_> = pairs.iter().map(|p| p.vertex().index()).collect();
        assert_eq!(order, vec![4, 1, 2, 0]);
    }
}
