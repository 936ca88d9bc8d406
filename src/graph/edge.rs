// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph edges

use super::vertex::VertexId;
use crate::error::{GraphError, Result};
use serde::Serialize;
use std::fmt;

/// Index of an edge inside a [`Graph`](super::Graph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeId(usize);

impl EdgeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw edge index
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed, weighted connection between two vertices
///
/// Endpoints are fixed at construction; only the cost can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    from: VertexId,
    to: VertexId,
    cost: i64,
}

impl Edge {
    /// Create an edge `from -> to`
    #[must_use]
    pub const fn new(from: VertexId, to: VertexId, cost: i64) -> Self {
        Self { from, to, cost }
    }

    /// Create an edge from endpoints that may be missing
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidEdge`] if either endpoint is `None`.
    pub fn try_new(from: Option<VertexId>, to: Option<VertexId>, cost: i64) -> Result<Self> {
        match (from, to) {
            (Some(from), Some(to)) => Ok(Self::new(from, to, cost)),
            (None, _) => Err(GraphError::invalid_edge("missing source vertex")),
            (_, None) => Err(GraphError::invalid_edge("missing target vertex")),
        }
    }

    /// Source vertex
    #[must_use]
    pub const fn from(&self) -> VertexId {
        self.from
    }

    /// Target vertex
    #[must_use]
    pub const fn to(&self) -> VertexId {
        self.to
    }

    /// Traversal cost
    #[must_use]
    pub const fn cost(&self) -> i64 {
        self.cost
    }

    /// Change the traversal cost
    pub fn set_cost(&mut self, cost: i64) {
        self.cost = cost;
    }

    /// The same connection in the opposite direction
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.to, self.from, self.cost)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.cost)
    }
}
