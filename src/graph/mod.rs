// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Weighted graph model with directed and undirected semantics
//!
//! Vertices and edges live in two arenas owned by the [`Graph`] and refer
//! to each other by index ([`VertexId`], [`EdgeId`]). In an undirected graph
//! every inserted edge is stored together with a reciprocal edge pointing
//! the other way, so the algorithms can always walk `from -> to`.

mod edge;
mod pairs;
mod vertex;

pub use edge::{Edge, EdgeId};
pub use pairs::{CostPathPair, CostVertexPair};
pub use vertex::{Vertex, VertexId};

use crate::error::{GraphError, Result};
use petgraph::graph::DiGraph;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Write as _};
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Direction semantics of a graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Edges are one-way
    Directed,
    /// Every edge is mirrored by a reciprocal edge
    #[default]
    Undirected,
}

/// A weighted graph over vertex values of type `T`
#[derive(Debug, Clone, Serialize)]
pub struct Graph<T> {
    kind: GraphKind,
    vertices: Vec<Vertex<T>>,
    edges: Vec<Edge>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new(GraphKind::default())
    }
}

impl<T> Graph<T> {
    /// Create an empty graph
    #[must_use]
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Build a graph from vertices and the edges between them
    ///
    /// Edge endpoints index into `vertices`. Edges pointing past the end of
    /// `vertices` are dropped. Any outgoing edge lists the supplied vertices
    /// already carry are replaced by the wiring done here.
    #[must_use]
    pub fn from_parts(vertices: Vec<Vertex<T>>, edges: Vec<Edge>, kind: GraphKind) -> Self {
        let mut graph = Self {
            kind,
            vertices,
            edges: Vec::with_capacity(edges.len()),
        };
        for vertex in &mut graph.vertices {
            vertex.detach_all();
        }

        for edge in edges {
            if graph.contains(edge.from()) && graph.contains(edge.to()) {
                graph.wire(edge);
            } else {
                debug!(%edge, vertices = graph.vertices.len(), "Dropping dangling edge");
            }
        }

        graph
    }

    /// Direction semantics
    #[must_use]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Add a vertex and return its id
    pub fn add_vertex(&mut self, vertex: Vertex<T>) -> VertexId {
        self.vertices.push(vertex);
        VertexId::new(self.vertices.len() - 1)
    }

    /// Add an edge `from -> to`, plus its reciprocal when undirected
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidEdge`] if either endpoint is not a vertex
    /// of this graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, cost: i64) -> Result<EdgeId> {
        if !self.contains(from) {
            return Err(GraphError::invalid_edge(format!(
                "source vertex {from} not in graph"
            )));
        }
        if !self.contains(to) {
            return Err(GraphError::invalid_edge(format!(
                "target vertex {to} not in graph"
            )));
        }
        Ok(self.wire(Edge::new(from, to, cost)))
    }

    /// Store `edge`, attach it to its source and mirror it if undirected.
    ///
    /// The reciprocal is always pushed directly after the forward edge.
    fn wire(&mut self, edge: Edge) -> EdgeId {
        let id = self.push_edge(edge);
        if self.kind == GraphKind::Undirected {
            self.push_edge(edge.reversed());
        }
        id
    }

    fn push_edge(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.vertices[edge.from().index()].attach(id);
        self.edges.push(edge);
        id
    }

    /// Whether `id` names a vertex of this graph
    #[must_use]
    pub fn contains(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    /// All vertices, in insertion order
    #[must_use]
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// All stored edges, reciprocals included
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a vertex
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.index())
    }

    /// Mutable access to a vertex's value and weight
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<T>> {
        self.vertices.get_mut(id.index())
    }

    /// Look up an edge
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Mutable access to an edge's cost
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id.index())
    }

    /// Outgoing edges of `id`, in insertion order
    pub fn outgoing(&self, id: VertexId) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.vertex(id)
            .map(|v| v.edges())
            .unwrap_or_default()
            .iter()
            .map(|&edge_id| (edge_id, &self.edges[edge_id.index()]))
    }

    /// Ids of every vertex
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Number of vertices
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored edges, reciprocals included
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no vertices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges as inserted by the caller, without synthetic reciprocals
    pub fn inserted_edges(&self) -> impl Iterator<Item = &Edge> {
        let step = match self.kind {
            GraphKind::Directed => 1,
            GraphKind::Undirected => 2,
        };
        self.edges.iter().step_by(step)
    }

    /// Convert to a petgraph graph with matching vertex and edge order
    ///
    /// Vertex `i` becomes `NodeIndex::new(i)`; every stored edge, reciprocals
    /// included, becomes a directed petgraph edge.
    #[must_use]
    pub fn to_petgraph(&self) -> DiGraph<T, i64>
    where
        T: Clone,
    {
        let mut out = DiGraph::with_capacity(self.vertices.len(), self.edges.len());
        let nodes: Vec<_> = self
            .vertices
            .iter()
            .map(|v| out.add_node(v.value().clone()))
            .collect();
        for edge in &self.edges {
            out.add_edge(nodes[edge.from().index()], nodes[edge.to().index()], edge.cost());
        }
        out
    }

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String
    where
        T: Display,
    {
        let (header, arrow) = match self.kind {
            GraphKind::Directed => ("digraph", "->"),
            GraphKind::Undirected => ("graph", "--"),
        };

        let mut dot = format!("{header} G {{\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=circle];\n\n");

        for (i, vertex) in self.vertices.iter().enumerate() {
            let _ = writeln!(dot, "  v{i} [label=\"{}\"];", vertex.value());
        }

        dot.push('\n');

        for edge in self.inserted_edges() {
            let _ = writeln!(
                dot,
                "  v{} {arrow} v{} [label=\"{}\"];",
                edge.from(),
                edge.to(),
                edge.cost()
            );
        }

        dot.push_str("}\n");
        dot
    }
}

impl<T: PartialEq> Graph<T> {
    /// First vertex holding `value`
    #[must_use]
    pub fn find_vertex(&self, value: &T) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| v.value() == value)
            .map(VertexId::new)
    }

    /// Add an edge between the first vertices holding the given values
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidEdge`] if either value is not held by
    /// any vertex.
    pub fn connect(&mut self, from: &T, to: &T, cost: i64) -> Result<EdgeId> {
        let edge = Edge::try_new(self.find_vertex(from), self.find_vertex(to), cost)?;
        self.add_edge(edge.from(), edge.to(), edge.cost())
    }
}

/// Comparison key of a vertex: value, weight and the sorted costs of its
/// outgoing edges. Edge targets and insertion order are not part of it.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct VertexKey<'a, T> {
    value: &'a T,
    weight: i64,
    costs: Vec<i64>,
}

/// Comparison key of an edge: cost, then source key, then target key
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct EdgeKey<'a, T> {
    cost: i64,
    from: VertexKey<'a, T>,
    to: VertexKey<'a, T>,
}

impl<T: Ord> Graph<T> {
    fn vertex_key(&self, id: VertexId) -> VertexKey<'_, T> {
        let vertex = &self.vertices[id.index()];
        VertexKey {
            value: vertex.value(),
            weight: vertex.weight(),
            costs: {
                let mut costs: Vec<_> = vertex
                    .edges()
                    .iter()
                    .map(|e| self.edges[e.index()].cost())
                    .collect();
                costs.sort_unstable();
                costs
            },
        }
    }

    fn sorted_vertex_keys(&self) -> Vec<VertexKey<'_, T>> {
        let mut keys: Vec<_> = self.vertex_ids().map(|id| self.vertex_key(id)).collect();
        keys.sort();
        keys
    }

    fn sorted_edge_keys(&self) -> Vec<EdgeKey<'_, T>> {
        let mut keys: Vec<_> = self
            .edges
            .iter()
            .map(|e| EdgeKey {
                cost: e.cost(),
                from: self.vertex_key(e.from()),
                to: self.vertex_key(e.to()),
            })
            .collect();
        keys.sort();
        keys
    }

    /// Total order over the vertices of this graph.
    ///
    /// Compares value, then weight, then the sorted outgoing edge costs.
    /// Where those edges lead is ignored, so two vertices with the same
    /// costs towards different neighbours compare equal.
    #[must_use]
    pub fn compare_vertices(&self, a: VertexId, b: VertexId) -> Ordering {
        self.vertex_key(a).cmp(&self.vertex_key(b))
    }
}

impl<T: Ord> PartialEq for Graph<T> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.vertices.len() == other.vertices.len()
            && self.edges.len() == other.edges.len()
            && self.sorted_vertex_keys() == other.sorted_vertex_keys()
            && self.sorted_edge_keys() == other.sorted_edge_keys()
    }
}

impl<T: Ord> Eq for Graph<T> {}

impl<T: Ord + Hash> Hash for Graph<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.sorted_vertex_keys().hash(state);
        self.sorted_edge_keys().hash(state);
    }
}
