// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Whitespace-separated text input for the command-line harness
//!
//! Edge list: `V E` followed by `E` triples `from to weight`.
//! Matrix: `N` followed by `N * N` weights, `inf` or `-` for "no edge".

use crate::mst::{AdjacencyList, AdjacencyMatrix};
use crate::shortest_path::WeightedEdge;
use anyhow::{anyhow, bail, Context, Result};
use std::io::Read;
use std::str::FromStr;

/// A directed edge list with its vertex count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    /// Number of vertices
    pub vertex_count: usize,
    /// Edges, in input order
    pub edges: Vec<WeightedEdge>,
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    fn next<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.position += 1;
        let token = self
            .inner
            .next()
            .ok_or_else(|| anyhow!("Unexpected end of input: expected {what}"))?;
        token
            .parse()
            .with_context(|| format!("Token {} ({token:?}): expected {what}", self.position))
    }

    fn weight(&mut self) -> Result<f64> {
        self.position += 1;
        let token = self
            .inner
            .next()
            .ok_or_else(|| anyhow!("Unexpected end of input: expected a weight"))?;
        match token.to_ascii_lowercase().as_str() {
            "-" | "inf" | "infinity" | "x" => Ok(f64::INFINITY),
            _ => token
                .parse()
                .with_context(|| format!("Token {} ({token:?}): expected a weight", self.position)),
        }
    }
}

fn read_all(mut reader: impl Read) -> Result<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("Failed to read input")?;
    Ok(text)
}

fn check_vertex(index: usize, vertex_count: usize, line: usize) -> Result<()> {
    if index >= vertex_count {
        bail!("Edge {line}: vertex {index} out of range (graph has {vertex_count} vertices)");
    }
    Ok(())
}

/// Read `V E` and `E` directed triples
pub fn read_edge_list(reader: impl Read) -> Result<EdgeList> {
    let text = read_all(reader)?;
    let mut tokens = Tokens::new(&text);

    let vertex_count: usize = tokens.next("the vertex count")?;
    let edge_count: usize = tokens.next("the edge count")?;

    let edges = (1..=edge_count)
        .map(|line| {
            let from: usize = tokens.next("an edge source")?;
            let to: usize = tokens.next("an edge destination")?;
            let weight: i64 = tokens.next("an integer weight")?;
            check_vertex(from, vertex_count, line)?;
            check_vertex(to, vertex_count, line)?;
            Ok(WeightedEdge::new(from, to, weight))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(EdgeList {
        vertex_count,
        edges,
    })
}

/// Read `N` and an `N x N` weight matrix
pub fn read_matrix(reader: impl Read) -> Result<AdjacencyMatrix> {
    let text = read_all(reader)?;
    let mut tokens = Tokens::new(&text);

    let n: usize = tokens.next("the matrix size")?;
    let rows = (0..n)
        .map(|_| (0..n).map(|_| tokens.weight()).collect::<Result<Vec<_>>>())
        .collect::<Result<Vec<_>>>()?;

    Ok(AdjacencyMatrix::new(rows))
}

/// Read `N M` and `M` undirected triples into an adjacency list
pub fn read_adjacency_list(reader: impl Read) -> Result<AdjacencyList> {
    let text = read_all(reader)?;
    let mut tokens = Tokens::new(&text);

    let n: usize = tokens.next("the vertex count")?;
    let m: usize = tokens.next("the edge count")?;

    let mut list = AdjacencyList::new(n);
    for line in 1..=m {
        let u: usize = tokens.next("an edge endpoint")?;
        let v: usize = tokens.next("an edge endpoint")?;
        let weight = tokens.weight()?;
        check_vertex(u, n, line)?;
        check_vertex(v, n, line)?;
        list.add_edge(u, v, weight);
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_edge_list() {
        let input = "3 2\n0 1 4\n1 2 -1\n";
        let list = read_edge_list(input.as_bytes()).unwrap();

        assert_eq!(list.vertex_count, 3);
        assert_eq!(
            list.edges,
            vec![WeightedEdge::new(0, 1, 4), WeightedEdge::new(1, 2, -1)]
        );
    }

    #[test]
    fn test_read_edge_list_errors() {
        let err = read_edge_list("3 2\n0 1 4\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("end of input"));

        let err = read_edge_list("2 1\n0 5 1\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("out of range"));

        let err = read_edge_list("2 1\n0 1 heavy\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("integer weight"));
    }

    #[test]
    fn test_read_matrix() {
        let input = "3\n0 1 inf\n1 0 2.5\n- 2.5 0\n";
        let matrix = read_matrix(input.as_bytes()).unwrap();

        assert_eq!(matrix.rows().len(), 3);
        assert_eq!(matrix.weight(1, 2), Some(2.5));
        assert_eq!(matrix.weight(0, 2), None);
        assert_eq!(matrix.weight(2, 0), None);
    }

    #[test]
    fn test_read_adjacency_list() {
        let list = read_adjacency_list("3 2\n0 1 1\n1 2 7\n".as_bytes()).unwrap();
        assert_eq!(list.weight(2, 1), Some(7.0));
        assert_eq!(list.weight(0, 2), None);
    }
}
