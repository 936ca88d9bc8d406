// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Property tests checking the engine against petgraph's algorithms

use graphyard::prelude::*;
use petgraph::algo::{dijkstra, min_spanning_tree};
use petgraph::data::Element;
use petgraph::graph::{NodeIndex, UnGraph};
use proptest::prelude::*;

type EdgeTriples = Vec<(usize, usize, i64)>;

fn edge_lists(max_vertices: usize, max_weight: i64) -> impl Strategy<Value = (usize, EdgeTriples)> {
    (1..=max_vertices).prop_flat_map(move |n| {
        let edge = (0..n, 0..n, 0..=max_weight);
        (Just(n), prop::collection::vec(edge, 0..n * 3))
    })
}

fn build(n: usize, list: &[(usize, usize, i64)], kind: GraphKind) -> Graph<usize> {
    let edges = list
        .iter()
        .map(|&(u, v, w)| Edge::new(VertexId::new(u), VertexId::new(v), w))
        .collect();
    Graph::from_parts((0..n).map(Vertex::new).collect(), edges, kind)
}

proptest! {
    #[test]
    fn prop_bellman_ford_matches_dijkstra((n, list) in edge_lists(12, 50), source in 0usize..12) {
        let source = source % n;
        let graph = build(n, &list, GraphKind::Directed);

        let ours = bellman_ford(n, &graphyard::shortest_path::edges_of(&graph), source).unwrap();
        let start = NodeIndex::new(source);
        let reference = dijkstra(&graph.to_petgraph(), start, None, |e| *e.weight());

        for v in 0..n {
            prop_assert_eq!(ours.distance(v), reference.get(&NodeIndex::new(v)).copied());
            if let Some(path) = ours.path_to(v) {
                prop_assert_eq!(path.first().copied(), Some(source));
                prop_assert_eq!(path.last().copied(), Some(v));
            }
        }
    }

    #[test]
    fn prop_kruskal_matches_petgraph_weight((n, list) in edge_lists(10, 30)) {
        let mut ours = AdjacencyList::new(n);
        let mut theirs = UnGraph::<(), i64>::new_undirected();
        let nodes: Vec<_> = (0..n).map(|_| theirs.add_node(())).collect();
        for &(u, v, w) in &list {
            if u == v || ours.weight(u, v).is_some() {
                continue;
            }
            ours.add_edge(u, v, w as f64);
            theirs.add_edge(nodes[u], nodes[v], w);
        }

        let forest = spanning_forest(&ours).unwrap();
        let reference: i64 = min_spanning_tree(&theirs)
            .filter_map(|element| match element {
                Element::Edge { weight, .. } => Some(weight),
                Element::Node { .. } => None,
            })
            .sum();

        prop_assert!((forest.total_weight() - reference as f64).abs() < 1e-9);
        prop_assert_eq!(forest.tree_count(), petgraph::algo::connected_components(&theirs));
    }

    #[test]
    fn prop_union_find_tracks_set_count(
        pairs in prop::collection::vec((0usize..20, 0usize..20), 0..60)
    ) {
        let mut sets = DisjointSet::new();
        let ids: Vec<_> = (0..20).map(|v| sets.make_set(v)).collect();
        let mut merges = 0;
        for (a, b) in pairs {
            if sets.union(ids[a], ids[b]) {
                merges += 1;
            }
            prop_assert!(sets.same(ids[a], ids[b]));
        }
        prop_assert_eq!(sets.set_count(), 20 - merges);
    }

    #[test]
    fn prop_graph_equality_survives_vertex_reordering((n, list) in edge_lists(8, 20)) {
        let forward = build(n, &list, GraphKind::Undirected);
        // Reverse the vertex list and renumber the edges to match
        let flip = |i: usize| n - 1 - i;
        let backward = Graph::from_parts(
            (0..n).rev().map(Vertex::new).collect(),
            list.iter()
                .map(|&(u, v, w)| Edge::new(VertexId::new(flip(u)), VertexId::new(flip(v)), w))
                .collect(),
            GraphKind::Undirected,
        );

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_graph_equality_survives_edge_shuffling(
        (n, list, shuffled) in edge_lists(8, 20).prop_flat_map(|(n, list)| {
            (Just(n), Just(list.clone()), Just(list).prop_shuffle())
        })
    ) {
        for kind in [GraphKind::Directed, GraphKind::Undirected] {
            prop_assert_eq!(build(n, &list, kind), build(n, &shuffled, kind));
        }
    }
}
