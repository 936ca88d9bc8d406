// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Benchmarks for Bellman-Ford and Kruskal on generated graphs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphyard::prelude::*;

/// Deterministic pseudo-random weights (xorshift)
fn weights(seed: u64) -> impl Iterator<Item = u64> {
    let mut state = seed.max(1);
    std::iter::repeat_with(move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    })
}

/// A ring plus `extra` chords per vertex, non-negative weights below 100
fn edge_list(n: usize, extra: usize) -> Vec<WeightedEdge> {
    let mut rng = weights(n as u64);
    let mut edges = Vec::with_capacity(n * (extra + 1));
    for u in 0..n {
        edges.push(WeightedEdge::new(u, (u + 1) % n, (rng.next().unwrap_or(0) % 100) as i64));
        for _ in 0..extra {
            let v = (rng.next().unwrap_or(0) as usize) % n;
            edges.push(WeightedEdge::new(u, v, (rng.next().unwrap_or(0) % 100) as i64));
        }
    }
    edges
}

fn adjacency_list(n: usize, extra: usize) -> AdjacencyList {
    let mut list = AdjacencyList::new(n);
    for edge in edge_list(n, extra) {
        if edge.from != edge.to {
            list.add_edge(edge.from, edge.to, edge.weight as f64);
        }
    }
    list
}

fn bench_bellman_ford(c: &mut Criterion) {
    let mut group = c.benchmark_group("bellman_ford");
    for n in [64, 256, 1024] {
        let edges = edge_list(n, 4);
        group.bench_with_input(BenchmarkId::from_parameter(n), &edges, |b, edges| {
            b.iter(|| bellman_ford(black_box(n), black_box(edges), 0));
        });
    }
    group.finish();
}

fn bench_spanning_forest(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_forest");
    for n in [64, 256, 1024] {
        let list = adjacency_list(n, 4);
        group.bench_with_input(BenchmarkId::new("list", n), &list, |b, list| {
            b.iter(|| spanning_forest(black_box(list)));
        });
    }
    for n in [64, 256] {
        let list = adjacency_list(n, 4);
        let mut matrix = AdjacencyMatrix::disconnected(n);
        for u in 0..n {
            for (&v, &w) in list.neighbours(u).into_iter().flatten() {
                matrix.set_edge(u, v, w);
            }
        }
        group.bench_with_input(BenchmarkId::new("matrix", n), &matrix, |b, matrix| {
            b.iter(|| spanning_forest(black_box(matrix)));
        });
    }
    group.finish();
}

fn bench_disjoint_set(c: &mut Criterion) {
    c.bench_function("disjoint_set_chain_10k", |b| {
        b.iter(|| {
            let mut sets = DisjointSet::with_capacity(10_000);
            let ids: Vec<_> = (0..10_000).map(|v| sets.make_set(v)).collect();
            for pair in ids.windows(2) {
                sets.union(pair[0], pair[1]);
            }
            black_box(sets.set_count())
        });
    });
}

criterion_group!(benches, bench_bellman_ford, bench_spanning_forest, bench_disjoint_set);
criterion_main!(benches);
