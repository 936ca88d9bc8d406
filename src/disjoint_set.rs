// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Disjoint-set forest (union-find) with path compression and union by rank
//!
//! Each call to [`DisjointSet::make_set`] creates a singleton set holding one
//! value. Sets are merged with [`DisjointSet::union`] and identified by their
//! representative, returned by [`DisjointSet::find`].

use tracing::trace;

/// Handle to a node in a [`DisjointSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetId(usize);

impl SetId {
    /// Position of the node in creation order
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct SetNode<T> {
    value: T,
    parent: usize,
    rank: u8,
}

/// A forest of disjoint sets over values of type `T`
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    nodes: Vec<SetNode<T>>,
    sets: usize,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DisjointSet<T> {
    /// Create an empty forest
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            sets: 0,
        }
    }

    /// Create an empty forest with room for `capacity` nodes
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            sets: 0,
        }
    }

    /// Add `value` as a new singleton set
    pub fn make_set(&mut self, value: T) -> SetId {
        let id = self.nodes.len();
        self.nodes.push(SetNode {
            value,
            parent: id,
            rank: 0,
        });
        self.sets += 1;
        SetId(id)
    }

    /// Representative of the set containing `node`.
    ///
    /// Every node visited on the way to the root is re-pointed straight at
    /// the root.
    ///
    /// # Panics
    ///
    /// Panics if `node` was not created by this forest.
    pub fn find(&mut self, node: SetId) -> SetId {
        let mut root = node.0;
        while self.nodes[root].parent != root {
            root = self.nodes[root].parent;
        }

        let mut current = node.0;
        while current != root {
            let next = self.nodes[current].parent;
            self.nodes[current].parent = root;
            current = next;
        }

        SetId(root)
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `false` when both were already in the same set.
    pub fn union(&mut self, a: SetId, b: SetId) -> bool {
        let mut left = self.find(a).0;
        let mut right = self.find(b).0;
        if left == right {
            return false;
        }

        if self.nodes[left].rank < self.nodes[right].rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.nodes[right].parent = left;
        if self.nodes[left].rank == self.nodes[right].rank {
            self.nodes[left].rank = self.nodes[left].rank.saturating_add(1);
        }
        self.sets -= 1;
        trace!(root = left, merged = right, "union");
        true
    }

    /// Whether `a` and `b` belong to the same set
    pub fn same(&mut self, a: SetId, b: SetId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Value stored at `node`
    #[must_use]
    pub fn value(&self, node: SetId) -> &T {
        &self.nodes[node.0].value
    }

    /// Number of nodes ever created
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the forest has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of disjoint sets currently in the forest
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut sets = DisjointSet::new();
        let a = sets.make_set("a");
        let b = sets.make_set("b");

        assert_eq!(sets.len(), 2);
        assert_eq!(sets.set_count(), 2);
        assert_eq!(sets.find(a), a);
        assert_eq!(sets.find(b), b);
        assert!(!sets.same(a, b));
        assert_eq!(*sets.value(b), "b");
    }

    #[test]
    fn test_union_merges_once() {
        let mut sets = DisjointSet::new();
        let ids: Vec<_> = (0..4).map(|i| sets.make_set(i)).collect();

        assert!(sets.union(ids[0], ids[1]));
        assert!(sets.union(ids[2], ids[3]));
        assert!(!sets.union(ids[1], ids[0]));
        assert_eq!(sets.set_count(), 2);

        assert!(sets.union(ids[1], ids[3]));
        assert_eq!(sets.set_count(), 1);
        let root = sets.find(ids[0]);
        assert!(ids.iter().all(|&id| sets.find(id) == root));
    }

    #[test]
    fn test_path_compression() {
        let mut sets = DisjointSet::with_capacity(64);
        let ids: Vec<_> = (0..64).map(|i| sets.make_set(i)).collect();
        for pair in ids.windows(2) {
            sets.union(pair[0], pair[1]);
        }

        let root = sets.find(ids[63]);
        for &id in &ids {
            sets.find(id);
            assert_eq!(sets.nodes[id.index()].parent, root.index());
        }
    }
}
