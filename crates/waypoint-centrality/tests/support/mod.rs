//! Shared test fixture: a weighted digraph with a tie-aware Dijkstra
//! oracle behind the `ShortestPathSource` seam.
//!
//! The search records *every* predecessor that achieves the shortest
//! distance, so tied shortest paths show up as multi-entry predecessor
//! lists — the case the centrality engines are built around. Tests use
//! small integer-valued weights, which compare exactly in `f64`, so the
//! equal-distance check needs no epsilon.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use waypoint_paths::{NodeId, Predecessor, ShortestPaths, ShortestPathSource};

/// A weighted directed graph over dense vertex indices.
pub struct TestGraph {
    graph: DiGraph<(), f64>,
}

impl TestGraph {
    /// Build from `(from, to, weight)` edges.
    pub fn directed(node_count: usize, edges: &[(NodeId, NodeId, f64)]) -> Self {
        let mut graph = DiGraph::new();
        for _ in 0..node_count {
            graph.add_node(());
        }
        for &(from, to, weight) in edges {
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), weight);
        }
        Self { graph }
    }

    /// Build with each edge inserted in both directions.
    pub fn undirected(node_count: usize, edges: &[(NodeId, NodeId, f64)]) -> Self {
        let mut both = Vec::with_capacity(edges.len() * 2);
        for &(from, to, weight) in edges {
            both.push((from, to, weight));
            both.push((to, from, weight));
        }
        Self::directed(node_count, &both)
    }
}

impl ShortestPathSource for TestGraph {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn shortest_paths(&self, source: NodeId) -> ShortestPaths {
        let n = self.graph.node_count();
        let mut dist = vec![ShortestPaths::UNREACHABLE; n];
        let mut pred: Vec<Vec<Predecessor>> = vec![Vec::new(); n];
        let mut heap = BinaryHeap::new();

        dist[source] = 0.0;
        heap.push(QueueEntry {
            cost: 0.0,
            node: NodeIndex::new(source),
        });

        while let Some(QueueEntry { cost, node }) = heap.pop() {
            if cost > dist[node.index()] {
                continue; // stale entry
            }
            for edge in self.graph.edges(node) {
                let next = edge.target().index();
                let weight = *edge.weight();
                let candidate = cost + weight;

                if candidate < dist[next] {
                    dist[next] = candidate;
                    pred[next].clear();
                    pred[next].push(Predecessor {
                        node: node.index(),
                        weight,
                    });
                    heap.push(QueueEntry {
                        cost: candidate,
                        node: edge.target(),
                    });
                } else if candidate == dist[next]
                    && !pred[next].iter().any(|p| p.node == node.index())
                {
                    pred[next].push(Predecessor {
                        node: node.index(),
                        weight,
                    });
                }
            }
        }

        // The DAG is rooted at the source even if zero-weight edges tie
        // back into it.
        pred[source].clear();

        ShortestPaths::new(source, dist, pred)
    }
}

/// Min-heap entry; `BinaryHeap` is a max-heap, so the ordering is reversed.
#[derive(Debug, Clone, Copy, PartialEq)]
struct QueueEntry {
    cost: f64,
    node: NodeIndex,
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}
