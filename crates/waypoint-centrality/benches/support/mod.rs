//! Bench support: synthetic unweighted graphs with a BFS oracle.
//!
//! Layered graphs connect every vertex in one layer to every vertex in
//! the next, so shortest-path counts explode combinatorially — the
//! worst case for tie handling and the interesting case to measure.

use std::collections::VecDeque;

use waypoint_paths::{NodeId, Predecessor, ShortestPaths, ShortestPathSource};

/// Unweighted digraph served through a BFS shortest-path oracle.
pub struct BfsGraph {
    adjacency: Vec<Vec<NodeId>>,
}

impl BfsGraph {
    /// `layers` layers of `width` vertices, each layer fully connected to
    /// the next.
    #[must_use]
    pub fn layered(layers: usize, width: usize) -> Self {
        let mut adjacency = vec![Vec::new(); layers * width];
        for layer in 0..layers.saturating_sub(1) {
            for a in 0..width {
                for b in 0..width {
                    adjacency[layer * width + a].push((layer + 1) * width + b);
                }
            }
        }
        Self { adjacency }
    }

    /// A single path 0 → 1 → … → `len - 1`.
    #[must_use]
    pub fn chain(len: usize) -> Self {
        let mut adjacency = vec![Vec::new(); len];
        for i in 0..len.saturating_sub(1) {
            adjacency[i].push(i + 1);
        }
        Self { adjacency }
    }
}

impl ShortestPathSource for BfsGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn shortest_paths(&self, source: NodeId) -> ShortestPaths {
        let n = self.adjacency.len();
        let mut dist = vec![ShortestPaths::UNREACHABLE; n];
        let mut pred: Vec<Vec<Predecessor>> = vec![Vec::new(); n];
        let mut queue = VecDeque::new();

        dist[source] = 0.0;
        queue.push_back(source);

        while let Some(vertex) = queue.pop_front() {
            for &next in &self.adjacency[vertex] {
                if !dist[next].is_finite() {
                    dist[next] = dist[vertex] + 1.0;
                    queue.push_back(next);
                }
                if (dist[next] - dist[vertex] - 1.0).abs() < f64::EPSILON {
                    pred[next].push(Predecessor {
                        node: vertex,
                        weight: 1.0,
                    });
                }
            }
        }

        ShortestPaths::new(source, dist, pred)
    }
}
