//! Closeness centrality, Wasserman-Faust variant.
//!
//! # Overview
//!
//! Closeness measures how near a vertex is, on average, to everything it
//! can reach: high-closeness vertices can reach the rest of the graph
//! through short paths. The classic formula (reachable count over distance
//! sum) misbehaves on graphs that are not strongly connected, so we use
//! the Wasserman-Faust correction, which scales a vertex's raw closeness
//! by the fraction of the graph it actually reaches:
//!
//! ```text
//! C_wf(v) = ((n - 1) / (N - 1)) * ((n - 1) / sum)
//! ```
//!
//! where `N` is the vertex count, `n` the number of vertices reachable
//! from `v` (including `v`), and `sum` the sum of finite shortest-path
//! distances out of `v`.
//!
//! # Algorithm
//!
//! One oracle query per vertex; each distance array is reduced and then
//! dropped before the next query. Only the distance half of the oracle
//! result is consumed — the predecessor structure plays no part here.

use tracing::{debug, instrument};
use waypoint_paths::ShortestPathSource;

use crate::values::NodeValues;

// ---------------------------------------------------------------------------
// Distance-array reduction
// ---------------------------------------------------------------------------

/// Reduction of one distance array: sum of finite distances and the number
/// of reachable vertices (the source itself included).
#[derive(Debug, Clone, Copy, PartialEq)]
struct ReachSummary {
    sum: f64,
    reached: usize,
}

impl ReachSummary {
    fn from_distances(dist: &[f64]) -> Self {
        let mut sum = 0.0;
        let mut reached = 0;
        for &d in dist {
            if d.is_finite() {
                sum += d;
                reached += 1;
            }
        }
        Self { sum, reached }
    }

    /// Wasserman-Faust closeness for a graph of `node_count` vertices.
    ///
    /// A vertex that reaches nothing beyond itself scores exactly 0; this
    /// also guards the `N == 1` division.
    #[allow(clippy::cast_precision_loss)]
    fn score(self, node_count: usize) -> f64 {
        if self.reached <= 1 {
            return 0.0;
        }
        let reached = self.reached as f64;
        let total = node_count as f64;
        ((reached - 1.0) / (total - 1.0)) * ((reached - 1.0) / self.sum)
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Compute Wasserman-Faust closeness centrality for every vertex.
///
/// Runs one oracle query per vertex and keeps at most one result live at
/// a time. Unit-weight graphs score in `[0, 1]`; a vertex with no
/// reachable vertex besides itself scores 0. A zero-vertex graph yields
/// an empty [`NodeValues`].
#[must_use]
#[instrument(skip(graph))]
pub fn closeness_centrality<G: ShortestPathSource>(graph: &G) -> NodeValues {
    let n = graph.node_count();
    let mut values = NodeValues::zeroed(n);

    for vertex in 0..n {
        let sps = graph.shortest_paths(vertex);
        let reach = ReachSummary::from_distances(sps.dist());
        values.set(vertex, reach.score(n));
        // sps dropped here; nothing is retained across sources.
    }

    debug!(vertices = n, "closeness centrality computed");
    values
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
