//! The oracle seam: graphs that answer single-source shortest-path queries.

use crate::{NodeId, ShortestPaths};

/// A weighted graph, directed or undirected, exposed to centrality analysis
/// purely as a shortest-path oracle.
///
/// # Contract
///
/// - Vertices are the dense indices `0..node_count()`.
/// - Edge weights are non-negative.
/// - [`shortest_paths`](Self::shortest_paths) computes single-source
///   shortest distances and a predecessor structure that records every
///   tied shortest path; the structure must be a DAG rooted at the source
///   (the ordinary shortest-path property — see
///   [`ShortestPaths::validate`] for an explicit check).
/// - Queries are independent and stateless per call (`&self`), so callers
///   may issue them repeatedly and, if they wish, concurrently. The
///   engines in `waypoint-centrality` stay single-threaded but rely on
///   repeated queries being cheap to reason about: one result is live at
///   a time and none is retained across sources.
pub trait ShortestPathSource {
    /// Number of vertices in the graph.
    fn node_count(&self) -> usize;

    /// Single-source shortest paths from `source`.
    ///
    /// `source` is in `0..self.node_count()`; behavior outside that range
    /// is the implementation's to define.
    fn shortest_paths(&self, source: NodeId) -> ShortestPaths;
}
