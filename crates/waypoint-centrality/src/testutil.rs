//! Test-only oracle: serves precomputed [`ShortestPaths`] per source.
//!
//! Unit tests hand-build distance arrays and predecessor structures so the
//! engines can be pinned against exactly-known oracle output, including
//! deliberately pathological shapes no real search would produce.

use waypoint_paths::{NodeId, Predecessor, ShortestPaths, ShortestPathSource};

pub(crate) struct StaticPaths {
    results: Vec<ShortestPaths>,
}

impl StaticPaths {
    /// One precomputed result per source vertex, in source order.
    pub(crate) fn new(results: Vec<ShortestPaths>) -> Self {
        for (source, sps) in results.iter().enumerate() {
            assert_eq!(sps.source(), source, "results must be in source order");
            assert_eq!(sps.node_count(), results.len());
        }
        Self { results }
    }
}

impl ShortestPathSource for StaticPaths {
    fn node_count(&self) -> usize {
        self.results.len()
    }

    fn shortest_paths(&self, source: NodeId) -> ShortestPaths {
        self.results[source].clone()
    }
}

/// Shorthand for one predecessor entry.
pub(crate) const fn pred(node: NodeId, weight: f64) -> Predecessor {
    Predecessor { node, weight }
}

/// Assemble a [`ShortestPaths`] from slices.
pub(crate) fn paths(source: NodeId, dist: &[f64], preds: &[&[Predecessor]]) -> ShortestPaths {
    ShortestPaths::new(
        source,
        dist.to_vec(),
        preds.iter().map(|entries| entries.to_vec()).collect(),
    )
}

pub(crate) const INF: f64 = ShortestPaths::UNREACHABLE;
