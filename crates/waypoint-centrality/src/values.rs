//! Per-vertex score container returned by the centrality engines.

use waypoint_paths::NodeId;

/// Dense per-vertex scores: entry `i` is the score of vertex `i`.
///
/// Created by an engine entry point and handed to the caller by value;
/// release-exactly-once is the type system's problem, not the caller's.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeValues {
    values: Vec<f64>,
}

impl NodeValues {
    /// A container of `node_count` zero scores.
    pub(crate) fn zeroed(node_count: usize) -> Self {
        Self {
            values: vec![0.0; node_count],
        }
    }

    /// Number of vertices scored (equals the graph's vertex count).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.values.len()
    }

    /// `true` when the underlying graph had no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Score of one vertex.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in `0..node_count()`.
    #[must_use]
    pub fn value(&self, node: NodeId) -> f64 {
        self.values[node]
    }

    /// All scores, indexed by vertex.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate `(vertex, score)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.values.iter().copied().enumerate()
    }

    /// Consume the container, yielding the raw score vector.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub(crate) fn set(&mut self, node: NodeId, value: f64) {
        self.values[node] = value;
    }

    pub(crate) fn scale(&mut self, factor: f64) {
        for value in &mut self.values {
            *value *= factor;
        }
    }

    pub(crate) fn fill(&mut self, value: f64) {
        self.values.fill(value);
    }
}
