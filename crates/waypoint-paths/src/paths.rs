//! Single-source shortest-path results and their structural validation.
//!
//! # Overview
//!
//! A [`ShortestPaths`] value is the output of one single-source query: a
//! distance array (`f64::INFINITY` marks unreachable vertices) and a
//! predecessor structure. `pred[t]` lists **every** immediate predecessor
//! of `t` on some shortest path from the source — more than one entry when
//! several shortest paths of equal length reach `t`. Viewed as a graph,
//! the predecessor structure is the shortest-path DAG rooted at the source.
//!
//! Centrality analysis walks that DAG backward from each target, so its
//! termination depends on the acyclicity the shortest-path property
//! guarantees. Oracles with unusual tie-breaking (or bugs) can break that
//! guarantee; [`ShortestPaths::validate`] checks it, along with the rest
//! of the shape contract, so callers adapting a new oracle do not have to
//! trust it implicitly.
//!
//! # Lifecycle
//!
//! Each result is scoped to one source vertex. The engines drop a result
//! before querying the next source, so at most one is live per computation.

use fixedbitset::FixedBitSet;
use tracing::instrument;

use crate::NodeId;

// ---------------------------------------------------------------------------
// Predecessor structure
// ---------------------------------------------------------------------------

/// One entry in the predecessor structure: an immediate predecessor on some
/// shortest path, and the weight of the edge taken from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predecessor {
    /// The predecessor vertex.
    pub node: NodeId,
    /// Weight of the edge from `node` to the vertex this entry belongs to.
    pub weight: f64,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural defects in oracle output, reported by [`ShortestPaths::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathsError {
    /// `dist` and `pred` disagree on the vertex count.
    #[error("dist has {dist} entries but pred has {pred}")]
    LengthMismatch {
        /// Length of the distance array.
        dist: usize,
        /// Length of the predecessor structure.
        pred: usize,
    },

    /// The recorded source vertex is not a valid index.
    #[error("source vertex {source} out of range for {nodes} vertices")]
    SourceOutOfRange {
        /// The out-of-range source.
        source: NodeId,
        /// Number of vertices in the result.
        nodes: usize,
    },

    /// A predecessor entry names a vertex outside `0..nodes`.
    #[error("vertex {vertex} lists predecessor {pred}, out of range for {nodes} vertices")]
    PredecessorOutOfRange {
        /// The vertex whose predecessor list is malformed.
        vertex: NodeId,
        /// The out-of-range predecessor.
        pred: NodeId,
        /// Number of vertices in the result.
        nodes: usize,
    },

    /// A predecessor edge carries a negative weight.
    #[error("negative weight {weight} on predecessor edge {pred} -> {vertex}")]
    NegativeWeight {
        /// The vertex whose predecessor list holds the edge.
        vertex: NodeId,
        /// The predecessor end of the edge.
        pred: NodeId,
        /// The offending weight.
        weight: f64,
    },

    /// An unreachable vertex has recorded predecessors.
    #[error("vertex {0} is unreachable but has recorded predecessors")]
    UnreachableWithPredecessors(NodeId),

    /// The source has recorded predecessors; the DAG must be rooted at it.
    #[error("source vertex {0} has recorded predecessors")]
    SourceWithPredecessors(NodeId),

    /// The predecessor structure is not acyclic.
    #[error("predecessor structure contains a cycle through vertex {0}")]
    CyclicPredecessors(NodeId),
}

// ---------------------------------------------------------------------------
// ShortestPaths
// ---------------------------------------------------------------------------

/// Single-source shortest-path result: distances plus the tie-aware
/// predecessor DAG. See the [module docs](self) for the full contract.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: NodeId,
    dist: Vec<f64>,
    pred: Vec<Vec<Predecessor>>,
}

impl ShortestPaths {
    /// Distance value marking a vertex the source cannot reach.
    pub const UNREACHABLE: f64 = f64::INFINITY;

    /// Assemble a result from an oracle's raw output.
    ///
    /// `dist` and `pred` must both have one entry per vertex; the shape is
    /// checked by [`validate`](Self::validate), not here.
    #[must_use]
    pub fn new(source: NodeId, dist: Vec<f64>, pred: Vec<Vec<Predecessor>>) -> Self {
        debug_assert_eq!(dist.len(), pred.len());
        Self { source, dist, pred }
    }

    /// The source vertex this result was computed from.
    #[must_use]
    pub const fn source(&self) -> NodeId {
        self.source
    }

    /// Number of vertices covered by this result.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.dist.len()
    }

    /// The full distance array, indexed by vertex.
    #[must_use]
    pub fn dist(&self) -> &[f64] {
        &self.dist
    }

    /// Distance from the source to `target`, or [`Self::UNREACHABLE`].
    #[must_use]
    pub fn distance(&self, target: NodeId) -> f64 {
        self.dist[target]
    }

    /// Immediate predecessors of `target` on shortest paths from the source.
    ///
    /// Empty for the source itself and for unreachable vertices.
    #[must_use]
    pub fn predecessors(&self, target: NodeId) -> &[Predecessor] {
        &self.pred[target]
    }

    /// `true` if the source reaches `target` (including `target == source`).
    #[must_use]
    pub fn is_reachable(&self, target: NodeId) -> bool {
        self.dist[target].is_finite()
    }

    /// Check this result against the full oracle contract.
    ///
    /// Verifies, in order: `dist`/`pred` length agreement, source index in
    /// range, predecessor indices in range, non-negative edge weights, no
    /// predecessors recorded for unreachable vertices or for the source,
    /// and acyclicity of the predecessor structure.
    ///
    /// Validation is linear in vertices plus predecessor entries; callers
    /// adapting an untrusted oracle typically run it once per source in
    /// tests rather than on every query.
    ///
    /// # Errors
    ///
    /// Returns the first [`PathsError`] encountered, in the order above.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), PathsError> {
        let nodes = self.dist.len();

        if self.pred.len() != nodes {
            return Err(PathsError::LengthMismatch {
                dist: nodes,
                pred: self.pred.len(),
            });
        }
        if self.source >= nodes {
            return Err(PathsError::SourceOutOfRange {
                source: self.source,
                nodes,
            });
        }

        for (vertex, entries) in self.pred.iter().enumerate() {
            for entry in entries {
                if entry.node >= nodes {
                    return Err(PathsError::PredecessorOutOfRange {
                        vertex,
                        pred: entry.node,
                        nodes,
                    });
                }
                if entry.weight < 0.0 {
                    return Err(PathsError::NegativeWeight {
                        vertex,
                        pred: entry.node,
                        weight: entry.weight,
                    });
                }
            }
            if !entries.is_empty() && !self.dist[vertex].is_finite() {
                return Err(PathsError::UnreachableWithPredecessors(vertex));
            }
        }

        if !self.pred[self.source].is_empty() {
            return Err(PathsError::SourceWithPredecessors(self.source));
        }

        self.check_acyclic()
    }

    /// Iterative three-color DFS over the predecessor structure.
    ///
    /// A vertex in `in_progress` is an ancestor of the current DFS position;
    /// meeting one again means the structure has a cycle.
    fn check_acyclic(&self) -> Result<(), PathsError> {
        let nodes = self.pred.len();
        let mut done = FixedBitSet::with_capacity(nodes);
        let mut in_progress = FixedBitSet::with_capacity(nodes);

        for start in 0..nodes {
            if done.contains(start) {
                continue;
            }

            // Frames hold (vertex, next predecessor entry to visit).
            let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];
            in_progress.insert(start);

            loop {
                let Some(&(vertex, cursor)) = stack.last() else {
                    break;
                };

                if let Some(entry) = self.pred[vertex].get(cursor) {
                    let top = stack.len() - 1;
                    stack[top].1 += 1;

                    if in_progress.contains(entry.node) {
                        return Err(PathsError::CyclicPredecessors(entry.node));
                    }
                    if !done.contains(entry.node) {
                        in_progress.insert(entry.node);
                        stack.push((entry.node, 0));
                    }
                } else {
                    in_progress.set(vertex, false);
                    done.insert(vertex);
                    stack.pop();
                }
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
