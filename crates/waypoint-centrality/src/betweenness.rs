//! Betweenness centrality by direct shortest-path enumeration.
//!
//! # Overview
//!
//! Betweenness measures how often a vertex lies on shortest paths between
//! *other* pairs of vertices. High-betweenness vertices are bridges or
//! bottlenecks: much of the graph's shortest-path traffic funnels through
//! them. Because the oracle reports **every** tied shortest path, a vertex
//! sitting on one of several equal-length routes earns a fractional share
//! rather than all-or-nothing credit.
//!
//! # Algorithm
//!
//! For each subject vertex `v` and each source `s != v`, one oracle query
//! yields the shortest-path DAG from `s`. For every target `t` (distinct
//! from both) the predecessor structure is walked backward from `t`,
//! counting
//!
//! - `paths`: the total number of shortest `s → t` paths, and
//! - `through`: how many of them contain `v` as an intermediate vertex,
//!
//! and the subject accumulates the pair dependency `through / paths`
//! (pairs with no path contribute nothing). The query from `s` is shared
//! by all targets, so the oracle runs `V - 1` times per subject, not
//! `V²` times.
//!
//! The walk itself is memoized per `(s, v)`: both counts obey a recurrence
//! over a vertex's predecessor list
//!
//! ```text
//! paths(c)   = Σ over p in pred(c) of  { 1            p == s
//!                                      { paths(p)     otherwise
//!
//! through(c) = Σ over p in pred(c) of  { 0            p == s
//!                                      { paths(v)     p == v
//!                                      { through(p)   otherwise
//! ```
//!
//! so sibling tie branches that reconverge are resolved once, not
//! re-enumerated per branch, and a subject reachable along several tie
//! branches is neither double-counted nor missed. The traversal uses an
//! explicit stack, so deep predecessor chains cannot exhaust the call
//! stack. Counts are `f64` because path counts grow combinatorially in
//! tie-heavy graphs.
//!
//! # Output
//!
//! [`betweenness_centrality`] returns raw dependency sums. The normalized
//! variant divides by `(n - 1) * (n - 2)`, the number of ordered pairs a
//! vertex could sit between.

use fixedbitset::FixedBitSet;
use tracing::{debug, instrument};
use waypoint_paths::{NodeId, ShortestPaths, ShortestPathSource};

use crate::values::NodeValues;

// ---------------------------------------------------------------------------
// Engines
// ---------------------------------------------------------------------------

/// Compute raw betweenness centrality for every vertex.
///
/// Scores are unnormalized pair-dependency sums; see
/// [`betweenness_centrality_normalized`] for the `(n-1)(n-2)`-scaled
/// variant. A zero-vertex graph yields an empty [`NodeValues`].
///
/// # Panics
///
/// Panics if the oracle's predecessor structure contains a cycle, which
/// violates the shortest-path DAG contract. Run
/// [`ShortestPaths::validate`] on oracle output to catch this ahead of
/// time when adapting a new oracle.
#[must_use]
#[instrument(skip(graph))]
pub fn betweenness_centrality<G: ShortestPathSource>(graph: &G) -> NodeValues {
    let n = graph.node_count();
    let mut values = NodeValues::zeroed(n);

    for subject in 0..n {
        let mut score = 0.0;

        for source in 0..n {
            if source == subject {
                continue;
            }

            // One oracle query per (subject, source), shared by all targets.
            let sps = graph.shortest_paths(source);
            let mut walk = PredecessorWalk::new(&sps, subject);

            for target in 0..n {
                if target == source || target == subject {
                    continue;
                }
                let tally = walk.tally(target);
                if tally.paths > 0.0 {
                    score += tally.through / tally.paths;
                }
            }
            // sps dropped here, before the next source is queried.
        }

        values.set(subject, score);
    }

    debug!(vertices = n, "betweenness centrality computed");
    values
}

/// Compute betweenness centrality normalized by `(n - 1) * (n - 2)`.
///
/// The divisor counts the ordered source/target pairs a vertex could lie
/// between, so unit-weight scores land in `[0, 1]`. For graphs with fewer
/// than three vertices the divisor degenerates; every score is 0 in that
/// case (no pair excludes both endpoints), so the engine clamps rather
/// than divide.
///
/// # Panics
///
/// As [`betweenness_centrality`].
#[must_use]
#[instrument(skip(graph))]
#[allow(clippy::cast_precision_loss)]
pub fn betweenness_centrality_normalized<G: ShortestPathSource>(graph: &G) -> NodeValues {
    let mut values = betweenness_centrality(graph);
    let n = values.node_count();

    if n < 3 {
        values.fill(0.0);
        return values;
    }

    values.scale(1.0 / (((n - 1) * (n - 2)) as f64));
    values
}

// ---------------------------------------------------------------------------
// Path-counting walk
// ---------------------------------------------------------------------------

/// Path counts for one (source, target) pair: total shortest paths, and
/// those containing the subject as an intermediate vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PathTally {
    paths: f64,
    through: f64,
}

/// Memoized backward walk over one shortest-path DAG.
///
/// Holds the per-vertex tallies for a fixed (source, subject) pair; the
/// memo is lazily filled as targets are queried, so reconverging tie
/// branches and repeated targets each resolve a vertex exactly once.
struct PredecessorWalk<'a> {
    sps: &'a ShortestPaths,
    source: NodeId,
    subject: NodeId,
    /// Resolved tally per vertex; `None` until first needed.
    memo: Vec<Option<PathTally>>,
    /// Vertices whose predecessor expansion has begun. A vertex that is
    /// expanded but not yet resolved is an ancestor of the current walk
    /// position; meeting one as a predecessor proves a cycle.
    expanded: FixedBitSet,
    stack: Vec<NodeId>,
}

impl<'a> PredecessorWalk<'a> {
    fn new(sps: &'a ShortestPaths, subject: NodeId) -> Self {
        let n = sps.node_count();
        Self {
            sps,
            source: sps.source(),
            subject,
            memo: vec![None; n],
            expanded: FixedBitSet::with_capacity(n),
            stack: Vec::new(),
        }
    }

    /// Count shortest paths from the walk's source to `target`.
    ///
    /// `target` must differ from the source. Unreachable targets tally as
    /// zero paths.
    fn tally(&mut self, target: NodeId) -> PathTally {
        debug_assert_ne!(target, self.source);

        if let Some(tally) = self.memo[target] {
            return tally;
        }

        self.stack.push(target);

        while let Some(&cursor) = self.stack.last() {
            if self.memo[cursor].is_some() {
                self.stack.pop();
                continue;
            }

            if !self.expanded.contains(cursor) {
                self.expanded.insert(cursor);

                let mut blocked = false;
                for entry in self.sps.predecessors(cursor) {
                    let p = entry.node;
                    if p == self.source || self.memo[p].is_some() {
                        continue;
                    }
                    assert!(
                        !self.expanded.contains(p),
                        "cycle in predecessor structure at vertex {p}; \
                         check oracle output with ShortestPaths::validate"
                    );
                    self.stack.push(p);
                    blocked = true;
                }
                if blocked {
                    continue;
                }
            }

            // Every predecessor is now resolved (or is the source): combine.
            let mut tally = PathTally::default();
            for entry in self.sps.predecessors(cursor) {
                let p = entry.node;
                if p == self.source {
                    tally.paths += 1.0;
                } else if let Some(sub) = self.memo[p] {
                    tally.paths += sub.paths;
                    tally.through += if p == self.subject { sub.paths } else { sub.through };
                }
            }
            self.memo[cursor] = Some(tally);
            self.stack.pop();
        }

        self.memo[target].unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
