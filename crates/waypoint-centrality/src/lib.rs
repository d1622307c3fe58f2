#![forbid(unsafe_code)]
//! waypoint-centrality: node-centrality metrics over a shortest-path oracle.
//!
//! # Overview
//!
//! Two independent analysis passes share the oracle contract from
//! [`waypoint_paths`]:
//!
//! - **Closeness centrality** ([`closeness_centrality`]): how close a
//!   vertex is, on average, to everything it can reach. Wasserman-Faust
//!   variant, so partially-connected graphs are scored sensibly.
//! - **Betweenness centrality** ([`betweenness_centrality`], raw, and
//!   [`betweenness_centrality_normalized`]): how often a vertex lies on
//!   shortest paths between other pairs, counting **all** tied shortest
//!   paths via the oracle's predecessor DAG.
//!
//! Both return a [`NodeValues`]: one `f64` score per vertex index.
//!
//! ```rust,ignore
//! use waypoint_centrality::{betweenness_centrality_normalized, closeness_centrality};
//!
//! let graph = /* any ShortestPathSource */;
//! let closeness = closeness_centrality(&graph);
//! let betweenness = betweenness_centrality_normalized(&graph);
//! ```
//!
//! # Conventions
//!
//! - **Errors**: the engines are infallible; oracle-output defects are the
//!   oracle's to avoid (see `ShortestPaths::validate`).
//! - **Logging**: `tracing` macros; no subscriber is installed here.

pub mod betweenness;
pub mod closeness;
pub mod values;

pub use betweenness::{betweenness_centrality, betweenness_centrality_normalized};
pub use closeness::closeness_centrality;
pub use values::NodeValues;

#[cfg(test)]
pub(crate) mod testutil;
