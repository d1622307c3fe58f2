#![forbid(unsafe_code)]
//! waypoint-paths: the contracts between centrality analysis and its
//! shortest-path oracle.
//!
//! # Overview
//!
//! The centrality engines in `waypoint-centrality` never touch edges
//! directly. Everything they know about a graph arrives through two
//! contracts defined here:
//!
//! - [`ShortestPathSource`] — a graph that answers repeated, independent
//!   single-source shortest-path queries.
//! - [`ShortestPaths`] — one query's result: a distance array and a
//!   predecessor structure that records **every** tied shortest path,
//!   not just one.
//!
//! This crate defines and validates those contracts; it deliberately does
//! not ship a graph representation or a search implementation.
//!
//! # Conventions
//!
//! - **Errors**: structural defects in oracle output are reported through
//!   [`PathsError`]; everything else is infallible.
//! - **Logging**: `tracing` macros, no subscriber installed here.

pub mod paths;
pub mod source;

/// Dense 0-based vertex index, matching the graph's own numbering.
pub type NodeId = usize;

pub use paths::{PathsError, Predecessor, ShortestPaths};
pub use source::ShortestPathSource;
