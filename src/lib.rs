//! Yen KSP - K shortest loopless paths on weighted directed graphs
//!
//! This library computes the shortest path between two nodes with Dijkstra's
//! algorithm and, on demand, the K shortest loopless paths in non-decreasing
//! weight order with Yen's algorithm.
//!
//! Graphs are borrowed immutably for the lifetime of a query. Yen's deviation
//! searches run on a per-query overlay that records edge/node removals in a
//! mutation log and undoes them exactly after every spur search.
//!
//! Edge weights must be non-negative. When several pending candidates share
//! the lowest weight, the one with the lexicographically smallest node
//! sequence is emitted first, so repeated runs give identical output.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    batch::{k_shortest_paths_batch, shortest_paths_batch},
    dijkstra::Dijkstra,
    path::Path,
    yen::{k_shortest_paths, KShortestPaths, KspConfig},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{directed::DirectedGraph, overlay::GraphView, Graph, MutableGraph, NodeId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Source node not found in graph: {0}")]
    SourceNotFound(String),

    #[error("Target node not found in graph: {0}")]
    TargetNotFound(String),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Path weight overflow: {0}")]
    WeightOverflow(String),

    #[error("Priority frontier is empty")]
    EmptyFrontier,

    #[error("Graph view was not restored to its base state: {0}")]
    CorruptedView(String),

    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Query aborted after an earlier fatal error")]
    QueryAborted,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
