// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for graph construction, ranking and persistence.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by the graph, the rankers and graph persistence.
///
/// An id lookup miss is not an error; see [`crate::MovieGraph::index_of`].
#[derive(Debug, Error)]
pub enum GraphError {
    /// External ids must be strictly positive.
    #[error("invalid movie id {id}: ids must be positive")]
    InvalidId { id: i64 },

    /// K (neighbors or results) must be at least 1.
    #[error("K must be at least 1")]
    InvalidK,

    /// A node index does not exist in the graph.
    #[error("node index {index} out of range for graph of {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },

    /// Persisted adjacency table does not have one row per movie.
    #[error("adjacency table has {rows} rows but graph has {items} movies")]
    AdjacencyMismatch { items: usize, rows: usize },

    /// Persisted edge points outside the movie list.
    #[error("edge in row {row} targets {target}, outside 0..{len}")]
    EdgeTargetOutOfRange { row: usize, target: i64, len: usize },

    /// Persisted edge weight is negative or not a number.
    #[error("edge in row {row} has invalid weight {weight}")]
    InvalidWeight { row: usize, weight: f64 },

    /// Persisted movie list repeats an id.
    #[error("movie id {id} appears more than once")]
    DuplicateId { id: i64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed graph file: {0}")]
    Json(#[from] serde_json::Error),
}
