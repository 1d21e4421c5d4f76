// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core graph types and the insertion operations.

use crate::error::{GraphError, Result};
use crate::movie::Movie;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One directed half of a similarity relationship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Index of the neighbor node.
    #[serde(rename = "to")]
    pub target: usize,
    /// Non-negative distance; smaller means more similar.
    #[serde(rename = "w")]
    pub weight: f64,
}

/// Movies plus an adjacency list per movie.
///
/// Invariants: `adjacency.len() == movies.len()`, every edge target is a
/// valid index, and an id maps to at most one index.
///
/// Not internally synchronized. Mutations must be serialized by the caller;
/// read accessors are safe whenever no writer is active.
#[derive(Debug, Clone, Default)]
pub struct MovieGraph {
    pub(crate) movies: Vec<Movie>,
    pub(crate) adjacency: Vec<Vec<Edge>>,
    pub(crate) id_to_index: HashMap<i64, usize>,
}

impl MovieGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            movies: Vec::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
            id_to_index: HashMap::with_capacity(capacity),
        }
    }

    /// Add a movie and return its node index.
    ///
    /// A movie whose id is already present is not added again; the existing
    /// index is returned. Non-positive ids are rejected.
    pub fn insert_movie(&mut self, movie: Movie) -> Result<usize> {
        let id = movie.tmdb_id;
        if id <= 0 {
            return Err(GraphError::InvalidId { id });
        }

        if let Some(&index) = self.id_to_index.get(&id) {
            return Ok(index);
        }

        let index = self.movies.len();
        self.movies.push(movie);
        self.adjacency.push(Vec::new());
        self.id_to_index.insert(id, index);
        Ok(index)
    }

    /// Add an undirected edge between `from` and `to`.
    ///
    /// Appends `(to, weight)` to `from`'s list and `(from, weight)` to `to`'s
    /// list. Repeated calls for the same pair produce parallel edges.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range. Both indices must come from
    /// this graph.
    pub fn insert_edge(&mut self, from: usize, to: usize, weight: f64) {
        self.adjacency[from].push(Edge { target: to, weight });
        self.adjacency[to].push(Edge {
            target: from,
            weight,
        });
    }
}
