// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Read operations on a MovieGraph.
//!
//! Accessors hand out borrowed views. A view stays valid for as long as the
//! borrow is held, which the borrow checker ties to "no writer active".

use crate::graph::types::{Edge, MovieGraph};
use crate::movie::Movie;

impl MovieGraph {
    /// Node index of an external id, or `None` if the id is not in the graph.
    pub fn index_of(&self, tmdb_id: i64) -> Option<usize> {
        self.id_to_index.get(&tmdb_id).copied()
    }

    /// All movies, indexed by node.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// All adjacency lists, indexed by node.
    pub fn adjacency(&self) -> &[Vec<Edge>] {
        &self.adjacency
    }

    /// Get the movie stored at a node.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn movie(&self, index: usize) -> &Movie {
        &self.movies[index]
    }

    /// Get all edges from a node. Out-of-range indices have no edges.
    pub fn edges_from(&self, index: usize) -> &[Edge] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Number of undirected edges (each stored pair counts once).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Case-insensitive title lookup among nodes already in the graph.
    pub fn find_by_title(&self, query: &str) -> Vec<usize> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.movies
            .iter()
            .enumerate()
            .filter(|(_, m)| m.name.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }
}
