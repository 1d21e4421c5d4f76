// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Loading a MovieGraph from its JSON file layout.
//!
//! Loading is all-or-nothing: the graph is assembled off to the side and
//! returned only after every movie and every edge has been checked.

use crate::error::{GraphError, Result};
use crate::graph::types::{Edge, MovieGraph};
use crate::movie::Movie;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

#[derive(Deserialize)]
struct GraphFile {
    movies: Vec<Movie>,
    adj: Vec<Vec<RawEdge>>,
}

/// Edge as written on disk. The target is signed so negative indices are
/// reported as out of range rather than as a parse failure.
#[derive(Deserialize)]
struct RawEdge {
    to: i64,
    w: f64,
}

impl MovieGraph {
    /// Parse a graph from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: GraphFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Read a graph from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let graph = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            movies = graph.len(),
            edges = graph.edge_count(),
            "loaded graph"
        );
        Ok(graph)
    }

    fn from_file(file: GraphFile) -> Result<Self> {
        let n = file.movies.len();
        if file.adj.len() != n {
            return Err(GraphError::AdjacencyMismatch {
                items: n,
                rows: file.adj.len(),
            });
        }

        let mut seen = HashSet::with_capacity(n);
        for movie in &file.movies {
            if movie.tmdb_id <= 0 {
                return Err(GraphError::InvalidId { id: movie.tmdb_id });
            }
            if !seen.insert(movie.tmdb_id) {
                return Err(GraphError::DuplicateId { id: movie.tmdb_id });
            }
        }

        let mut adjacency = Vec::with_capacity(n);
        for (row, edges) in file.adj.into_iter().enumerate() {
            let mut out = Vec::with_capacity(edges.len());
            for edge in edges {
                if edge.to < 0 || edge.to as usize >= n {
                    return Err(GraphError::EdgeTargetOutOfRange {
                        row,
                        target: edge.to,
                        len: n,
                    });
                }
                if !edge.w.is_finite() || edge.w < 0.0 {
                    return Err(GraphError::InvalidWeight { row, weight: edge.w });
                }
                out.push(Edge {
                    target: edge.to as usize,
                    weight: edge.w,
                });
            }
            adjacency.push(out);
        }

        let mut graph = MovieGraph::with_capacity(n);
        for movie in file.movies {
            graph.insert_movie(movie)?;
        }
        graph.adjacency = adjacency;
        Ok(graph)
    }
}
