// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Writing a MovieGraph to its JSON file layout.
//!
//! ```json
//! {
//!   "movies": [{"tmdbId": 603, "title": "The Matrix", "genres": ["Action"], "rating": 8.2, "year": 1999}],
//!   "adj": [[{"to": 1, "w": 1.04}]]
//! }
//! ```
//!
//! `adj` holds one row per movie, in movie order.

use crate::error::Result;
use crate::graph::types::{Edge, MovieGraph};
use crate::movie::Movie;
use serde::Serialize;
use std::path::Path;
use tracing::info;

#[derive(Serialize)]
struct GraphFileRef<'a> {
    movies: &'a [Movie],
    adj: &'a [Vec<Edge>],
}

impl MovieGraph {
    /// Serialize the graph as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        let file = GraphFileRef {
            movies: &self.movies,
            adj: &self.adjacency,
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Write the graph to `path`, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut json = self.to_json()?;
        json.push('\n');
        std::fs::write(path, json)?;

        info!(
            path = %path.display(),
            movies = self.len(),
            edges = self.edge_count(),
            "saved graph"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_layout() {
        let mut graph = MovieGraph::new();
        graph
            .insert_movie(
                Movie::new(603, "The Matrix")
                    .with_genres(["Action", "Sci-Fi"])
                    .with_rating(8.2)
                    .with_year(1999),
            )
            .unwrap();
        graph.insert_movie(Movie::new(604, "The Matrix Reloaded")).unwrap();
        graph.insert_edge(0, 1, 1.25);

        let value: serde_json::Value = serde_json::from_str(&graph.to_json().unwrap()).unwrap();
        assert_json_eq!(
            value,
            json!({
                "movies": [
                    {"tmdbId": 603, "title": "The Matrix", "genres": ["Action", "Sci-Fi"], "rating": 8.2, "year": 1999},
                    {"tmdbId": 604, "title": "The Matrix Reloaded", "genres": [], "rating": 0.0, "year": 0}
                ],
                "adj": [
                    [{"to": 1, "w": 1.25}],
                    [{"to": 0, "w": 1.25}]
                ]
            })
        );
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("graph.json");

        let mut graph = MovieGraph::new();
        graph.insert_movie(Movie::new(1, "a")).unwrap();
        graph.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"tmdbId\": 1"));
    }
}
