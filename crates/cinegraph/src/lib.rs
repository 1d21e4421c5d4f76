// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Movie recommendations from a K-nearest-neighbor similarity graph.
//!
//! Movies are scored pairwise by a fixed heuristic (shared genres, rating and
//! release year), each movie is connected to its K most similar peers, and
//! recommendations are ranked by shortest-path distance from a seed movie.
//! A bounded-heap ranking by direct similarity is provided as a baseline, and
//! [`benchmark`] runs both side by side.
//!
//! The engine is single-threaded and synchronous. [`MovieGraph`] has no
//! internal locking: callers that share it across threads must serialize
//! every mutating call.

pub mod benchmark;
pub mod catalog;
pub mod config;
pub mod error;
pub mod graph;
pub mod movie;
pub mod navigation;
pub mod recommender;
pub mod similarity;

pub use benchmark::{compare, Comparison};
pub use catalog::{CachedCatalog, Catalog, CatalogError, StaticCatalog};
pub use config::RecommenderConfig;
pub use error::{GraphError, Result};
pub use graph::{build_knn_graph, insert_and_connect, Edge, MovieGraph};
pub use movie::Movie;
pub use navigation::pathfinder::{shortest_paths, DijkstraResult};
pub use navigation::ranking::{top_k_by_distance, top_k_by_similarity};
pub use recommender::{Recommendation, Recommender};
pub use similarity::{similarity_score, weight_from_similarity};
