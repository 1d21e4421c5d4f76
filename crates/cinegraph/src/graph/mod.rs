// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! The movie similarity graph: storage, KNN construction and persistence.
//!
//! Nodes are stable integer handles into a growable movie store. Indices are
//! assigned in insertion order and never reused; edges are always stored in
//! symmetric pairs so the graph behaves as undirected.

pub mod deserializer;
pub mod knn;
pub mod reader;
pub mod serializer;
pub mod types;

pub use knn::{build_knn_graph, insert_and_connect};
pub use types::*;
