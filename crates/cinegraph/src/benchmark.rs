// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Side-by-side comparison of the graph ranking and the heap baseline.
//!
//! Both rankings run on the same graph, source and K. Each run is timed in
//! isolation, then every recommended movie is annotated with its direct
//! similarity to the source. The overlap between the two lists is reported
//! as information only: the rankings optimize different objectives and are
//! not expected to agree.

use crate::error::{GraphError, Result};
use crate::graph::MovieGraph;
use crate::navigation::pathfinder::shortest_paths;
use crate::navigation::ranking::{top_k_by_distance, top_k_by_similarity};
use crate::similarity::similarity_score;
use serde::Serialize;
use std::collections::HashSet;
use std::time::Instant;
use tracing::debug;

/// One recommended movie with its similarity to the source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMovie {
    pub index: usize,
    pub tmdb_id: i64,
    pub title: String,
    pub similarity: f64,
}

/// Timing and output of one ranking algorithm.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmRun {
    pub name: &'static str,
    pub elapsed_ms: f64,
    pub ranked: Vec<RankedMovie>,
}

impl AlgorithmRun {
    pub fn indices(&self) -> Vec<usize> {
        self.ranked.iter().map(|r| r.index).collect()
    }
}

/// Report produced by [`compare`].
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub source: usize,
    pub source_title: String,
    pub k: usize,
    pub total_movies: usize,
    pub graph: AlgorithmRun,
    pub heap: AlgorithmRun,
    /// Number of indices present in both lists.
    pub overlap: usize,
    /// `overlap / k * 100`.
    pub consistency: f64,
}

impl Comparison {
    /// Graph time divided by heap time, `None` if the heap run took no
    /// measurable time.
    pub fn speedup(&self) -> Option<f64> {
        (self.heap.elapsed_ms > 0.0).then(|| self.graph.elapsed_ms / self.heap.elapsed_ms)
    }
}

/// Number of indices shared by two rankings.
pub fn overlap(a: &[usize], b: &[usize]) -> usize {
    let a: HashSet<usize> = a.iter().copied().collect();
    let b: HashSet<usize> = b.iter().copied().collect();
    a.intersection(&b).count()
}

/// Overlap as a percentage of `k`.
pub fn consistency_percent(overlap: usize, k: usize) -> f64 {
    if k == 0 {
        return 0.0;
    }
    overlap as f64 / k as f64 * 100.0
}

/// Run both rankings from `source` and report timings and agreement.
pub fn compare(graph: &MovieGraph, source: usize, k: usize) -> Result<Comparison> {
    if k == 0 {
        return Err(GraphError::InvalidK);
    }
    if source >= graph.len() {
        return Err(GraphError::IndexOutOfRange {
            index: source,
            len: graph.len(),
        });
    }

    let start = Instant::now();
    let paths = shortest_paths(graph.adjacency(), source)?;
    let by_distance = top_k_by_distance(source, &paths, k)?;
    let graph_ms = start.elapsed().as_secs_f64() * 1000.0;

    let start = Instant::now();
    let by_similarity = top_k_by_similarity(graph.movie(source), graph.movies(), source, k)?;
    let heap_ms = start.elapsed().as_secs_f64() * 1000.0;

    debug!(graph_ms, heap_ms, k, source, "ranking comparison timed");

    let shared = overlap(&by_distance, &by_similarity);

    Ok(Comparison {
        source,
        source_title: graph.movie(source).name.clone(),
        k,
        total_movies: graph.len(),
        graph: AlgorithmRun {
            name: "graph (dijkstra)",
            elapsed_ms: graph_ms,
            ranked: annotate(graph, source, &by_distance),
        },
        heap: AlgorithmRun {
            name: "heap (direct similarity)",
            elapsed_ms: heap_ms,
            ranked: annotate(graph, source, &by_similarity),
        },
        overlap: shared,
        consistency: consistency_percent(shared, k),
    })
}

fn annotate(graph: &MovieGraph, source: usize, indices: &[usize]) -> Vec<RankedMovie> {
    let seed = graph.movie(source);
    indices
        .iter()
        .map(|&index| {
            let movie = graph.movie(index);
            RankedMovie {
                index,
                tmdb_id: movie.tmdb_id,
                title: movie.name.clone(),
                similarity: similarity_score(seed, movie),
            }
        })
        .collect()
}
