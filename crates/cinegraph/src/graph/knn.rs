// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! K-nearest-neighbor graph construction.
//!
//! Every node is scored against every other node, so a full build costs
//! O(N^2) similarity evaluations. That is fine for catalogs of a few
//! thousand movies and is the scaling ceiling of this builder.
//!
//! Neighbor selection is deterministic: candidates are ordered by similarity
//! descending, then by node index ascending, so at the K-th cutoff the lower
//! index wins among equal similarities.

use crate::error::{GraphError, Result};
use crate::graph::types::MovieGraph;
use crate::movie::Movie;
use crate::similarity::{similarity_score, weight_from_similarity};
use std::cmp::Ordering;
use tracing::{debug, info};

/// A scored neighbor candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    similarity: f64,
    index: usize,
}

/// Strongest first; lower index breaks ties.
fn by_strength(a: &Candidate, b: &Candidate) -> Ordering {
    b.similarity
        .total_cmp(&a.similarity)
        .then_with(|| a.index.cmp(&b.index))
}

/// Score `source` against `others`, keeping only related pairs.
fn related<'a, I>(source: &Movie, others: I) -> Vec<Candidate>
where
    I: Iterator<Item = (usize, &'a Movie)>,
{
    others
        .filter_map(|(index, other)| {
            let similarity = similarity_score(source, other);
            (similarity > 0.0).then_some(Candidate { similarity, index })
        })
        .collect()
}

/// Keep the `k` strongest candidates, strongest first.
///
/// Uses a partial selection so the excess beyond `k` is never sorted.
fn strongest(mut candidates: Vec<Candidate>, k: usize) -> Vec<Candidate> {
    if candidates.len() > k {
        candidates.select_nth_unstable_by(k - 1, by_strength);
        candidates.truncate(k);
    }
    candidates.sort_unstable_by(by_strength);
    candidates
}

/// Connect every node to its `k` most similar peers.
///
/// Edges are inserted as symmetric pairs, so if `a` picks `b` and `b` picks
/// `a` the pair ends up with two parallel edges. Running the build twice on
/// the same graph duplicates every edge. Returns the number of edge pairs
/// inserted.
pub fn build_knn_graph(graph: &mut MovieGraph, k: usize) -> Result<usize> {
    if k == 0 {
        return Err(GraphError::InvalidK);
    }

    let n = graph.len();
    let mut inserted = 0;

    for i in 0..n {
        let candidates = {
            let movies = graph.movies();
            let source = &movies[i];
            let others = movies.iter().enumerate().filter(|&(j, _)| j != i);
            related(source, others)
        };

        if candidates.is_empty() {
            debug!(node = i, "no related movies");
            continue;
        }

        let considered = candidates.len();
        let kept = strongest(candidates, k);
        debug!(node = i, considered, kept = kept.len(), "selected neighbors");

        for c in &kept {
            graph.insert_edge(i, c.index, weight_from_similarity(c.similarity));
        }
        inserted += kept.len();
    }

    info!(nodes = n, edges = inserted, k, "built KNN graph");
    Ok(inserted)
}

/// Insert one movie and connect it to its `k` most similar existing nodes.
///
/// Only the newcomer's neighbor list is computed; existing nodes are not
/// re-ranked against it beyond the edges created here, until the next full
/// build. If the id is already present, nothing is inserted and the existing
/// index is returned.
pub fn insert_and_connect(graph: &mut MovieGraph, movie: Movie, k: usize) -> Result<usize> {
    if k == 0 {
        return Err(GraphError::InvalidK);
    }
    if let Some(existing) = graph.index_of(movie.tmdb_id) {
        return Ok(existing);
    }

    let index = graph.insert_movie(movie)?;

    let candidates = {
        let movies = graph.movies();
        let source = &movies[index];
        related(source, movies[..index].iter().enumerate())
    };
    let kept = strongest(candidates, k);

    for c in &kept {
        graph.insert_edge(index, c.index, weight_from_similarity(c.similarity));
    }

    info!(
        index,
        neighbors = kept.len(),
        title = %graph.movie(index).name,
        "inserted and connected movie"
    );
    Ok(index)
}
