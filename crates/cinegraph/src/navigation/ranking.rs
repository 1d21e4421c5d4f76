// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Top-K extraction.
//!
//! Two independent rankings share one contract: at most K node indices,
//! best first, never including the source.
//!
//! - [`top_k_by_distance`] orders nodes by shortest-path distance, so it can
//!   surface a movie that is only reachable through a chain of similar ones.
//! - [`top_k_by_similarity`] ignores the graph and keeps the K movies most
//!   similar to the source in a bounded min-heap. O(N log K).

use crate::error::{GraphError, Result};
use crate::movie::Movie;
use crate::navigation::pathfinder::DijkstraResult;
use crate::navigation::OrderedF64;
use crate::similarity::similarity_score;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The `k` nearest reachable nodes by path distance, nearest first.
///
/// Equal distances keep ascending index order.
pub fn top_k_by_distance(source: usize, result: &DijkstraResult, k: usize) -> Result<Vec<usize>> {
    if k == 0 {
        return Err(GraphError::InvalidK);
    }

    let mut ranked: Vec<usize> = result
        .distance
        .iter()
        .enumerate()
        .filter(|&(i, d)| i != source && d.is_finite())
        .map(|(i, _)| i)
        .collect();

    // Stable sort: ties stay in index order.
    ranked.sort_by(|&a, &b| result.distance[a].total_cmp(&result.distance[b]));
    ranked.truncate(k);
    Ok(ranked)
}

/// The `k` movies most similar to `source`, most similar first.
///
/// `source_index` is skipped. Returns `min(k, movies.len() - 1)` entries
/// when the source is part of `movies`, including zero-similarity movies
/// if there are not enough related ones. Among equal similarities the lower
/// index ranks first.
pub fn top_k_by_similarity(
    source: &Movie,
    movies: &[Movie],
    source_index: usize,
    k: usize,
) -> Result<Vec<usize>> {
    if k == 0 {
        return Err(GraphError::InvalidK);
    }

    // Min-heap keyed by (similarity, reversed index): the root is the
    // weakest kept candidate, and among ties the one with the highest index.
    let mut heap: BinaryHeap<Reverse<(OrderedF64, Reverse<usize>)>> =
        BinaryHeap::with_capacity(k + 1);

    for (i, candidate) in movies.iter().enumerate() {
        if i == source_index {
            continue;
        }
        let similarity = similarity_score(source, candidate);

        if heap.len() < k {
            heap.push(Reverse((OrderedF64(similarity), Reverse(i))));
        } else if let Some(Reverse((OrderedF64(weakest), _))) = heap.peek() {
            if similarity > *weakest {
                heap.pop();
                heap.push(Reverse((OrderedF64(similarity), Reverse(i))));
            }
        }
    }

    let mut ranked = Vec::with_capacity(heap.len());
    while let Some(Reverse((_, Reverse(i)))) = heap.pop() {
        ranked.push(i);
    }
    ranked.reverse();
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(distance: Vec<f64>) -> DijkstraResult {
        let n = distance.len();
        DijkstraResult {
            source: 0,
            distance,
            predecessor: vec![None; n],
        }
    }

    #[test]
    fn test_distance_ranking_excludes_source_and_unreachable() {
        let res = result(vec![0.0, 3.0, f64::INFINITY, 1.0, 2.0]);
        let top = top_k_by_distance(0, &res, 10).unwrap();
        assert_eq!(top, vec![3, 4, 1]);
    }

    #[test]
    fn test_distance_ranking_truncates_and_breaks_ties_by_index() {
        let res = result(vec![0.0, 2.0, 1.0, 2.0, 2.0, 1.0]);
        let top = top_k_by_distance(0, &res, 4).unwrap();
        assert_eq!(top, vec![2, 5, 1, 3]);
    }

    #[test]
    fn test_distance_ranking_rejects_zero_k() {
        let res = result(vec![0.0, 1.0]);
        assert!(matches!(top_k_by_distance(0, &res, 0), Err(GraphError::InvalidK)));
    }

    fn movie(id: i64, genres: &[&str], rating: f64) -> Movie {
        Movie::new(id, format!("m{id}"))
            .with_genres(genres.iter().copied())
            .with_rating(rating)
    }

    #[test]
    fn test_similarity_ranking_orders_descending() {
        let movies = vec![
            movie(1, &["Action", "Crime"], 7.0),
            movie(2, &["Romance"], 7.0),
            movie(3, &["Action"], 7.0),
            movie(4, &["Action", "Crime"], 7.1),
        ];
        let top = top_k_by_similarity(&movies[0], &movies, 0, 2).unwrap();
        assert_eq!(top, vec![3, 2]);
    }

    #[test]
    fn test_similarity_ranking_fills_with_unrelated() {
        let movies = vec![
            movie(1, &["Action"], 7.0),
            movie(2, &["Romance"], 7.0),
            movie(3, &["Documentary"], 7.0),
        ];
        let top = top_k_by_similarity(&movies[0], &movies, 0, 5).unwrap();
        assert_eq!(top, vec![1, 2]);
    }

    #[test]
    fn test_similarity_ranking_ties_prefer_lower_index() {
        let movies = vec![
            movie(1, &["Drama"], 7.0),
            movie(2, &["Drama"], 7.0),
            movie(3, &["Drama"], 7.0),
            movie(4, &["Drama"], 7.0),
            movie(5, &["Drama"], 7.0),
        ];
        let top = top_k_by_similarity(&movies[2], &movies, 2, 2).unwrap();
        assert_eq!(top, vec![0, 1]);
    }

    #[test]
    fn test_similarity_ranking_rejects_zero_k() {
        let movies = vec![movie(1, &["Drama"], 7.0)];
        assert!(matches!(
            top_k_by_similarity(&movies[0], &movies, 0, 0),
            Err(GraphError::InvalidK)
        ));
    }
}
