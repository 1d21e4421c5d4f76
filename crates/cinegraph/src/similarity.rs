// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Pairwise movie similarity and the similarity-to-distance transform.
//!
//! The score blends up to three sub-scores, each used only when both movies
//! carry the attribute:
//!
//! | Dimension | Sub-score                                 | Weight |
//! |-----------|-------------------------------------------|--------|
//! | genres    | Jaccard overlap of the two genre sets     | 0.7    |
//! | rating    | `max(0, 1 - |ra - rb| / 1.5)`             | 0.2    |
//! | year      | `max(0, 1 - |ya - yb| / 12)`              | 0.1    |
//!
//! The blend is normalized by the weights actually applied. Two movies that
//! both have genres but share none score 0 outright, and anything under
//! [`NOISE_FLOOR`] is reported as 0.

use crate::movie::Movie;
use std::collections::HashSet;

pub const GENRE_WEIGHT: f64 = 0.7;
pub const RATING_WEIGHT: f64 = 0.2;
pub const YEAR_WEIGHT: f64 = 0.1;

/// Rating gap at which rating closeness reaches 0.
pub const RATING_SPAN: f64 = 1.5;
/// Year gap at which year closeness reaches 0.
pub const YEAR_SPAN: f64 = 12.0;

/// Scores below this are treated as unrelated.
pub const NOISE_FLOOR: f64 = 0.15;

/// Numerator of the edge-weight transform.
pub const WEIGHT_SCALE: f64 = 1.0;
/// Keeps the edge-weight transform finite near zero.
pub const WEIGHT_EPSILON: f64 = 1e-6;
/// Weight assigned to unrelated pairs. Far above any chain of real edges in a
/// graph of a few thousand nodes (a real edge never exceeds ~6.7).
pub const UNRELATED_WEIGHT: f64 = 1e9;

/// Similarity of two movies in `[0, 1]`.
///
/// Symmetric. Not meaningful for a movie compared with itself; callers
/// exclude self-pairs.
pub fn similarity_score(a: &Movie, b: &Movie) -> f64 {
    let mut weighted = 0.0;
    let mut applied = 0.0;

    if !a.genres.is_empty() && !b.genres.is_empty() {
        let overlap = genre_overlap(&a.genres, &b.genres);
        if overlap == 0.0 {
            return 0.0;
        }
        weighted += GENRE_WEIGHT * overlap;
        applied += GENRE_WEIGHT;
    }

    if a.has_rating() && b.has_rating() {
        let closeness = (1.0 - (a.rating - b.rating).abs() / RATING_SPAN).max(0.0);
        weighted += RATING_WEIGHT * closeness;
        applied += RATING_WEIGHT;
    }

    if a.has_year() && b.has_year() {
        let gap = (a.year - b.year).unsigned_abs() as f64;
        let closeness = (1.0 - gap / YEAR_SPAN).max(0.0);
        weighted += YEAR_WEIGHT * closeness;
        applied += YEAR_WEIGHT;
    }

    if applied == 0.0 {
        return 0.0;
    }

    let score = (weighted / applied).clamp(0.0, 1.0);
    if score < NOISE_FLOOR {
        0.0
    } else {
        score
    }
}

/// Convert a similarity into an edge weight (smaller = closer).
///
/// Strictly decreasing for `s > 0`; any `s <= 0` maps to
/// [`UNRELATED_WEIGHT`].
pub fn weight_from_similarity(similarity: f64) -> f64 {
    if similarity <= 0.0 {
        UNRELATED_WEIGHT
    } else {
        WEIGHT_SCALE / (similarity + WEIGHT_EPSILON)
    }
}

/// Jaccard overlap of two genre lists treated as sets.
fn genre_overlap(a: &[String], b: &[String]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let shared = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - shared;
    if union == 0 {
        return 0.0;
    }
    shared as f64 / union as f64
}
