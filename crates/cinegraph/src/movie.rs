// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! The movie record stored in every graph node.

use serde::{Deserialize, Serialize};

/// A catalog entry.
///
/// `rating` and `year` use 0 for "unknown"; `genres` may be empty. The field
/// names on the wire match the persisted graph layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Movie {
    /// External (TMDB) id. Only positive ids can enter a graph.
    #[serde(rename = "tmdbId")]
    pub tmdb_id: i64,
    /// Display title.
    #[serde(rename = "title")]
    pub name: String,
    /// Genre tags. Order is irrelevant.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Average rating on a 0..10 scale, 0 when unknown.
    #[serde(default)]
    pub rating: f64,
    /// Release year, 0 when unknown.
    #[serde(default)]
    pub year: i32,
}

impl Movie {
    pub fn new(tmdb_id: i64, name: impl Into<String>) -> Self {
        Self {
            tmdb_id,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// True when the rating is populated.
    pub fn has_rating(&self) -> bool {
        self.rating > 0.0
    }

    /// True when the release year is populated.
    pub fn has_year(&self) -> bool {
        self.year > 0
    }

    /// Human-readable label, e.g. `Heat (1995)`.
    pub fn label(&self) -> String {
        if self.has_year() {
            format!("{} ({})", self.name, self.year)
        } else {
            self.name.clone()
        }
    }
}
