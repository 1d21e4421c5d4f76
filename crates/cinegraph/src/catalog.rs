// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! The movie catalog the recommender draws records from.
//!
//! The engine itself never performs I/O. A [`Catalog`] supplies movies by
//! id, a popularity-ordered pool for bulk graph builds, and title search.
//! Empty results and partially populated records are valid answers, not
//! errors. Any client state (HTTP connection pools and the like) belongs to
//! the catalog value and lives exactly as long as it does.

use crate::movie::Movie;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Failures reported by a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("catalog request failed: {0}")]
    Transport(String),

    /// The catalog answered with a non-success status.
    #[error("catalog returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response could not be decoded.
    #[error("could not decode catalog response: {0}")]
    Decode(String),

    #[error("movie {id} not found in catalog")]
    NotFound { id: i64 },

    /// The catalog cannot be used at all (missing credentials, offline).
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Source of movie records.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Full record for one movie, including genres.
    async fn fetch_by_id(&self, id: i64) -> Result<Movie, CatalogError>;

    /// Up to `count` popular movies. Best effort: may return fewer.
    async fn fetch_popular(&self, count: usize) -> Result<Vec<Movie>, CatalogError>;

    /// Up to `limit` candidates whose title matches `query`.
    async fn search_by_title(&self, query: &str, limit: usize) -> Result<Vec<Movie>, CatalogError>;
}

/// Memoizes `fetch_by_id` in front of another catalog.
pub struct CachedCatalog<C> {
    inner: C,
    cache: Mutex<HashMap<i64, Movie>>,
}

impl<C: Catalog> CachedCatalog<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Number of cached records.
    pub fn cached(&self) -> usize {
        self.cache.lock().map(|c| c.len()).unwrap_or(0)
    }

    fn lookup(&self, id: i64) -> Option<Movie> {
        self.cache.lock().ok()?.get(&id).cloned()
    }

    fn remember(&self, movie: &Movie) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(movie.tmdb_id, movie.clone());
        }
    }
}

#[async_trait]
impl<C: Catalog> Catalog for CachedCatalog<C> {
    async fn fetch_by_id(&self, id: i64) -> Result<Movie, CatalogError> {
        if let Some(movie) = self.lookup(id) {
            return Ok(movie);
        }
        let movie = self.inner.fetch_by_id(id).await?;
        self.remember(&movie);
        Ok(movie)
    }

    async fn fetch_popular(&self, count: usize) -> Result<Vec<Movie>, CatalogError> {
        self.inner.fetch_popular(count).await
    }

    async fn search_by_title(&self, query: &str, limit: usize) -> Result<Vec<Movie>, CatalogError> {
        self.inner.search_by_title(query, limit).await
    }
}

/// In-memory catalog over a fixed list of movies.
///
/// List order doubles as popularity order.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    movies: Vec<Movie>,
}

impl StaticCatalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Parse a JSON array of movie records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let movies: Vec<Movie> =
            serde_json::from_str(json).map_err(|e| CatalogError::Decode(e.to_string()))?;
        Ok(Self::new(movies))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn fetch_by_id(&self, id: i64) -> Result<Movie, CatalogError> {
        self.movies
            .iter()
            .find(|m| m.tmdb_id == id)
            .cloned()
            .ok_or(CatalogError::NotFound { id })
    }

    async fn fetch_popular(&self, count: usize) -> Result<Vec<Movie>, CatalogError> {
        Ok(self.movies.iter().take(count).cloned().collect())
    }

    async fn search_by_title(&self, query: &str, limit: usize) -> Result<Vec<Movie>, CatalogError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .movies
            .iter()
            .filter(|m| m.name.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect())
    }
}
