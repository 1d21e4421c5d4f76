// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! TMDB catalog client.
//!
//! Implements [`Catalog`] over the TMDB v3 REST API. The HTTP connection
//! pool lives inside the client and is released when it is dropped.

use async_trait::async_trait;
use cinegraph::{Catalog, CatalogError, Movie};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Public TMDB API root.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Results per page of `/movie/popular`.
const PAGE_SIZE: usize = 20;
/// TMDB refuses pages past this.
const MAX_PAGE: usize = 500;
/// Popular-pool filter: ignore obscure titles with too few votes.
const MIN_VOTE_COUNT: u64 = 300;
const MIN_POPULARITY: f64 = 10.0;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Deserialize)]
struct Genre {
    #[serde(default)]
    id: i64,
    name: Option<String>,
}

#[derive(Deserialize)]
struct GenreList {
    #[serde(default)]
    genres: Vec<Genre>,
}

#[derive(Deserialize)]
struct MovieDetails {
    id: Option<i64>,
    title: Option<String>,
    #[serde(default)]
    genres: Vec<Genre>,
    vote_average: Option<f64>,
    release_date: Option<String>,
}

#[derive(Deserialize)]
struct MovieSummary {
    id: Option<i64>,
    title: Option<String>,
    vote_average: Option<f64>,
    release_date: Option<String>,
    #[serde(default)]
    genre_ids: Vec<i64>,
    vote_count: Option<u64>,
    popularity: Option<f64>,
}

#[derive(Deserialize)]
struct ResultPage {
    #[serde(default)]
    results: Vec<MovieSummary>,
    total_pages: Option<usize>,
}

/// Year from a `YYYY-MM-DD` date, 0 if absent or malformed.
fn parse_year(date: Option<&str>) -> i32 {
    date.and_then(|d| d.get(..4))
        .and_then(|y| y.parse().ok())
        .unwrap_or(0)
}

impl MovieSummary {
    /// Convert to a movie, dropping records without id or title.
    fn into_movie(self, genre_names: &HashMap<i64, String>) -> Option<Movie> {
        let id = self.id.filter(|&id| id > 0)?;
        let title = self.title.filter(|t| !t.is_empty())?;
        let genres = self
            .genre_ids
            .iter()
            .filter_map(|gid| genre_names.get(gid).cloned())
            .collect::<Vec<_>>();

        Some(
            Movie::new(id, title)
                .with_genres(genres)
                .with_rating(self.vote_average.unwrap_or(0.0))
                .with_year(parse_year(self.release_date.as_deref())),
        )
    }

    fn is_popular_enough(&self) -> bool {
        self.vote_count.unwrap_or(0) >= MIN_VOTE_COUNT
            && self.popularity.unwrap_or(0.0) >= MIN_POPULARITY
    }
}

/// Client for the TMDB REST API.
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "TMDB request");

        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", "en-US")])
            .query(params)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }

    /// Genre id to genre name.
    async fn genre_names(&self) -> Result<HashMap<i64, String>, CatalogError> {
        let list: GenreList = self.get_json("/genre/movie/list", &[]).await?;
        Ok(list
            .genres
            .into_iter()
            .filter(|g| g.id != 0)
            .filter_map(|g| g.name.filter(|n| !n.is_empty()).map(|n| (g.id, n)))
            .collect())
    }
}

#[async_trait]
impl Catalog for TmdbClient {
    async fn fetch_by_id(&self, id: i64) -> Result<Movie, CatalogError> {
        let details: MovieDetails = match self.get_json(&format!("/movie/{id}"), &[]).await {
            Err(CatalogError::Status { status: 404, .. }) => {
                return Err(CatalogError::NotFound { id })
            }
            other => other?,
        };

        let genres = details
            .genres
            .into_iter()
            .filter_map(|g| g.name)
            .collect::<Vec<_>>();

        Ok(Movie::new(details.id.unwrap_or(id), details.title.unwrap_or_default())
            .with_genres(genres)
            .with_rating(details.vote_average.unwrap_or(0.0))
            .with_year(parse_year(details.release_date.as_deref())))
    }

    async fn fetch_popular(&self, count: usize) -> Result<Vec<Movie>, CatalogError> {
        let mut movies = Vec::with_capacity(count);
        if count == 0 {
            return Ok(movies);
        }

        let genre_names = self.genre_names().await?;
        let pages = count.div_ceil(PAGE_SIZE).min(MAX_PAGE);

        for page in 1..=pages {
            let result: ResultPage = self
                .get_json("/movie/popular", &[("page", page.to_string())])
                .await?;

            for summary in result.results {
                if movies.len() >= count {
                    break;
                }
                if !summary.is_popular_enough() {
                    continue;
                }
                match summary.into_movie(&genre_names) {
                    Some(movie) => movies.push(movie),
                    None => warn!(page, "skipping popular entry without id or title"),
                }
            }

            if movies.len() >= count || result.total_pages.is_some_and(|t| page >= t) {
                break;
            }
        }

        debug!(requested = count, fetched = movies.len(), "fetched popular movies");
        Ok(movies)
    }

    async fn search_by_title(&self, query: &str, limit: usize) -> Result<Vec<Movie>, CatalogError> {
        let query = query.trim();
        if query.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let result: ResultPage = self
            .get_json(
                "/search/movie",
                &[
                    ("query", query.to_string()),
                    ("include_adult", "false".to_string()),
                    ("page", "1".to_string()),
                ],
            )
            .await?;

        // Search results carry genre ids only; full genres come from
        // fetch_by_id once the user has picked a match.
        let no_genres = HashMap::new();
        Ok(result
            .results
            .into_iter()
            .filter(|r| r.release_date.is_some())
            .filter_map(|r| r.into_movie(&no_genres))
            .take(limit)
            .collect())
    }
}
