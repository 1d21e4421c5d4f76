// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! A similarity graph bundled with its tuning, ready to answer queries.

use crate::benchmark::{self, Comparison};
use crate::config::RecommenderConfig;
use crate::error::{GraphError, Result};
use crate::graph::{build_knn_graph, insert_and_connect, MovieGraph};
use crate::movie::Movie;
use crate::navigation::pathfinder::shortest_paths;
use crate::navigation::ranking::top_k_by_distance;
use crate::similarity::similarity_score;
use serde::Serialize;
use tracing::{info, warn};

/// One recommended movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub index: usize,
    pub tmdb_id: i64,
    pub title: String,
    pub year: i32,
    /// Shortest-path distance from the seed.
    pub distance: f64,
    /// Direct similarity to the seed.
    pub similarity: f64,
    /// Node chain from the seed to this movie, both ends included.
    pub path: Vec<usize>,
}

/// Owns the graph and answers recommendation queries against it.
#[derive(Debug, Clone)]
pub struct Recommender {
    graph: MovieGraph,
    config: RecommenderConfig,
}

impl Recommender {
    /// Wrap an existing (e.g. loaded) graph.
    pub fn new(graph: MovieGraph, config: RecommenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { graph, config })
    }

    /// Insert `movies` into a fresh graph and run the KNN build.
    ///
    /// Records with invalid ids are skipped with a warning; repeated ids keep
    /// their first occurrence.
    pub fn from_movies<I>(movies: I, config: RecommenderConfig) -> Result<Self>
    where
        I: IntoIterator<Item = Movie>,
    {
        config.validate()?;

        let mut graph = MovieGraph::new();
        for movie in movies {
            match graph.insert_movie(movie) {
                Ok(_) => {}
                Err(GraphError::InvalidId { id }) => {
                    warn!(id, "skipping movie with invalid id");
                }
                Err(e) => return Err(e),
            }
        }

        info!(movies = graph.len(), neighbors = config.neighbors, "building graph");
        build_knn_graph(&mut graph, config.neighbors)?;
        Ok(Self { graph, config })
    }

    pub fn graph(&self) -> &MovieGraph {
        &self.graph
    }

    pub fn into_graph(self) -> MovieGraph {
        self.graph
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    pub fn index_of(&self, tmdb_id: i64) -> Option<usize> {
        self.graph.index_of(tmdb_id)
    }

    /// Index of `movie`, inserting and connecting it first if it is new.
    pub fn ensure_indexed(&mut self, movie: Movie) -> Result<usize> {
        insert_and_connect(&mut self.graph, movie, self.config.neighbors)
    }

    /// Top `config.top_k` recommendations for the movie at `source`.
    pub fn recommend(&self, source: usize) -> Result<Vec<Recommendation>> {
        self.recommend_k(source, self.config.top_k)
    }

    /// Top `k` recommendations by shortest-path distance.
    pub fn recommend_k(&self, source: usize, k: usize) -> Result<Vec<Recommendation>> {
        let paths = shortest_paths(self.graph.adjacency(), source)?;
        let ranked = top_k_by_distance(source, &paths, k)?;
        let seed = self.graph.movie(source);

        Ok(ranked
            .into_iter()
            .map(|index| {
                let movie = self.graph.movie(index);
                Recommendation {
                    index,
                    tmdb_id: movie.tmdb_id,
                    title: movie.name.clone(),
                    year: movie.year,
                    distance: paths.distance[index],
                    similarity: similarity_score(seed, movie),
                    path: paths.path_to(index).unwrap_or_default(),
                }
            })
            .collect())
    }

    /// Benchmark both rankings from `source`.
    pub fn compare(&self, source: usize, k: usize) -> Result<Comparison> {
        benchmark::compare(&self.graph, source, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(neighbors: usize, top_k: usize) -> RecommenderConfig {
        RecommenderConfig {
            neighbors,
            top_k,
            ..Default::default()
        }
    }

    fn chain() -> Vec<Movie> {
        // A and C share nothing directly but are linked through B.
        vec![
            Movie::new(1, "A").with_genres(["Western"]).with_rating(7.0).with_year(1970),
            Movie::new(2, "B").with_genres(["Western", "Noir"]).with_rating(7.0).with_year(1972),
            Movie::new(3, "C").with_genres(["Noir"]).with_rating(7.0).with_year(1974),
        ]
    }

    #[test]
    fn test_from_movies_skips_invalid_ids() {
        let mut movies = chain();
        movies.push(Movie::new(0, "broken"));
        movies.push(Movie::new(-4, "also broken"));

        let rec = Recommender::from_movies(movies, config(2, 5)).unwrap();
        assert_eq!(rec.graph().len(), 3);
    }

    #[test]
    fn test_recommend_reaches_through_chain() {
        let rec = Recommender::from_movies(chain(), config(2, 5)).unwrap();
        let recs = rec.recommend(0).unwrap();

        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "C"]);

        let c = &recs[1];
        assert_eq!(c.similarity, 0.0);
        assert_eq!(c.path, vec![0, 1, 2]);
        assert!(c.distance > recs[0].distance);
    }

    #[test]
    fn test_ensure_indexed_inserts_once() {
        let mut rec = Recommender::from_movies(chain(), config(2, 5)).unwrap();
        let newcomer = Movie::new(9, "D").with_genres(["Noir"]).with_rating(7.0).with_year(1975);

        let index = rec.ensure_indexed(newcomer.clone()).unwrap();
        assert_eq!(index, 3);
        assert_eq!(rec.ensure_indexed(newcomer).unwrap(), 3);
        assert_eq!(rec.graph().len(), 4);
        assert!(!rec.graph().edges_from(3).is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            Recommender::from_movies(chain(), config(0, 5)),
            Err(GraphError::InvalidK)
        ));
        assert!(matches!(
            Recommender::new(MovieGraph::new(), config(3, 0)),
            Err(GraphError::InvalidK)
        ));
    }

    #[test]
    fn test_recommend_out_of_range_source() {
        let rec = Recommender::from_movies(chain(), config(2, 5)).unwrap();
        assert!(matches!(
            rec.recommend(10),
            Err(GraphError::IndexOutOfRange { index: 10, len: 3 })
        ));
    }
}
