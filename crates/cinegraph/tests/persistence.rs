// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Saving and loading graphs on disk.

use cinegraph::{build_knn_graph, GraphError, Movie, MovieGraph};

fn sample_graph() -> MovieGraph {
    let mut graph = MovieGraph::new();
    let genres = [["Drama", "War"], ["Drama", "History"], ["War", "Action"], ["Comedy", "Drama"], ["Action", "Thriller"]];
    for (i, pair) in genres.iter().enumerate() {
        let id = i as i64 + 1;
        graph
            .insert_movie(
                Movie::new(id, format!("film {id}"))
                    .with_genres(pair.iter().copied())
                    .with_rating(6.5 + i as f64 * 0.3)
                    .with_year(1990 + i as i32 * 3),
            )
            .unwrap();
    }
    build_knn_graph(&mut graph, 2).unwrap();
    graph
}

fn triples(graph: &MovieGraph) -> Vec<(usize, usize, u64)> {
    let mut out: Vec<(usize, usize, u64)> = graph
        .adjacency()
        .iter()
        .enumerate()
        .flat_map(|(from, edges)| edges.iter().map(move |e| (from, e.target, e.weight.to_bits())))
        .collect();
    out.sort_unstable();
    out
}

#[test]
fn round_trip_preserves_movies_and_edges() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");

    let original = sample_graph();
    original.save(&path).unwrap();
    let loaded = MovieGraph::load(&path).unwrap();

    assert_eq!(loaded.movies(), original.movies());
    assert_eq!(triples(&loaded), triples(&original));
    for movie in original.movies() {
        assert_eq!(loaded.index_of(movie.tmdb_id), original.index_of(movie.tmdb_id));
    }
}

#[test]
fn short_adjacency_table_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");

    let original = sample_graph();
    let mut value: serde_json::Value = serde_json::from_str(&original.to_json().unwrap()).unwrap();
    value["adj"].as_array_mut().unwrap().pop();
    std::fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

    let mut target = MovieGraph::new();
    target.insert_movie(Movie::new(77, "untouched")).unwrap();

    let result = MovieGraph::load(&path);
    assert!(matches!(result, Err(GraphError::AdjacencyMismatch { items: 5, rows: 4 })));
    if let Ok(loaded) = result {
        target = loaded;
    }
    assert_eq!(target.len(), 1);
    assert_eq!(target.movie(0).name, "untouched");
}

#[test]
fn malformed_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");
    std::fs::write(&path, "{\"movies\": [").unwrap();
    assert!(matches!(MovieGraph::load(&path), Err(GraphError::Json(_))));
}
