// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! End-to-end ranking through both top-K paths.

use cinegraph::{
    build_knn_graph, compare, shortest_paths, similarity_score, top_k_by_distance,
    top_k_by_similarity, Movie, MovieGraph, Recommender, RecommenderConfig,
};

fn five_movies() -> MovieGraph {
    let mut graph = MovieGraph::new();
    let movies = [
        // A
        Movie::new(101, "Blade Runner")
            .with_genres(["Sci-Fi", "Thriller"])
            .with_rating(8.1)
            .with_year(1982),
        // B: every genre of A
        Movie::new(102, "Minority Report")
            .with_genres(["Thriller", "Sci-Fi"])
            .with_rating(7.6)
            .with_year(2002),
        // C: no genre in common with A
        Movie::new(103, "Pride and Prejudice")
            .with_genres(["Romance", "Drama"])
            .with_rating(7.8)
            .with_year(2005),
        Movie::new(104, "Gattaca")
            .with_genres(["Sci-Fi", "Drama"])
            .with_rating(7.8)
            .with_year(1997),
        Movie::new(105, "Sense and Sensibility")
            .with_genres(["Romance", "Drama"])
            .with_rating(7.7)
            .with_year(1995),
    ];
    for m in movies {
        graph.insert_movie(m).unwrap();
    }
    graph
}

fn position(list: &[usize], index: usize) -> Option<usize> {
    list.iter().position(|&i| i == index)
}

#[test]
fn shared_genres_outrank_disjoint_in_both_rankings() {
    let mut graph = five_movies();
    build_knn_graph(&mut graph, 2).unwrap();

    let (a, b, c) = (0, 1, 2);
    assert!(similarity_score(graph.movie(a), graph.movie(b)) > 0.5);
    assert_eq!(similarity_score(graph.movie(a), graph.movie(c)), 0.0);

    let paths = shortest_paths(graph.adjacency(), a).unwrap();
    let by_distance = top_k_by_distance(a, &paths, 2).unwrap();
    let by_similarity = top_k_by_similarity(graph.movie(a), graph.movies(), a, 2).unwrap();

    for ranked in [&by_distance, &by_similarity] {
        let b_pos = position(ranked, b).expect("B must be recommended");
        if let Some(c_pos) = position(ranked, c) {
            assert!(b_pos < c_pos);
        }
        assert!(!ranked.contains(&a));
        assert!(ranked.len() <= 2);
    }
    assert_eq!(by_similarity[0], b);
}

#[test]
fn graph_ranking_sorted_by_distance() {
    let mut graph = five_movies();
    build_knn_graph(&mut graph, 2).unwrap();

    for source in 0..graph.len() {
        let paths = shortest_paths(graph.adjacency(), source).unwrap();
        let ranked = top_k_by_distance(source, &paths, 4).unwrap();
        for pair in ranked.windows(2) {
            assert!(paths.distance[pair[0]] <= paths.distance[pair[1]]);
        }
        for &node in &ranked {
            let path = paths.path_to(node).unwrap();
            assert_eq!(path.first(), Some(&source));
            assert_eq!(path.last(), Some(&node));
        }
    }
}

#[test]
fn comparison_report_is_consistent() {
    let mut graph = five_movies();
    build_knn_graph(&mut graph, 2).unwrap();

    let report = compare(&graph, 0, 2).unwrap();
    let graph_set = report.graph.indices();
    let heap_set = report.heap.indices();
    let shared = graph_set.iter().filter(|i| heap_set.contains(i)).count();

    assert_eq!(report.overlap, shared);
    assert_eq!(report.consistency, shared as f64 / 2.0 * 100.0);
    assert_eq!(report.heap.ranked.len(), 2);
}

#[test]
fn recommender_inserts_unknown_seed() {
    let graph = five_movies();
    let movies = graph.movies().to_vec();
    let config = RecommenderConfig {
        neighbors: 2,
        top_k: 3,
        ..Default::default()
    };
    let mut rec = Recommender::from_movies(movies, config).unwrap();

    assert_eq!(rec.index_of(106), None);
    let seed = Movie::new(106, "Ex Machina")
        .with_genres(["Sci-Fi", "Thriller"])
        .with_rating(7.7)
        .with_year(2014);
    let src = rec.ensure_indexed(seed).unwrap();
    assert_eq!(rec.index_of(106), Some(src));

    let recs = rec.recommend(src).unwrap();
    assert!(!recs.is_empty());
    assert!(recs.len() <= 3);
    assert!(recs.iter().all(|r| r.index != src));
}
