// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for similarity, graph search and ranking.

use cinegraph::similarity::{NOISE_FLOOR, UNRELATED_WEIGHT};
use cinegraph::{
    build_knn_graph, shortest_paths, similarity_score, top_k_by_distance, top_k_by_similarity,
    weight_from_similarity, Movie, MovieGraph,
};
use proptest::prelude::*;

const GENRES: &[&str] = &[
    "Action", "Comedy", "Drama", "Horror", "Romance", "Sci-Fi", "Thriller", "Western",
];

fn arb_movie(id: i64) -> impl Strategy<Value = Movie> {
    (
        prop::sample::subsequence(GENRES, 0..4),
        prop_oneof![Just(0.0f64), 1.0f64..10.0],
        prop_oneof![Just(0i32), 1950i32..2025],
    )
        .prop_map(move |(genres, rating, year)| {
            Movie::new(id, format!("movie {id}"))
                .with_genres(genres)
                .with_rating(rating)
                .with_year(year)
        })
}

fn arb_movies(max: usize) -> impl Strategy<Value = Vec<Movie>> {
    (2..=max).prop_flat_map(|n| {
        (0..n)
            .map(|i| arb_movie(i as i64 + 1).boxed())
            .collect::<Vec<_>>()
    })
}

fn graph_of(movies: &[Movie], k: usize) -> MovieGraph {
    let mut graph = MovieGraph::new();
    for m in movies {
        graph.insert_movie(m.clone()).unwrap();
    }
    build_knn_graph(&mut graph, k).unwrap();
    graph
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: similarity is symmetric and bounded, with a hard noise floor
    #[test]
    fn prop_similarity_symmetric_and_bounded(a in arb_movie(1), b in arb_movie(2)) {
        let ab = similarity_score(&a, &b);
        let ba = similarity_score(&b, &a);
        prop_assert_eq!(ab, ba);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert!(ab == 0.0 || ab >= NOISE_FLOOR);
    }

    /// Property: disjoint non-empty genre sets always score zero
    #[test]
    fn prop_disjoint_genres_score_zero(
        split in 1usize..GENRES.len(),
        rating in 1.0f64..10.0,
        year in 1950i32..2025,
    ) {
        let a = Movie::new(1, "a").with_genres(GENRES[..split].iter().copied()).with_rating(rating).with_year(year);
        let b = Movie::new(2, "b").with_genres(GENRES[split..].iter().copied()).with_rating(rating).with_year(year);
        prop_assert_eq!(similarity_score(&a, &b), 0.0);
    }

    /// Property: the edge weight strictly decreases as similarity grows
    #[test]
    fn prop_weight_strictly_decreasing(s in 0.001f64..1.0, delta in 0.001f64..1.0) {
        prop_assert!(weight_from_similarity(s + delta) < weight_from_similarity(s));
        prop_assert!(weight_from_similarity(s) < UNRELATED_WEIGHT);
        prop_assert_eq!(weight_from_similarity(-s), UNRELATED_WEIGHT);
    }

    /// Property: Dijkstra distances are consistent with every edge and
    /// every reachable node has a predecessor chain back to the source
    #[test]
    fn prop_shortest_paths_consistent(movies in arb_movies(20), k in 1usize..6) {
        let graph = graph_of(&movies, k);
        let source = 0;
        let res = shortest_paths(graph.adjacency(), source).unwrap();

        prop_assert_eq!(res.distance[source], 0.0);
        for (u, edges) in graph.adjacency().iter().enumerate() {
            if !res.is_reachable(u) {
                continue;
            }
            for e in edges {
                prop_assert!(res.distance[e.target] <= res.distance[u] + e.weight + 1e-9);
            }
            let path = res.path_to(u).unwrap();
            prop_assert_eq!(path[0], source);
            prop_assert_eq!(*path.last().unwrap(), u);
        }
    }

    /// Property: graph top-K excludes the source, respects K and is sorted
    #[test]
    fn prop_graph_topk_contract(movies in arb_movies(20), k in 1usize..8) {
        let graph = graph_of(&movies, 3);
        let res = shortest_paths(graph.adjacency(), 0).unwrap();
        let ranked = top_k_by_distance(0, &res, k).unwrap();

        prop_assert!(ranked.len() <= k);
        prop_assert!(!ranked.contains(&0));
        for pair in ranked.windows(2) {
            prop_assert!(res.distance[pair[0]] <= res.distance[pair[1]]);
        }
    }

    /// Property: heap top-K matches a brute-force sort
    #[test]
    fn prop_heap_topk_matches_brute_force(movies in arb_movies(50), k in 1usize..12, pick in any::<prop::sample::Index>()) {
        let source = pick.index(movies.len());
        let ranked = top_k_by_similarity(&movies[source], &movies, source, k).unwrap();

        prop_assert_eq!(ranked.len(), k.min(movies.len() - 1));

        let mut oracle: Vec<(f64, usize)> = movies
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != source)
            .map(|(i, m)| (similarity_score(&movies[source], m), i))
            .collect();
        oracle.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
        let expected: Vec<usize> = oracle.into_iter().take(k).map(|(_, i)| i).collect();

        prop_assert_eq!(ranked, expected);
    }

    /// Property: inserting an id twice never grows the graph
    #[test]
    fn prop_duplicate_insert_is_idempotent(movie in arb_movie(7)) {
        let mut graph = MovieGraph::new();
        let first = graph.insert_movie(movie.clone()).unwrap();
        let second = graph.insert_movie(movie).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(graph.len(), 1);
    }
}
