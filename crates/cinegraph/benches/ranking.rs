// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmarks for graph construction and the two ranking paths.
use cinegraph::{
    build_knn_graph, shortest_paths, top_k_by_distance, top_k_by_similarity, Movie, MovieGraph,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GENRES: &[&str] = &[
    "Action", "Adventure", "Animation", "Comedy", "Crime", "Drama", "Fantasy", "Horror",
    "Mystery", "Romance", "Sci-Fi", "Thriller",
];

// ============================================================================
// Helper Functions
// ============================================================================

fn random_movies(n: usize, seed: u64) -> Vec<Movie> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let count = rng.gen_range(1..=3);
            let genres: Vec<&str> = (0..count)
                .map(|_| GENRES[rng.gen_range(0..GENRES.len())])
                .collect();
            Movie::new(i as i64 + 1, format!("movie {i}"))
                .with_genres(genres)
                .with_rating(rng.gen_range(4.0..9.0))
                .with_year(rng.gen_range(1970..2025))
        })
        .collect()
}

fn random_graph(n: usize, k: usize) -> MovieGraph {
    let mut graph = MovieGraph::with_capacity(n);
    for m in random_movies(n, 42) {
        graph.insert_movie(m).unwrap();
    }
    build_knn_graph(&mut graph, k).unwrap();
    graph
}

// ============================================================================
// Construction
// ============================================================================

fn bench_knn_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("knn_build");
    group.sample_size(10);

    for n in [200, 500, 1000] {
        let movies = random_movies(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &movies, |b, movies| {
            b.iter(|| {
                let mut graph = MovieGraph::with_capacity(movies.len());
                for m in movies {
                    graph.insert_movie(m.clone()).unwrap();
                }
                build_knn_graph(&mut graph, 30).unwrap();
                black_box(graph.edge_count())
            });
        });
    }
    group.finish();
}

// ============================================================================
// Ranking
// ============================================================================

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k");

    for n in [500, 2000] {
        let graph = random_graph(n, 30);

        group.bench_with_input(BenchmarkId::new("graph", n), &graph, |b, graph| {
            b.iter(|| {
                let res = shortest_paths(graph.adjacency(), black_box(0)).unwrap();
                top_k_by_distance(0, &res, 10).unwrap()
            });
        });

        group.bench_with_input(BenchmarkId::new("heap", n), &graph, |b, graph| {
            b.iter(|| {
                top_k_by_similarity(graph.movie(0), graph.movies(), black_box(0), 10).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_knn_build, bench_ranking);
criterion_main!(benches);
