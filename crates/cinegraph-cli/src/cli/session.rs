// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Opening the catalog and getting a ready graph: load it from disk when the
//! graph file exists, otherwise build it from the catalog's popular pool and
//! save it.

use crate::cli::progress;
use crate::settings::Settings;
use crate::tmdb::TmdbClient;
use anyhow::{bail, Context, Result};
use cinegraph::{CachedCatalog, Catalog, MovieGraph, Recommender, StaticCatalog};
use tracing::info;

/// Pick the catalog: an offline file wins over TMDB; neither is allowed
/// when a saved graph is all the session needs.
pub fn open_catalog(settings: &Settings) -> Result<Option<Box<dyn Catalog>>> {
    if let Some(path) = &settings.catalog_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog: {}", path.display()))?;
        let catalog = StaticCatalog::from_json(&text)
            .with_context(|| format!("invalid catalog: {}", path.display()))?;
        info!(movies = catalog.len(), path = %path.display(), "using offline catalog");
        return Ok(Some(Box::new(catalog)));
    }

    match &settings.api_key {
        Some(key) => {
            let client = TmdbClient::new(key.clone(), settings.tmdb_url.clone())
                .context("failed to create TMDB client")?;
            Ok(Some(Box::new(CachedCatalog::new(client))))
        }
        None => Ok(None),
    }
}

/// Load the saved graph, or build and save a fresh one.
pub async fn load_or_build(settings: &Settings, catalog: Option<&dyn Catalog>) -> Result<Recommender> {
    let path = &settings.graph_path;
    if path.exists() {
        let bar = progress::create_spinner(&format!("Loading {}", path.display()));
        let graph = match MovieGraph::load(path) {
            Ok(graph) => graph,
            Err(e) => {
                progress::finish_failed(&bar, "Graph file rejected");
                return Err(e).with_context(|| format!("failed to load graph: {}", path.display()));
            }
        };
        progress::finish_ok(
            &bar,
            &format!("Loaded {} movies, {} edges", graph.len(), graph.edge_count()),
        );
        info!(movies = graph.len(), path = %path.display(), "graph loaded");
        return Ok(Recommender::new(graph, settings.recommender.clone())?);
    }

    let Some(catalog) = catalog else {
        bail!(
            "no graph at {} and no catalog to build one; pass --catalog FILE or set TMDB_API_KEY",
            path.display()
        );
    };
    build_and_save(settings, catalog).await
}

/// Fetch the popular pool, build the KNN graph and save it.
pub async fn build_and_save(settings: &Settings, catalog: &dyn Catalog) -> Result<Recommender> {
    let config = settings.recommender.clone();

    let bar = progress::create_spinner(&format!("Fetching {} popular movies", config.pool_size));
    let movies = match catalog.fetch_popular(config.pool_size).await {
        Ok(movies) => movies,
        Err(e) => {
            progress::finish_failed(&bar, "Catalog request failed");
            return Err(e).context("failed to fetch popular movies");
        }
    };
    if movies.is_empty() {
        progress::finish_failed(&bar, "Catalog returned no movies");
        bail!("catalog returned no movies; nothing to build");
    }
    progress::finish_ok(&bar, &format!("Fetched {} movies", movies.len()));

    let bar = progress::create_spinner(&format!("Building graph (K = {})", config.neighbors));
    let recommender = tokio::task::spawn_blocking(move || Recommender::from_movies(movies, config))
        .await
        .context("graph build task failed")??;
    let graph = recommender.graph();
    progress::finish_ok(
        &bar,
        &format!("Built graph: {} movies, {} edges", graph.len(), graph.edge_count()),
    );

    graph
        .save(&settings.graph_path)
        .with_context(|| format!("failed to save graph: {}", settings.graph_path.display()))?;
    info!(path = %settings.graph_path.display(), "graph saved");

    Ok(recommender)
}
