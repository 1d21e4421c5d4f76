// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! `cinegraph build`: fetch the popular pool, build the graph, save it.
//!
//! Always rebuilds, even when a graph file already exists.

use crate::cli::output::{self, Styled};
use crate::cli::session;
use crate::settings::Settings;
use anyhow::{Context, Result};
use cinegraph::Catalog;

pub async fn run(settings: &Settings, catalog: Option<&dyn Catalog>) -> Result<()> {
    let catalog = catalog.context("building needs a catalog; pass --catalog FILE or set TMDB_API_KEY")?;

    let s = Styled::new();
    output::print_header(&s);

    let recommender = session::build_and_save(settings, catalog).await?;
    let graph = recommender.graph();

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "path": settings.graph_path,
            "movies": graph.len(),
            "edges": graph.edge_count(),
            "neighbors": recommender.config().neighbors,
        }));
    } else if !output::is_quiet() {
        eprintln!();
        output::print_check(s.ok_sym(), "movies", &graph.len().to_string());
        output::print_check(s.ok_sym(), "edges", &graph.edge_count().to_string());
        output::print_check(s.ok_sym(), "saved to", &settings.graph_path.display().to_string());
        eprintln!();
    }
    Ok(())
}
