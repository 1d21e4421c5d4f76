// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Runtime settings: home directory, config file, env and flag overrides.
//!
//! Precedence, lowest to highest: built-in defaults, `<home>/config.json`,
//! environment variables, command-line flags.

use crate::tmdb::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use cinegraph::RecommenderConfig;
use std::path::{Path, PathBuf};

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub graph: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub api_key: Option<String>,
    pub neighbors: Option<usize>,
    pub pool_size: Option<usize>,
    pub top_k: Option<usize>,
}

/// Fully resolved settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the graph, config and REPL history.
    pub home: PathBuf,
    /// Graph file to load from and save to.
    pub graph_path: PathBuf,
    /// Offline catalog (JSON array of movies) used instead of TMDB.
    pub catalog_file: Option<PathBuf>,
    pub api_key: Option<String>,
    pub tmdb_url: String,
    pub recommender: RecommenderConfig,
}

/// Get the cinegraph home directory (~/.cinegraph unless overridden).
pub fn cinegraph_home() -> PathBuf {
    if let Ok(dir) = std::env::var("CINEGRAPH_HOME") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cinegraph")
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn resolve(overrides: &Overrides) -> Result<Self> {
        Self::resolve_with(cinegraph_home(), |key| std::env::var(key).ok(), overrides)
    }

    /// Resolve settings with an explicit home directory and env lookup.
    pub fn resolve_with<F>(home: PathBuf, env: F, overrides: &Overrides) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut recommender = read_config(&home.join("config.json"))?;

        if let Some(n) = overrides.neighbors {
            recommender.neighbors = n;
        }
        if let Some(n) = overrides.pool_size {
            recommender.pool_size = n;
        }
        if let Some(n) = overrides.top_k {
            recommender.top_k = n;
        }
        recommender
            .validate()
            .context("neighbors and top-k must be at least 1")?;

        let api_key = overrides
            .api_key
            .clone()
            .or_else(|| env("TMDB_API_KEY"))
            .filter(|k| !k.trim().is_empty());
        let tmdb_url = env("CINEGRAPH_TMDB_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let graph_path = overrides
            .graph
            .clone()
            .unwrap_or_else(|| home.join("graph.json"));

        Ok(Self {
            home,
            graph_path,
            catalog_file: overrides.catalog.clone(),
            api_key,
            tmdb_url,
            recommender,
        })
    }

    /// REPL history file.
    pub fn history_path(&self) -> PathBuf {
        self.home.join("repl_history")
    }
}

fn read_config(path: &Path) -> Result<RecommenderConfig> {
    if !path.exists() {
        return Ok(RecommenderConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    RecommenderConfig::from_json(&text)
        .with_context(|| format!("invalid config: {}", path.display()))
}
