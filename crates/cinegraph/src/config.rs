// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Recommender tuning knobs.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// Tuning for graph construction and querying.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Neighbors kept per movie when building the KNN graph.
    pub neighbors: usize,
    /// Recommendations returned per query.
    pub top_k: usize,
    /// Title-search candidates offered for disambiguation.
    pub search_limit: usize,
    /// Popular movies fetched when building a fresh graph.
    pub pool_size: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            neighbors: 30,
            top_k: 10,
            search_limit: 5,
            pool_size: 2000,
        }
    }
}

impl RecommenderConfig {
    /// Reject K values of zero.
    pub fn validate(&self) -> Result<()> {
        if self.neighbors == 0 || self.top_k == 0 {
            return Err(GraphError::InvalidK);
        }
        Ok(())
    }

    /// Parse a JSON config, filling in defaults for missing fields.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
