// Copyright 2026 Cinegraph Contributors
// SPDX-License-Identifier: Apache-2.0

//! Single-source shortest paths over the similarity graph.

use crate::error::{GraphError, Result};
use crate::graph::types::Edge;
use crate::navigation::OrderedF64;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Distances and predecessors from one source node.
#[derive(Debug, Clone, PartialEq)]
pub struct DijkstraResult {
    /// Node the search started from.
    pub source: usize,
    /// Shortest distance per node; `f64::INFINITY` when unreachable.
    pub distance: Vec<f64>,
    /// Previous node on a shortest path; `None` for the source and for
    /// unreachable nodes.
    pub predecessor: Vec<Option<usize>>,
}

impl DijkstraResult {
    pub fn is_reachable(&self, node: usize) -> bool {
        self.distance.get(node).is_some_and(|d| d.is_finite())
    }

    /// Reconstruct the node sequence from the source to `target`.
    ///
    /// Returns `None` when `target` is unreachable or out of range.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor.get(current).copied().flatten()?;
            path.push(current);
            if path.len() > self.distance.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Run Dijkstra's algorithm from `source`.
///
/// Edge weights must be non-negative, which the similarity transform
/// guarantees. The frontier is a binary min-heap without decrease-key:
/// improved nodes are pushed again and stale entries are skipped on pop.
pub fn shortest_paths(adjacency: &[Vec<Edge>], source: usize) -> Result<DijkstraResult> {
    let n = adjacency.len();
    if source >= n {
        return Err(GraphError::IndexOutOfRange { index: source, len: n });
    }

    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    dist[source] = 0.0;

    // Min-heap: (cost, node)
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((OrderedF64(0.0), source)));

    while let Some(Reverse((OrderedF64(cost), node))) = heap.pop() {
        if cost > dist[node] {
            continue;
        }

        for edge in &adjacency[node] {
            let next = cost + edge.weight;
            if next < dist[edge.target] {
                dist[edge.target] = next;
                prev[edge.target] = Some(node);
                heap.push(Reverse((OrderedF64(next), edge.target)));
            }
        }
    }

    Ok(DijkstraResult {
        source,
        distance: dist,
        predecessor: prev,
    })
}
