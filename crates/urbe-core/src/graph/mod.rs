//! Route graphs and their algorithms
//!
//! Provides the adjacency-list weighted graph each city owns, plus:
//! - BFS and DFS traversal in adjacency insertion order
//! - Dijkstra shortest-path queries

pub mod algos;
pub mod types;

pub use algos::{bfs, dfs, shortest_path};
pub use types::{EdgeWeight, RouteEdge, RouteResult};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UrbeError};

/// Adjacency-list weighted graph over string vertex labels.
///
/// Vertices referenced by an edge are created on demand. An undirected
/// edge is stored as two directed entries, inserted together. Parallel
/// edges are retained; nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteGraph {
    adjacency: HashMap<String, Vec<RouteEdge>>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex; a no-op when it already exists.
    pub fn add_vertex(&mut self, label: &str) {
        self.adjacency.entry(label.to_string()).or_default();
    }

    /// Append a weighted edge, registering both endpoints.
    ///
    /// Rejects negative and NaN weights up front; the shortest-path
    /// relaxation assumes non-negative costs.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64, directed: bool) -> Result<()> {
        if weight.is_nan() || weight < 0.0 {
            return Err(UrbeError::invalid_value("edge weight", weight));
        }

        self.add_vertex(from);
        self.add_vertex(to);

        let weight = EdgeWeight::new(weight);
        self.push_entry(from, to, weight);
        if !directed {
            self.push_entry(to, from, weight);
        }
        Ok(())
    }

    fn push_entry(&mut self, from: &str, to: &str, weight: EdgeWeight) {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push(RouteEdge {
                to: to.to_string(),
                weight,
            });
    }

    pub fn contains(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// Adjacency entries of a vertex, in insertion order.
    pub fn neighbors(&self, label: &str) -> Option<&[RouteEdge]> {
        self.adjacency.get(label).map(Vec::as_slice)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed adjacency entries (an undirected edge counts twice).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Vertex labels in sorted order, for stable display.
    pub fn vertices(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }
}
