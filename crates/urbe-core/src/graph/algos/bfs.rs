use std::collections::{HashSet, VecDeque};

use crate::error::{Result, UrbeError};
use crate::graph::RouteGraph;

/// Breadth-first traversal from `start`.
///
/// Neighbors are expanded in adjacency-list insertion order; vertices
/// are marked visited when enqueued, so each appears exactly once.
/// Fails when `start` is not a registered vertex.
#[tracing::instrument(skip(graph), fields(start = %start))]
pub fn bfs(graph: &RouteGraph, start: &str) -> Result<Vec<String>> {
    if !graph.contains(start) {
        return Err(UrbeError::vertex_not_found(start));
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut frontier: VecDeque<&str> = VecDeque::new();
    let mut order: Vec<String> = Vec::new();

    visited.insert(start);
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        order.push(current.to_string());
        if let Some(edges) = graph.neighbors(current) {
            for edge in edges {
                if visited.insert(edge.to.as_str()) {
                    frontier.push_back(edge.to.as_str());
                }
            }
        }
    }

    Ok(order)
}
