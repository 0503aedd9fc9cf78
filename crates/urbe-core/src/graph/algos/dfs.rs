use std::collections::HashSet;

use crate::error::{Result, UrbeError};
use crate::graph::RouteGraph;

/// Depth-first traversal from `start`.
///
/// Pre-order visitation driven by an explicit stack; pushing each
/// vertex's neighbors in reverse reproduces the visit order of the
/// recursive form without risking call-stack growth on long chains.
/// Fails when `start` is not a registered vertex.
#[tracing::instrument(skip(graph), fields(start = %start))]
pub fn dfs(graph: &RouteGraph, start: &str) -> Result<Vec<String>> {
    if !graph.contains(start) {
        return Err(UrbeError::vertex_not_found(start));
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = vec![start];
    let mut order: Vec<String> = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.to_string());
        if let Some(edges) = graph.neighbors(current) {
            for edge in edges.iter().rev() {
                if !visited.contains(edge.to.as_str()) {
                    stack.push(edge.to.as_str());
                }
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> RouteGraph {
        let mut graph = RouteGraph::new();
        graph.add_edge("Centro", "BairroA", 5.0, false).unwrap();
        graph.add_edge("Centro", "BairroB", 2.0, false).unwrap();
        graph.add_edge("BairroA", "BairroC", 4.0, false).unwrap();
        graph.add_edge("BairroB", "BairroC", 8.0, false).unwrap();
        graph
    }

    #[test]
    fn test_preorder_dives_before_widening() {
        let order = dfs(&sample_graph(), "Centro").unwrap();
        // First neighbor of Centro is BairroA, whose first unvisited
        // neighbor is BairroC, which reaches BairroB before backtracking
        assert_eq!(order, vec!["Centro", "BairroA", "BairroC", "BairroB"]);
    }

    #[test]
    fn test_missing_start_is_an_error() {
        let err = dfs(&sample_graph(), "Periferia").unwrap_err();
        assert!(err.to_string().contains("vertex not found"));
    }

    #[test]
    fn test_visits_each_reachable_vertex_once() {
        let order = dfs(&sample_graph(), "BairroC").unwrap();
        assert_eq!(order.len(), 4);
        let unique: std::collections::HashSet<&String> = order.iter().collect();
        assert_eq!(unique.len(), order.len());
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let mut graph = RouteGraph::new();
        for i in 0..10_000u32 {
            graph
                .add_edge(&format!("v{}", i), &format!("v{}", i + 1), 1.0, true)
                .unwrap();
        }
        let order = dfs(&graph, "v0").unwrap();
        assert_eq!(order.len(), 10_001);
    }
}
