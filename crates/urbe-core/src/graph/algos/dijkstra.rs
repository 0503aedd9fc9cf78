use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::error::{Result, UrbeError};
use crate::graph::types::{EdgeWeight, HeapEntry, RouteResult};
use crate::graph::RouteGraph;

/// Single-pair shortest path via Dijkstra relaxation.
///
/// Fails with `VertexNotFound` when either endpoint is absent. A present
/// but unreachable destination yields `found = false` with no cost and
/// an empty path. Requires the non-negative weights `RouteGraph`
/// enforces at insertion.
#[tracing::instrument(skip(graph), fields(from = %from, to = %to))]
pub fn shortest_path(graph: &RouteGraph, from: &str, to: &str) -> Result<RouteResult> {
    if !graph.contains(from) {
        return Err(UrbeError::vertex_not_found(from));
    }
    if !graph.contains(to) {
        return Err(UrbeError::vertex_not_found(to));
    }

    let mut distances: HashMap<String, EdgeWeight> = graph
        .vertices()
        .into_iter()
        .map(|vertex| (vertex.to_string(), EdgeWeight::INFINITY))
        .collect();
    distances.insert(from.to_string(), EdgeWeight::ZERO);

    let mut predecessors: HashMap<String, String> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        vertex: from.to_string(),
        cost: EdgeWeight::ZERO,
    }));

    while let Some(Reverse(HeapEntry { vertex, cost })) = heap.pop() {
        // Stale entry: a shorter path to this vertex was already settled
        if distances
            .get(&vertex)
            .is_some_and(|best| cost.value() > best.value())
        {
            continue;
        }

        // Non-negative weights make the first pop of the destination optimal
        if vertex == to {
            break;
        }

        if let Some(edges) = graph.neighbors(&vertex) {
            for edge in edges {
                let candidate = cost + edge.weight;
                let known = distances
                    .get(edge.to.as_str())
                    .copied()
                    .unwrap_or(EdgeWeight::INFINITY);
                if candidate.value() < known.value() {
                    distances.insert(edge.to.clone(), candidate);
                    predecessors.insert(edge.to.clone(), vertex.clone());
                    heap.push(Reverse(HeapEntry {
                        vertex: edge.to.clone(),
                        cost: candidate,
                    }));
                }
            }
        }
    }

    Ok(build_route(from, to, &distances, &predecessors))
}

/// Reconstruct the path by walking predecessors backward from `to`.
fn build_route(
    from: &str,
    to: &str,
    distances: &HashMap<String, EdgeWeight>,
    predecessors: &HashMap<String, String>,
) -> RouteResult {
    let total = distances
        .get(to)
        .copied()
        .unwrap_or(EdgeWeight::INFINITY);

    if !total.is_finite() {
        return RouteResult {
            from: from.to_string(),
            to: to.to_string(),
            found: false,
            cost: None,
            path: Vec::new(),
        };
    }

    let mut path = vec![to.to_string()];
    let mut current = to;
    while let Some(previous) = predecessors.get(current) {
        path.push(previous.clone());
        current = previous;
    }
    path.reverse();

    RouteResult {
        from: from.to_string(),
        to: to.to_string(),
        found: true,
        cost: Some(total),
        path,
    }
}
