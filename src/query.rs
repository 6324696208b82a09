//! Bounded breadth-first neighborhood queries.

use crate::graph::ChunkedGraph;

use std::collections::{BTreeSet, HashSet, VecDeque};

#[cfg(test)]
mod tests;

//-----------------------------------------------------------------------------

/// Returns a neighborhood of the given size around the start node.
///
/// The traversal is a breadth-first search over [`ChunkedGraph::neighbors`],
/// which loads chunks on demand, so the result can span any number of chunks
/// while the graph stays within its cache bound. Because the adjacency
/// relation is symmetric, the frontier naturally grows on both sides of every
/// visited node instead of running away in one direction.
///
/// The search stops once the neighborhood exceeds `target_size` nodes: if the
/// connected component around `start` has at least `target_size + 1` nodes,
/// exactly `target_size + 1` are returned; otherwise the whole component is.
/// A start node with no neighbors returns just `{start}`.
///
/// # Errors
///
/// Returns an error if a visited node is missing from the node index or if a
/// chunk cannot be loaded.
pub fn bfs(graph: &mut ChunkedGraph, start: &str, target_size: usize) -> Result<BTreeSet<String>, String> {
    let mut neighborhood: BTreeSet<String> = BTreeSet::new();
    neighborhood.insert(start.to_string());

    // A node with no edges is its own neighborhood.
    if graph.neighbors(start)?.is_empty() {
        return Ok(neighborhood);
    }

    let mut queue: VecDeque<String> = VecDeque::new();
    let mut seen: HashSet<String> = HashSet::new();
    queue.push_back(start.to_string());
    seen.insert(start.to_string());

    while !queue.is_empty() && neighborhood.len() <= target_size {
        let current = queue.pop_front().unwrap();
        neighborhood.insert(current.clone());
        for neighbor in graph.neighbors(&current)? {
            if seen.insert(neighbor.clone()) {
                queue.push_back(neighbor);
            }
        }
    }

    Ok(neighborhood)
}

//-----------------------------------------------------------------------------
