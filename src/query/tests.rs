use super::*;

use crate::graph::GraphConfig;
use crate::internal;

use std::path::Path;

//-----------------------------------------------------------------------------

// The example graph has one component {A, B, C, D} with edges A-B, C-D, and
// the cross-chunk edge A-C, plus the isolated node E.

fn open_example(graph_file: &Path) -> ChunkedGraph {
    let graph = ChunkedGraph::open(graph_file);
    assert!(graph.is_ok(), "Failed to open the graph: {}", graph.unwrap_err());
    graph.unwrap()
}

fn neighborhood(graph: &mut ChunkedGraph, start: &str, target_size: usize) -> BTreeSet<String> {
    let result = graph.bfs(start, target_size);
    assert!(
        result.is_ok(),
        "BFS from {} with size {} failed: {}", start, target_size, result.unwrap_err()
    );
    result.unwrap()
}

//-----------------------------------------------------------------------------

#[test]
fn neighborhood_boundary() {
    let graph_file = internal::example_graph("bfs-boundary");
    let mut graph = open_example(&graph_file);

    // Large enough component: exactly target_size + 1 nodes.
    for target_size in [1, 2, 3] {
        let result = neighborhood(&mut graph, "A", target_size);
        assert_eq!(
            result.len(), target_size + 1,
            "Wrong neighborhood size for target size {}", target_size
        );
        assert!(result.contains("A"), "The neighborhood does not contain the start node");
    }

    // Small component: the whole reachable set.
    let result = neighborhood(&mut graph, "A", 100);
    let expected: BTreeSet<String> = ["A", "B", "C", "D"].iter().map(|x| x.to_string()).collect();
    assert_eq!(result, expected, "Wrong neighborhood for the full component");

    internal::remove_graph(&graph_file);
}

#[test]
fn lonely_node() {
    let graph_file = internal::example_graph("bfs-lonely");
    let mut graph = open_example(&graph_file);

    for target_size in [0, 5] {
        let result = neighborhood(&mut graph, "E", target_size);
        let expected: BTreeSet<String> = [String::from("E")].into_iter().collect();
        assert_eq!(result, expected, "Wrong neighborhood for an isolated node");
    }

    internal::remove_graph(&graph_file);
}

#[test]
fn start_node_not_resident() {
    let graph_file = internal::example_graph("bfs-nonresident");
    let mut graph = open_example(&graph_file);

    assert!(!graph.is_resident("C"), "Node C is resident before any query");
    let result = neighborhood(&mut graph, "C", 1);
    assert_eq!(result.len(), 2, "Wrong neighborhood size from a non-resident start");
    assert!(result.contains("C"), "The neighborhood does not contain the start node");

    internal::remove_graph(&graph_file);
}

#[test]
fn unknown_start_node() {
    let graph_file = internal::example_graph("bfs-unknown");
    let mut graph = open_example(&graph_file);

    assert!(graph.bfs("no-such-node", 10).is_err(), "BFS succeeded from an unknown node");

    internal::remove_graph(&graph_file);
}

// The traversal must cross chunk boundaries even when the cache holds a
// single chunk at a time.
#[test]
fn bounded_cache_traversal() {
    let graph_file = internal::example_graph("bfs-bounded");
    let config = GraphConfig { cache_size: 1, ..GraphConfig::default() };
    let graph = ChunkedGraph::open_with_config(&graph_file, config);
    assert!(graph.is_ok(), "Failed to open the graph: {}", graph.unwrap_err());
    let mut graph = graph.unwrap();

    let result = neighborhood(&mut graph, "A", 100);
    let expected: BTreeSet<String> = ["A", "B", "C", "D"].iter().map(|x| x.to_string()).collect();
    assert_eq!(result, expected, "Wrong neighborhood with a single-chunk cache");
    assert!(graph.loaded_chunks().len() <= 1, "The cache bound was exceeded during BFS");

    internal::remove_graph(&graph_file);
}

//-----------------------------------------------------------------------------
