//! # gfa-chunk: random access to chunked GFA graphs.
//!
//! This is a query engine for assembly and pangenome graphs that are too large
//! to keep in memory. The graph has been partitioned offline into chunks of
//! related segments. Each chunk is stored as an independent gzip member in a
//! single graph file, and two companion indexes make random access possible:
//!
//! * `graph.gfa.gz.idx`: a text file mapping each chunk id to the byte range
//!   of its gzip member.
//! * `graph.gfa.gz.ndx`: a binary hash table mapping each node id to the chunk
//!   that owns it, queried by binary search over a memory-mapped view.
//!
//! The largest chunk id is reserved for edges whose endpoints live in
//! different chunks. [`ChunkedGraph`] loads that chunk once and applies the
//! edges to both endpoints regardless of the order in which their chunks are
//! loaded.
//!
//! ### Basic concepts
//!
//! Nodes are accessed by their GFA segment names. [`ChunkedGraph`] keeps a
//! bounded number of chunks resident at a time, loading chunks on demand and
//! evicting the oldest ones first. Queries such as [`ChunkedGraph::neighbors`]
//! and the breadth-first neighborhood search in [`query`] therefore run in
//! bounded memory even on very large graphs.
//!
//! Edges attach to a specific end of each segment. [`Side::Start`] is the 5'
//! end and [`Side::End`] is the 3' end; an adjacency entry records the
//! neighbor, the side of the neighbor the edge attaches to, and the overlap
//! length.
//!
//! See [`ChunkedGraph`] for the query interface, [`NodeHashIndex`] and
//! [`OffsetIndex`] for the index readers, and [`formats`] for the GFA line
//! grammar.

pub mod chunk;
pub mod formats;
pub mod graph;
pub mod hash_index;
pub mod query;
pub mod utils;

pub use chunk::{ChunkReader, OffsetIndex};
pub use graph::{AdjEntry, ChunkedGraph, GraphConfig, Node, Side};
pub use hash_index::NodeHashIndex;

#[cfg(test)]
mod internal;
