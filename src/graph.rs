//! The graph store: bounded-memory random access to a chunked GFA graph.
//!
//! [`ChunkedGraph`] keeps an arena of resident [`Node`] objects keyed by
//! segment name. Adjacency entries store names rather than references, so
//! evicting a chunk can never leave a dangling pointer, only a name that is
//! resolved again through the node index when needed.
//!
//! Chunk residency is a FIFO queue bounded by [`GraphConfig::cache_size`].
//! Loading a chunk first evicts the oldest resident chunks until there is a
//! free slot, then parses the chunk's segment and link lines, and finally
//! applies the shared edges for the new nodes so that edges between chunks
//! are visible no matter which endpoint was loaded first.

use crate::chunk::{ChunkReader, OffsetIndex};
use crate::formats::{self, LinkLine, SegmentLine, TypedField};
use crate::hash_index::NodeHashIndex;
use crate::{query, utils};

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};


//-----------------------------------------------------------------------------

/// An end of a segment.
///
/// Edges attach to a specific end of each segment: `Start` is the 5' end and
/// `End` is the 3' end. The same type selects the traversal direction in
/// [`ChunkedGraph::children`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// The start (5') end of a segment.
    Start,
    /// The end (3') end of a segment.
    End,
}

/// One adjacency of a node.
///
/// The entry lives in the start or end adjacency set of a node and records
/// the name of the neighbor, the side of the neighbor the edge attaches to,
/// and the overlap length in bases.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AdjEntry {
    /// Name of the neighbor.
    pub neighbor: String,
    /// The side of the neighbor the edge attaches to.
    pub side: Side,
    /// Overlap length in bases.
    pub overlap: usize,
}

//-----------------------------------------------------------------------------

/// A resident node of the graph.
///
/// Nodes are created when their chunk is loaded and destroyed when it is
/// evicted. The auxiliary tags from the segment line are preserved in input
/// order for round-trip output.
#[derive(Clone, Debug)]
pub struct Node {
    id: String,
    sequence: String,
    chunk: u32,
    start: BTreeSet<AdjEntry>,
    end: BTreeSet<AdjEntry>,
    tags: Vec<TypedField>,
}

impl Node {
    fn from_segment(segment: SegmentLine, chunk: u32) -> Self {
        let sequence = if segment.sequence == "*" { String::new() } else { segment.sequence };
        Node {
            id: segment.id,
            sequence,
            chunk,
            start: BTreeSet::new(),
            end: BTreeSet::new(),
            tags: segment.tags,
        }
    }

    /// Returns the name of the node.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the sequence of the node, which may be empty.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Returns the length of the sequence.
    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns the id of the chunk that owns the node.
    pub fn chunk(&self) -> u32 {
        self.chunk
    }

    /// Returns the auxiliary tags in input order.
    pub fn tags(&self) -> &[TypedField] {
        &self.tags
    }

    /// Returns the adjacency set on the given side of the node.
    pub fn adjacency(&self, side: Side) -> &BTreeSet<AdjEntry> {
        match side {
            Side::Start => &self.start,
            Side::End => &self.end,
        }
    }

    fn adjacency_mut(&mut self, side: Side) -> &mut BTreeSet<AdjEntry> {
        match side {
            Side::Start => &mut self.start,
            Side::End => &mut self.end,
        }
    }

    /// Returns the total number of adjacency entries on both sides.
    pub fn degree(&self) -> usize {
        self.start.len() + self.end.len()
    }
}

//-----------------------------------------------------------------------------

/// Configuration for opening a [`ChunkedGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphConfig {
    /// Maximum number of resident chunks.
    pub cache_size: usize,
    /// Build the in-memory shared-edge overlay at construction.
    ///
    /// When disabled, the reserved shared chunk is rescanned on every chunk
    /// load instead. This trades memory for chunk load time.
    pub shared_edge_overlay: bool,
}

impl GraphConfig {
    /// Default number of resident chunks.
    pub const CACHE_SIZE: usize = 50;
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig { cache_size: Self::CACHE_SIZE, shared_edge_overlay: true }
    }
}

//-----------------------------------------------------------------------------

/// A chunked GFA graph with on-demand chunk loading.
///
/// The graph file must have two companion files: the offset index
/// (`<graph>.idx`) and the node index (`<graph>.ndx`). All three must exist
/// when the graph is opened, and both indexes are immutable for the lifetime
/// of the graph.
///
/// Queries load chunks on demand and evict the oldest resident chunks once
/// the cache is full. Eviction removes node data but not the relationships:
/// adjacency entries pointing at evicted nodes stay in place, and reloading
/// the evicted chunk restores the same state.
///
/// # Examples
///
/// ```no_run
/// use gfa_chunk::ChunkedGraph;
///
/// let mut graph = ChunkedGraph::open("graph.gfa.gz").unwrap();
/// let neighborhood = graph.bfs("s42", 100).unwrap();
/// let mut output = Vec::new();
/// graph.write_gfa(Some(&neighborhood), &mut output).unwrap();
/// ```
#[derive(Debug)]
pub struct ChunkedGraph {
    filename: PathBuf,
    nodes: HashMap<String, Node>,
    offsets: OffsetIndex,
    node_index: NodeHashIndex,
    reader: ChunkReader,
    shared_edges: HashMap<String, Vec<LinkLine>>,
    shared_chunk: u32,
    loaded_chunks: VecDeque<u32>,
    config: GraphConfig,
}

/// Opening the graph.
impl ChunkedGraph {
    /// Suffix of the offset index file.
    pub const OFFSET_INDEX_SUFFIX: &'static str = ".idx";

    /// Suffix of the node index file.
    pub const NODE_INDEX_SUFFIX: &'static str = ".ndx";

    /// Opens the graph with the default configuration.
    ///
    /// See [`ChunkedGraph::open_with_config`].
    pub fn open<P: AsRef<Path>>(filename: P) -> Result<Self, String> {
        Self::open_with_config(filename, GraphConfig::default())
    }

    /// Opens the graph file and its companion indexes.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph file does not exist or is not
    /// gzip-compressed, if either companion index is missing or invalid, if
    /// the offset index is empty, or if the configured cache cannot hold a
    /// single chunk. No partially valid graph is ever returned.
    pub fn open_with_config<P: AsRef<Path>>(filename: P, config: GraphConfig) -> Result<Self, String> {
        if config.cache_size == 0 {
            return Err(String::from("The chunk cache must hold at least one chunk"));
        }
        let filename = filename.as_ref().to_path_buf();
        if !utils::file_exists(&filename) {
            return Err(format!("Graph file {} does not exist", filename.display()));
        }
        if !utils::is_gzipped(&filename) {
            return Err(format!("Graph file {} is not gzip-compressed", filename.display()));
        }
        let idx_file = utils::with_suffix(&filename, Self::OFFSET_INDEX_SUFFIX);
        if !utils::file_exists(&idx_file) {
            return Err(format!(
                "Could not find the offset index {} (is this a chunked graph?)", idx_file.display()
            ));
        }
        let ndx_file = utils::with_suffix(&filename, Self::NODE_INDEX_SUFFIX);
        if !utils::file_exists(&ndx_file) {
            return Err(format!(
                "Could not find the node index {} (is this a chunked graph?)", ndx_file.display()
            ));
        }

        let offsets = OffsetIndex::load(&idx_file)?;
        let node_index = NodeHashIndex::open(&ndx_file)?;
        let reader = ChunkReader::new(&filename)?;
        let shared_chunk = offsets.shared_chunk().ok_or(
            format!("Offset index {} is empty", idx_file.display())
        )?;

        let mut result = ChunkedGraph {
            filename,
            nodes: HashMap::new(),
            offsets,
            node_index,
            reader,
            shared_edges: HashMap::new(),
            shared_chunk,
            loaded_chunks: VecDeque::new(),
            config,
        };
        if result.config.shared_edge_overlay {
            result.load_shared_edges()?;
        }
        Ok(result)
    }

    // Builds the shared-edge overlay from the reserved shared chunk. The
    // overlay stores each cross-chunk edge under both endpoints and lives
    // for the lifetime of the graph.
    fn load_shared_edges(&mut self) -> Result<(), String> {
        let (offset, length) = self.offsets.get(self.shared_chunk).ok_or(
            format!("Chunk {} is not in the offset index", self.shared_chunk)
        )?;
        for line in self.reader.member_lines(offset, length)? {
            let line = line?;
            if !line.starts_with("L\t") {
                continue;
            }
            let link = LinkLine::parse(&line)?;
            self.shared_edges.entry(link.from.clone()).or_default().push(link.clone());
            self.shared_edges.entry(link.to.clone()).or_default().push(link);
        }
        Ok(())
    }
}

//-----------------------------------------------------------------------------

/// Statistics.
impl ChunkedGraph {
    /// Returns the name of the graph file.
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Returns the number of resident nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if there are no resident nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the total sequence length of the resident nodes.
    pub fn total_sequence_length(&self) -> usize {
        self.nodes.values().map(|node| node.sequence_len()).sum()
    }

    /// Returns the number of chunks in the graph, including the shared chunk.
    pub fn chunks(&self) -> usize {
        self.offsets.len()
    }

    /// Returns the id of the reserved shared chunk.
    pub fn shared_chunk(&self) -> u32 {
        self.shared_chunk
    }

    /// Returns the currently resident chunk ids in load order.
    pub fn loaded_chunks(&self) -> &VecDeque<u32> {
        &self.loaded_chunks
    }

    /// Returns the maximum number of resident chunks.
    pub fn cache_size(&self) -> usize {
        self.config.cache_size
    }

    /// Returns `true` if the node is currently resident.
    pub fn is_resident(&self, node_id: &str) -> bool {
        self.nodes.contains_key(node_id)
    }
}

//-----------------------------------------------------------------------------

/// Queries.
impl ChunkedGraph {
    /// Returns the id of the chunk that owns the node, without loading it.
    ///
    /// Returns [`None`] if the node is not in the node index.
    pub fn chunk_of(&self, node_id: &str) -> Option<u32> {
        self.node_index.lookup(node_id)
    }

    /// Returns the node, loading its chunk on demand.
    ///
    /// Returns `Ok(None)` if the node is not in the node index. Returns an
    /// error if the chunk cannot be loaded.
    pub fn get(&mut self, node_id: &str) -> Result<Option<&Node>, String> {
        if !self.nodes.contains_key(node_id) {
            match self.node_index.lookup(node_id) {
                Some(chunk_id) => self.load_chunk(chunk_id)?,
                None => return Ok(None),
            }
        }
        Ok(self.nodes.get(node_id))
    }

    /// Returns the names of all nodes adjacent to the given node, loading
    /// its chunk on demand.
    ///
    /// The result is the union of the start and end adjacency sets in sorted
    /// order. Unlike [`ChunkedGraph::get`], a node missing from the node
    /// index is an error here: the index is assumed to be complete relative
    /// to the graph.
    pub fn neighbors(&mut self, node_id: &str) -> Result<Vec<String>, String> {
        let node = self.get(node_id)?.ok_or(
            format!("Node {} does not exist in the node index", node_id)
        )?;
        let mut result: BTreeSet<&str> = BTreeSet::new();
        for entry in node.start.iter().chain(node.end.iter()) {
            result.insert(&entry.neighbor);
        }
        Ok(result.into_iter().map(String::from).collect())
    }

    /// Returns the adjacency on one side of the node as (neighbor, side of
    /// the neighbor) pairs, loading chunks on demand.
    ///
    /// Every neighbor is made resident before returning, so the caller can
    /// follow the edges without further loads.
    pub fn children(&mut self, node_id: &str, side: Side) -> Result<Vec<(String, Side)>, String> {
        let node = self.get(node_id)?.ok_or(
            format!("Node {} does not exist in the node index", node_id)
        )?;
        let entries: Vec<AdjEntry> = node.adjacency(side).iter().cloned().collect();
        for entry in entries.iter() {
            if !self.nodes.contains_key(&entry.neighbor) {
                let chunk_id = self.node_index.lookup(&entry.neighbor).ok_or(
                    format!("Node {} does not exist in the node index", entry.neighbor)
                )?;
                self.load_chunk(chunk_id)?;
            }
        }
        Ok(entries.into_iter().map(|entry| (entry.neighbor, entry.side)).collect())
    }

    /// Returns the neighborhood of the given size around the start node.
    ///
    /// Loads the start node's chunk if it is not resident. See
    /// [`query::bfs`] for the traversal itself.
    pub fn bfs(&mut self, start: &str, target_size: usize) -> Result<BTreeSet<String>, String> {
        if !self.nodes.contains_key(start) {
            let chunk_id = self.node_index.lookup(start).ok_or(
                format!("Node {} does not exist in the node index", start)
            )?;
            eprintln!("Warning: node {} is not resident, loading chunk {}", start, chunk_id);
            self.load_chunk(chunk_id)?;
        }
        query::bfs(self, start, target_size)
    }
}

//-----------------------------------------------------------------------------

/// Chunk loading and eviction.
impl ChunkedGraph {
    /// Loads the given chunk, evicting the oldest resident chunks first if
    /// the cache is full.
    ///
    /// Creates a node for every segment line and applies every link line to
    /// both endpoints that are resident. A link whose remote endpoint is not
    /// resident is supplied later, either by the shared edges or when the
    /// remote chunk is loaded and re-derives its own links. Loading an
    /// already resident chunk leaves the graph unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the chunk is not in the offset index or if its
    /// member cannot be decompressed and parsed. The member is parsed in full
    /// before any node becomes resident, so a failed load leaves the graph
    /// unchanged.
    pub fn load_chunk(&mut self, chunk_id: u32) -> Result<(), String> {
        let (offset, length) = self.offsets.get(chunk_id).ok_or(
            format!("Chunk {} is not in the offset index", chunk_id)
        )?;
        while self.loaded_chunks.len() >= self.config.cache_size {
            match self.loaded_chunks.front().copied() {
                Some(oldest) => self.evict_chunk(oldest),
                None => break,
            }
        }

        let mut segments: Vec<SegmentLine> = Vec::new();
        let mut edges: Vec<LinkLine> = Vec::new();
        for line in self.reader.member_lines(offset, length)? {
            let line = line?;
            if line.starts_with("S\t") {
                segments.push(SegmentLine::parse(&line)?);
            } else if line.starts_with("L\t") {
                edges.push(LinkLine::parse(&line)?);
            }
        }

        let mut loaded: Vec<String> = Vec::with_capacity(segments.len());
        for segment in segments {
            loaded.push(segment.id.clone());
            self.nodes.insert(segment.id.clone(), Node::from_segment(segment, chunk_id));
        }
        for edge in edges.iter() {
            self.add_edge(edge);
        }
        self.apply_shared_edges(&loaded)?;

        if !self.loaded_chunks.contains(&chunk_id) {
            self.loaded_chunks.push_back(chunk_id);
        }
        Ok(())
    }

    /// Evicts the given chunk, removing every node it owns.
    ///
    /// Adjacency entries pointing at the evicted nodes are left in place, so
    /// reloading the chunk later reconstructs the same relationships.
    pub fn evict_chunk(&mut self, chunk_id: u32) {
        self.nodes.retain(|_, node| node.chunk != chunk_id);
        self.loaded_chunks.retain(|&id| id != chunk_id);
    }

    // Applies the cross-chunk edges for the given newly loaded nodes, either
    // from the overlay or by rescanning the shared chunk.
    fn apply_shared_edges(&mut self, loaded: &[String]) -> Result<(), String> {
        let mut edges: Vec<LinkLine> = Vec::new();
        if self.config.shared_edge_overlay {
            for node_id in loaded.iter() {
                if let Some(list) = self.shared_edges.get(node_id) {
                    edges.extend(list.iter().cloned());
                }
            }
        } else {
            let (offset, length) = self.offsets.get(self.shared_chunk).ok_or(
                format!("Chunk {} is not in the offset index", self.shared_chunk)
            )?;
            let loaded: HashSet<&str> = loaded.iter().map(String::as_str).collect();
            for line in self.reader.member_lines(offset, length)? {
                let line = line?;
                if !line.starts_with("L\t") {
                    continue;
                }
                let link = LinkLine::parse(&line)?;
                if loaded.contains(link.from.as_str()) || loaded.contains(link.to.as_str()) {
                    edges.push(link);
                }
            }
        }
        for edge in edges.iter() {
            self.add_edge(edge);
        }
        Ok(())
    }

    // Applies an edge to both endpoints that are currently resident. The
    // attachment sides follow the GFA orientation flags; the effect on the
    // first endpoint always mirrors the effect on the second.
    fn add_edge(&mut self, edge: &LinkLine) {
        let overlap = edge.overlap;
        match (edge.from_start, edge.to_end) {
            (true, true) => {
                self.add_adjacency(&edge.from, Side::Start, &edge.to, Side::End, overlap);
                self.add_adjacency(&edge.to, Side::End, &edge.from, Side::Start, overlap);
            },
            (true, false) => {
                self.add_adjacency(&edge.from, Side::Start, &edge.to, Side::Start, overlap);
                self.add_adjacency(&edge.to, Side::Start, &edge.from, Side::Start, overlap);
            },
            (false, false) => {
                self.add_adjacency(&edge.from, Side::End, &edge.to, Side::Start, overlap);
                self.add_adjacency(&edge.to, Side::Start, &edge.from, Side::End, overlap);
            },
            (false, true) => {
                self.add_adjacency(&edge.from, Side::End, &edge.to, Side::End, overlap);
                self.add_adjacency(&edge.to, Side::End, &edge.from, Side::End, overlap);
            },
        }
    }

    fn add_adjacency(&mut self, node_id: &str, side: Side, neighbor: &str, neighbor_side: Side, overlap: usize) {
        if let Some(node) = self.nodes.get_mut(node_id) {
            node.adjacency_mut(side).insert(AdjEntry {
                neighbor: neighbor.to_string(),
                side: neighbor_side,
                overlap,
            });
        }
    }
}

//-----------------------------------------------------------------------------

/// Editing.
impl ChunkedGraph {
    /// Removes a resident node and all edges to it.
    ///
    /// Unlike eviction, this is a hard delete: the mirrored adjacency entry
    /// is stripped from every resident neighbor before the node itself is
    /// dropped. Returns an error if the node is not resident.
    pub fn remove_node(&mut self, node_id: &str) -> Result<(), String> {
        let node = self.nodes.remove(node_id).ok_or(
            format!("Node {} is not resident", node_id)
        )?;
        for entry in node.start.iter() {
            self.remove_adjacency(&entry.neighbor, entry.side, node_id, Side::Start, entry.overlap);
        }
        for entry in node.end.iter() {
            self.remove_adjacency(&entry.neighbor, entry.side, node_id, Side::End, entry.overlap);
        }
        Ok(())
    }

    fn remove_adjacency(&mut self, node_id: &str, side: Side, neighbor: &str, neighbor_side: Side, overlap: usize) {
        if let Some(node) = self.nodes.get_mut(node_id) {
            node.adjacency_mut(side).remove(&AdjEntry {
                neighbor: neighbor.to_string(),
                side: neighbor_side,
                overlap,
            });
        }
    }
}

//-----------------------------------------------------------------------------

/// GFA output.
impl ChunkedGraph {
    /// Writes the subset of resident nodes as GFA.
    ///
    /// With no subset, all resident nodes are written. A subset member that
    /// is not resident is skipped with a warning, along with its edges. A
    /// link is written only when both endpoints are written, and each
    /// realized edge appears exactly once. The output is deterministic: the
    /// subset is ordered, and so are the adjacency sets of every node.
    pub fn write_gfa<T: Write>(&self, subset: Option<&BTreeSet<String>>, output: &mut T) -> io::Result<()> {
        let all_nodes: BTreeSet<String>;
        let subset = match subset {
            Some(subset) => subset,
            None => {
                all_nodes = self.nodes.keys().cloned().collect();
                &all_nodes
            },
        };

        let mut written: HashSet<(String, Side, String, Side, usize)> = HashSet::new();
        for node_id in subset.iter() {
            let node = match self.nodes.get(node_id) {
                Some(node) => node,
                None => {
                    eprintln!("Warning: node {} is not resident, skipping it in the output", node_id);
                    continue;
                },
            };
            formats::write_gfa_segment(node, output)?;
            for side in [Side::Start, Side::End] {
                for entry in node.adjacency(side).iter() {
                    if !subset.contains(&entry.neighbor) || !self.nodes.contains_key(&entry.neighbor) {
                        continue;
                    }
                    if written.insert(edge_key(node_id, side, &entry.neighbor, entry.side, entry.overlap)) {
                        formats::write_gfa_link(node_id, side, entry, output)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Writes the subset of resident nodes as GFA to the given file.
    ///
    /// The file name `-` writes to the standard output. With `append`, the
    /// output is appended to an existing file; if the file does not exist, a
    /// warning is printed and the file is created instead.
    pub fn write_gfa_to_file(&self, subset: Option<&BTreeSet<String>>, filename: &str, append: bool) -> Result<(), String> {
        if filename == "-" {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            return self.write_gfa(subset, &mut handle).map_err(|x| x.to_string());
        }

        let mut options = OpenOptions::new();
        if append && !utils::file_exists(filename) {
            eprintln!("Warning: cannot append to nonexistent file {}, creating it", filename);
            options.write(true).create(true);
        } else if append {
            options.append(true);
        } else {
            options.write(true).create(true).truncate(true);
        }
        let mut file = options.open(filename).map_err(|x| x.to_string())?;
        self.write_gfa(subset, &mut file).map_err(|x| x.to_string())
    }
}

// Returns a key identifying the edge independently of which endpoint it was
// realized from.
fn edge_key(a: &str, a_side: Side, b: &str, b_side: Side, overlap: usize) -> (String, Side, String, Side, usize) {
    if (a, a_side) <= (b, b_side) {
        (a.to_string(), a_side, b.to_string(), b_side, overlap)
    } else {
        (b.to_string(), b_side, a.to_string(), a_side, overlap)
    }
}

//-----------------------------------------------------------------------------

/// Path expressions.
impl ChunkedGraph {
    /// Returns `true` if the oriented path exists in the graph.
    ///
    /// The expression is a sequence of `>`/`<`-prefixed node names, such as
    /// `>s1<s2>s3`, where `>` traverses the node forward and `<` in reverse.
    /// A malformed expression or a path through unknown nodes prints a
    /// warning and returns `false` rather than failing.
    pub fn path_exists(&mut self, expression: &str) -> Result<bool, String> {
        let steps = match parse_path_expression(expression) {
            Some(steps) => steps,
            None => {
                eprintln!("Warning: invalid path expression {}", expression);
                return Ok(false);
            },
        };

        for window in steps.windows(2) {
            let (prev_forward, prev_id) = &window[0];
            let (curr_forward, curr_id) = &window[1];
            let (side, neighbor_side) = match (prev_forward, curr_forward) {
                (true, true) => (Side::End, Side::Start),
                (false, false) => (Side::Start, Side::End),
                (true, false) => (Side::End, Side::End),
                (false, true) => (Side::Start, Side::Start),
            };
            let node = match self.get(prev_id)? {
                Some(node) => node,
                None => {
                    eprintln!("Warning: node {} on the path does not exist in the graph", prev_id);
                    return Ok(false);
                },
            };
            let found = node.adjacency(side).iter().any(|entry| {
                entry.neighbor == *curr_id && entry.side == neighbor_side
            });
            if !found {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns the concatenated sequence along the oriented path.
    ///
    /// Nodes traversed with `<` contribute their reverse complement. An
    /// invalid expression or a nonexistent path prints a warning and returns
    /// an empty string rather than failing.
    pub fn extract_path_seq(&mut self, expression: &str) -> Result<String, String> {
        let steps = match parse_path_expression(expression) {
            Some(steps) => steps,
            None => {
                eprintln!("Warning: invalid path expression {}", expression);
                return Ok(String::new());
            },
        };
        if !self.path_exists(expression)? {
            eprintln!("Warning: the path {} does not exist in the graph", expression);
            return Ok(String::new());
        }

        let mut result = String::new();
        for (forward, id) in steps.iter() {
            let node = match self.get(id)? {
                Some(node) => node,
                None => {
                    eprintln!("Warning: node {} on the path does not exist in the graph", id);
                    return Ok(String::new());
                },
            };
            if *forward {
                result.push_str(node.sequence());
            } else {
                result.push_str(&utils::reverse_complement(node.sequence()));
            }
        }
        Ok(result)
    }
}

// Parses an oriented path expression into (forward, node id) steps. Returns
// [`None`] if the expression does not start with an orientation or contains
// an empty node name.
fn parse_path_expression(expression: &str) -> Option<Vec<(bool, String)>> {
    let mut chars = expression.chars();
    let mut orientation = match chars.next() {
        Some('>') => true,
        Some('<') => false,
        _ => return None,
    };

    let mut steps: Vec<(bool, String)> = Vec::new();
    let mut id = String::new();
    for c in chars {
        if c == '>' || c == '<' {
            if id.is_empty() {
                return None;
            }
            steps.push((orientation, id.clone()));
            id.clear();
            orientation = c == '>';
        } else {
            id.push(c);
        }
    }
    if id.is_empty() {
        return None;
    }
    steps.push((orientation, id));
    Some(steps)
}

//-----------------------------------------------------------------------------
