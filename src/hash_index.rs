//! The node hash index: an on-disk mapping from node ids to chunk ids.
//!
//! The index is a `.ndx` file next to the graph file. It is a sorted array of
//! fixed-size records, one per node, written by the offline indexer. Each
//! record stores two independent hashes of the node id and the id of the
//! chunk that owns the node:
//!
//! ```text
//! u64 hash64   FNV-1a (64-bit) of the node id, little-endian
//! u32 hash32   FNV-1a (32-bit) of the node id, little-endian
//! u32 chunk    owning chunk id, little-endian
//! ```
//!
//! Records are sorted by `hash64`. A lookup binary-searches on `hash64` and
//! then resolves accidental 64-bit collisions by comparing `hash32` within
//! the run of equal `hash64` values. The file is memory-mapped rather than
//! loaded, so the index costs almost nothing until it is queried.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

#[cfg(test)]
mod tests;

//-----------------------------------------------------------------------------

// FNV-1a constants, 64-bit and 32-bit variants.
const FNV64_OFFSET: u64 = 1469598103934665603;
const FNV64_PRIME: u64 = 1099511628211;
const FNV32_OFFSET: u32 = 2166136261;
const FNV32_PRIME: u32 = 16777619;

/// Returns the 64-bit FNV-1a hash of the string.
pub fn hash64(key: &str) -> u64 {
    let mut hash = FNV64_OFFSET;
    for byte in key.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV64_PRIME);
    }
    hash
}

/// Returns the 32-bit FNV-1a hash of the string.
pub fn hash32(key: &str) -> u32 {
    let mut hash = FNV32_OFFSET;
    for byte in key.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(FNV32_PRIME);
    }
    hash
}

//-----------------------------------------------------------------------------

/// A memory-mapped view of the node-to-chunk hash index.
///
/// The index is immutable. Lookups return the owning chunk id for node ids
/// present in the index and [`None`] for everything else.
///
/// # Examples
///
/// ```no_run
/// use gfa_chunk::NodeHashIndex;
///
/// let index = NodeHashIndex::open("graph.gfa.gz.ndx").unwrap();
/// if let Some(chunk_id) = index.lookup("s42") {
///     println!("node s42 lives in chunk {}", chunk_id);
/// }
/// ```
#[derive(Debug)]
pub struct NodeHashIndex {
    data: Mmap,
    records: usize,
}

impl NodeHashIndex {
    /// Size of an on-disk record in bytes.
    pub const RECORD_SIZE: usize = 16;

    /// Opens and memory-maps the index file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or mapped, or if its
    /// size is not a multiple of [`Self::RECORD_SIZE`].
    pub fn open<P: AsRef<Path>>(filename: P) -> Result<Self, String> {
        let file = File::open(&filename).map_err(|x| {
            format!("Failed to open node index {}: {}", filename.as_ref().display(), x)
        })?;
        let len = file.metadata().map_err(|x| x.to_string())?.len() as usize;
        if len % Self::RECORD_SIZE != 0 {
            return Err(format!(
                "Invalid node index {}: file size {} is not a multiple of {}",
                filename.as_ref().display(), len, Self::RECORD_SIZE
            ));
        }
        let data = unsafe { Mmap::map(&file) }.map_err(|x| {
            format!("Failed to map node index {}: {}", filename.as_ref().display(), x)
        })?;
        Ok(NodeHashIndex { data, records: len / Self::RECORD_SIZE })
    }

    /// Returns the number of records in the index.
    pub fn len(&self) -> usize {
        self.records
    }

    /// Returns `true` if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    // Returns record `i` as (hash64, hash32, chunk id). The bounds have been
    // checked at construction.
    fn record(&self, i: usize) -> (u64, u32, u32) {
        let offset = i * Self::RECORD_SIZE;
        let bytes = &self.data[offset..offset + Self::RECORD_SIZE];
        let hash = u64::from_le_bytes(bytes[0..8].try_into().unwrap());
        let sub_hash = u32::from_le_bytes(bytes[8..12].try_into().unwrap());
        let chunk = u32::from_le_bytes(bytes[12..16].try_into().unwrap());
        (hash, sub_hash, chunk)
    }

    /// Returns the chunk id owning the given node, or [`None`] if the node is
    /// not in the index.
    ///
    /// The lookup is deterministic: two node ids may collide on the 64-bit
    /// hash, but the 32-bit hash disambiguates them within the run of equal
    /// 64-bit hashes.
    pub fn lookup(&self, node_id: &str) -> Option<u32> {
        let query = hash64(node_id);
        let mut low = 0;
        let mut high = self.records;
        while low < high {
            let mid = low + (high - low) / 2;
            let (hash, _, _) = self.record(mid);
            if hash < query {
                low = mid + 1;
            } else if hash > query {
                high = mid;
            } else {
                return self.resolve_collision(mid, query, hash32(node_id));
            }
        }
        None
    }

    // Scans the run of records with the given hash64 and returns the chunk id
    // of the first record that also matches on hash32.
    fn resolve_collision(&self, hit: usize, query: u64, sub_query: u32) -> Option<u32> {
        let mut first = hit;
        while first > 0 && self.record(first - 1).0 == query {
            first -= 1;
        }
        let mut i = first;
        while i < self.records {
            let (hash, sub_hash, chunk) = self.record(i);
            if hash != query {
                break;
            }
            if sub_hash == sub_query {
                return Some(chunk);
            }
            i += 1;
        }
        None
    }
}

//-----------------------------------------------------------------------------
