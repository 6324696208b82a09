// Shared test support: builders for chunked graph files and their indexes.

use crate::hash_index;
use crate::utils;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

//-----------------------------------------------------------------------------

// Writes a node index file with the given (hash64, hash32, chunk id) records.
// The records are sorted by hash64, keeping the given order within ties.
pub(crate) fn write_ndx(records: &[(u64, u32, u32)], filename: &Path) {
    let mut records: Vec<(u64, u32, u32)> = records.to_vec();
    records.sort_by_key(|record| record.0);
    let mut buffer: Vec<u8> = Vec::with_capacity(records.len() * hash_index::NodeHashIndex::RECORD_SIZE);
    for (hash, sub_hash, chunk) in records {
        buffer.extend_from_slice(&hash.to_le_bytes());
        buffer.extend_from_slice(&sub_hash.to_le_bytes());
        buffer.extend_from_slice(&chunk.to_le_bytes());
    }
    let mut file = File::create(filename).unwrap();
    file.write_all(&buffer).unwrap();
}

// Compresses the text as a single gzip member.
pub(crate) fn gzip_member(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

//-----------------------------------------------------------------------------

// Builds a chunked graph file from the given chunk contents, along with its
// offset index and node index. Chunk ids are assigned in order, so the last
// chunk is the reserved shared chunk. Returns the name of the graph file.
pub(crate) fn build_graph(name_part: &str, chunks: &[&str]) -> PathBuf {
    let mut graph_file = utils::temp_file_name(name_part);
    graph_file.set_extension("gfa.gz");

    let mut graph_bytes: Vec<u8> = Vec::new();
    let mut offsets: Vec<(u32, u64, u64)> = Vec::new();
    let mut records: Vec<(u64, u32, u32)> = Vec::new();
    for (chunk_id, chunk) in chunks.iter().enumerate() {
        let member = gzip_member(chunk);
        offsets.push((chunk_id as u32, graph_bytes.len() as u64, member.len() as u64));
        graph_bytes.extend_from_slice(&member);
        for line in chunk.lines() {
            if let Some(rest) = line.strip_prefix("S\t") {
                let id = rest.split('\t').next().unwrap();
                records.push((hash_index::hash64(id), hash_index::hash32(id), chunk_id as u32));
            }
        }
    }
    fs::write(&graph_file, &graph_bytes).unwrap();

    let mut idx_text = String::from("# chunk\toffset\tlength\n");
    for (chunk_id, offset, length) in offsets.iter() {
        idx_text.push_str(&format!("{}\t{}\t{}\n", chunk_id, offset, length));
    }
    fs::write(utils::with_suffix(&graph_file, ".idx"), idx_text).unwrap();

    write_ndx(&records, &utils::with_suffix(&graph_file, ".ndx"));
    graph_file
}

// Removes the graph file and its companion indexes.
pub(crate) fn remove_graph(graph_file: &Path) {
    let _ = fs::remove_file(utils::with_suffix(graph_file, ".idx"));
    let _ = fs::remove_file(utils::with_suffix(graph_file, ".ndx"));
    let _ = fs::remove_file(graph_file);
}

//-----------------------------------------------------------------------------

// A small example graph with three ordinary chunks and a shared chunk.
//
// Chunk 0: A -- B (intra-chunk edge).
// Chunk 1: C -- D (intra-chunk edge with a 2 bp overlap).
// Chunk 2: E (no edges).
// Chunk 3 (shared): A -- C.

pub(crate) const CHUNK_A_B: &str =
    "S\tA\tACGT\tSN:Z:ref\tLN:i:4\nS\tB\tGG\nL\tA\t+\tB\t+\t0M\n";
pub(crate) const CHUNK_C_D: &str =
    "S\tC\tTTT\nS\tD\t*\nL\tC\t-\tD\t+\t2M\n";
pub(crate) const CHUNK_E: &str = "S\tE\tAAAA\n";
pub(crate) const CHUNK_SHARED: &str = "L\tA\t+\tC\t+\t0M\n";

pub(crate) fn example_graph(name_part: &str) -> PathBuf {
    build_graph(name_part, &[CHUNK_A_B, CHUNK_C_D, CHUNK_E, CHUNK_SHARED])
}

//-----------------------------------------------------------------------------
