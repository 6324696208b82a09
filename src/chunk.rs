//! Reading chunks from the graph file.
//!
//! The graph file is a concatenation of independent gzip members, one per
//! chunk. The [`OffsetIndex`] (the `.idx` companion file) maps each chunk id
//! to the byte range of its member, and [`ChunkReader`] streams one member
//! through a decompressor and splits it into lines. Nothing outside the
//! requested byte range is ever read.

use crate::utils;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read, Seek, SeekFrom, Take};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;


//-----------------------------------------------------------------------------

/// The offset index: a mapping from chunk ids to byte ranges in the graph file.
///
/// The index is loaded fully into memory. The source file is tab-separated
/// text with one `chunk_id<TAB>offset<TAB>length` line per chunk; lines
/// starting with `#` are comments.
///
/// The numerically largest chunk id is reserved for the shared chunk, which
/// stores the edges between nodes in different chunks.
#[derive(Clone, Debug)]
pub struct OffsetIndex {
    offsets: BTreeMap<u32, (u64, u64)>,
}

impl OffsetIndex {
    /// Loads the offset index from the given file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, if a non-comment line
    /// does not have three tab-separated fields, or if a chunk id occurs
    /// more than once.
    pub fn load<P: AsRef<Path>>(filename: P) -> Result<Self, String> {
        let file = File::open(&filename).map_err(|x| {
            format!("Failed to open offset index {}: {}", filename.as_ref().display(), x)
        })?;
        let reader = BufReader::new(file);

        let mut offsets: BTreeMap<u32, (u64, u64)> = BTreeMap::new();
        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|x| x.to_string())?;
            if line.starts_with('#') || line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 3 {
                return Err(format!(
                    "Invalid offset index line {}: {}", line_num + 1, line
                ));
            }
            let chunk_id = fields[0].parse::<u32>().map_err(|x| {
                format!("Invalid chunk id on offset index line {}: {}", line_num + 1, x)
            })?;
            let offset = fields[1].parse::<u64>().map_err(|x| {
                format!("Invalid offset on offset index line {}: {}", line_num + 1, x)
            })?;
            let length = fields[2].parse::<u64>().map_err(|x| {
                format!("Invalid length on offset index line {}: {}", line_num + 1, x)
            })?;
            if offsets.insert(chunk_id, (offset, length)).is_some() {
                return Err(format!("Duplicate chunk id {} in the offset index", chunk_id));
            }
        }

        Ok(OffsetIndex { offsets })
    }

    /// Returns the byte range `(offset, length)` for the given chunk.
    pub fn get(&self, chunk_id: u32) -> Option<(u64, u64)> {
        self.offsets.get(&chunk_id).copied()
    }

    /// Returns `true` if the index contains the given chunk.
    pub fn contains(&self, chunk_id: u32) -> bool {
        self.offsets.contains_key(&chunk_id)
    }

    /// Returns the id of the reserved shared chunk, which is the largest
    /// chunk id in the index.
    pub fn shared_chunk(&self) -> Option<u32> {
        self.offsets.keys().next_back().copied()
    }

    /// Returns the number of chunks in the index.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Returns an iterator over the chunk ids in the index.
    pub fn chunk_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.offsets.keys().copied()
    }
}

//-----------------------------------------------------------------------------

/// A reader for the gzip members of a chunked graph file.
///
/// Each call to [`ChunkReader::member_lines`] opens an independent handle to
/// the file, so the members of a chunk can be read again at any time and in
/// any order.
#[derive(Clone, Debug)]
pub struct ChunkReader {
    filename: PathBuf,
}

impl ChunkReader {
    /// Creates a reader for the given graph file.
    ///
    /// Returns an error if the file does not exist.
    pub fn new<P: AsRef<Path>>(filename: P) -> Result<Self, String> {
        if !utils::file_exists(&filename) {
            return Err(format!("Graph file {} does not exist", filename.as_ref().display()));
        }
        Ok(ChunkReader { filename: filename.as_ref().to_path_buf() })
    }

    /// Returns the name of the graph file.
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Returns an iterator over the decompressed lines of a single member.
    ///
    /// The member starts at byte `offset` and is `length` compressed bytes
    /// long; bytes outside this range are never read. Decompression is
    /// streaming, so even a very large member is not materialized as one
    /// buffer. A truncated or corrupt member surfaces as an error from the
    /// iterator.
    pub fn member_lines(&self, offset: u64, length: u64) -> Result<MemberLines, String> {
        let mut file = File::open(&self.filename).map_err(|x| {
            format!("Failed to open graph file {}: {}", self.filename.display(), x)
        })?;
        file.seek(SeekFrom::Start(offset)).map_err(|x| {
            format!("Failed to seek to offset {} in {}: {}", offset, self.filename.display(), x)
        })?;
        let decoder = GzDecoder::new(file.take(length));
        Ok(MemberLines { lines: BufReader::new(decoder).lines() })
    }
}

/// A streaming iterator over the decompressed lines of one gzip member.
///
/// Returned by [`ChunkReader::member_lines`].
#[derive(Debug)]
pub struct MemberLines {
    lines: Lines<BufReader<GzDecoder<Take<File>>>>,
}

impl Iterator for MemberLines {
    type Item = Result<String, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(line.map_err(|x| format!("Failed to decompress a chunk member: {}", x)))
    }
}

//-----------------------------------------------------------------------------
