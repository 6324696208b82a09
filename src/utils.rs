//! Utility functions and structures.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};

//-----------------------------------------------------------------------------

static TEMP_FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Returns a name for a temporary file that is unique within the process.
pub fn temp_file_name(name_part: &str) -> PathBuf {
    let count = TEMP_FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    let mut buf = std::env::temp_dir();
    buf.push(format!("{}_{}_{}", name_part, process::id(), count));
    buf
}

//-----------------------------------------------------------------------------

// Utilities for working with files.

const SIZE_UNITS: [(f64, &str); 6] = [
    (1.0, "B"),
    (1024.0, "KiB"),
    (1024.0 * 1024.0, "MiB"),
    (1024.0 * 1024.0 * 1024.0, "GiB"),
    (1024.0 * 1024.0 * 1024.0 * 1024.0, "TiB"),
    (1024.0 * 1024.0 * 1024.0 * 1024.0 * 1024.0, "PiB"),
];

/// Returns a human-readable representation of the given number of bytes.
pub fn human_readable_size(bytes: usize) -> String {
    let mut unit = 0;
    let value = bytes as f64;
    while unit + 1 < SIZE_UNITS.len() && value >= SIZE_UNITS[unit + 1].0 {
        unit += 1;
    }
    format!("{:.3} {}", value / SIZE_UNITS[unit].0, SIZE_UNITS[unit].1)
}

/// Returns a human-readable size of the file.
pub fn file_size<P: AsRef<Path>>(filename: P) -> Option<String> {
    let metadata = fs::metadata(filename).ok()?;
    Some(human_readable_size(metadata.len() as usize))
}

/// Returns `true` if the file exists.
pub fn file_exists<P: AsRef<Path>>(filename: P) -> bool {
    fs::metadata(filename).is_ok()
}

/// Returns the file name with the given suffix appended.
///
/// This is used for deriving the names of companion files, such as the
/// offset index `graph.gfa.gz.idx` for graph `graph.gfa.gz`.
pub fn with_suffix<P: AsRef<Path>>(filename: P, suffix: &str) -> PathBuf {
    let mut name = filename.as_ref().as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Returns `true` if the file appears to be gzip-compressed.
pub fn is_gzipped<P: AsRef<Path>>(filename: P) -> bool {
    let file = File::open(filename).ok();
    if file.is_none() {
        return false;
    }
    let mut reader = BufReader::new(file.unwrap());
    let mut magic = [0; 2];
    let len = reader.read(&mut magic).ok();
    len == Some(2) && magic == [0x1F, 0x8B]
}

//-----------------------------------------------------------------------------

// Sequence utilities.

const fn generate_complement() -> [u8; 256] {
    let mut result = [b'N'; 256];
    result[b'a' as usize] = b'T'; result[b'A' as usize] = b'T';
    result[b'c' as usize] = b'G'; result[b'C' as usize] = b'G';
    result[b'g' as usize] = b'C'; result[b'G' as usize] = b'C';
    result[b't' as usize] = b'A'; result[b'T' as usize] = b'A';
    result
}

const COMPLEMENT: [u8; 256] = generate_complement();

/// Returns the reverse complement of the sequence.
///
/// Values outside `acgtACGT` become `N`.
pub fn reverse_complement(sequence: &str) -> String {
    let complement: Vec<u8> = sequence.bytes().rev().map(|c| COMPLEMENT[c as usize]).collect();
    String::from_utf8_lossy(&complement).into_owned()
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_formatting() {
        assert_eq!(human_readable_size(0), "0.000 B");
        assert_eq!(human_readable_size(1024), "1.000 KiB");
        assert_eq!(human_readable_size(1536), "1.500 KiB");
        assert_eq!(human_readable_size(1024 * 1024), "1.000 MiB");
    }

    #[test]
    fn temp_file_names() {
        let first = temp_file_name("utils");
        let second = temp_file_name("utils");
        assert_ne!(first, second, "Temporary file names are not unique");
    }

    #[test]
    fn rev_comp() {
        assert_eq!(reverse_complement(""), "");
        assert_eq!(reverse_complement("ACGT"), "ACGT");
        assert_eq!(reverse_complement("GATTACA"), "TGTAATC");
        assert_eq!(reverse_complement("acgt"), "ACGT");
        assert_eq!(reverse_complement("AXA"), "TNT");
    }
}

//-----------------------------------------------------------------------------
