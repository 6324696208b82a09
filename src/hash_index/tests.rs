use super::*;

use crate::internal;
use crate::utils;

use std::fs;

//-----------------------------------------------------------------------------

fn open_index(filename: &std::path::Path) -> NodeHashIndex {
    let index = NodeHashIndex::open(filename);
    assert!(index.is_ok(), "Failed to open node index: {}", index.unwrap_err());
    index.unwrap()
}

//-----------------------------------------------------------------------------

#[test]
fn known_hashes() {
    // The 64-bit variant starts from offset basis 1469598103934665603, which
    // is what the offline indexer writes. The 32-bit variant uses the
    // standard FNV-1a basis, so its test vectors are the standard ones.
    assert_eq!(hash64(""), 1469598103934665603);
    assert_eq!(hash32(""), 0x811C9DC5);
    assert_eq!(hash64("a"), 0x44BD8AD473CD9906);
    assert_eq!(hash32("a"), 0xE40C292C);
    assert_eq!(hash64("foobar"), 0x88FAD7C0A8FF07F2);
    assert_eq!(hash32("foobar"), 0xBF9CF968);
}

#[test]
fn empty_index() {
    let filename = utils::temp_file_name("empty-ndx");
    internal::write_ndx(&[], &filename);
    let index = open_index(&filename);
    assert_eq!(index.len(), 0, "Wrong record count for an empty index");
    assert!(index.is_empty(), "An empty index claims to contain records");
    assert!(index.lookup("anything").is_none(), "Lookup succeeded in an empty index");
    drop(index);
    fs::remove_file(&filename).unwrap();
}

#[test]
fn invalid_file_size() {
    let filename = utils::temp_file_name("bad-ndx");
    fs::write(&filename, [0u8; 10]).unwrap();
    let result = NodeHashIndex::open(&filename);
    assert!(result.is_err(), "Opened an index whose size is not a multiple of the record size");
    fs::remove_file(&filename).unwrap();
}

#[test]
fn missing_file() {
    let filename = utils::temp_file_name("missing-ndx");
    let result = NodeHashIndex::open(&filename);
    assert!(result.is_err(), "Opened a nonexistent index file");
}

//-----------------------------------------------------------------------------

#[test]
fn lookup_is_deterministic() {
    let ids: Vec<String> = (0..100).map(|i| format!("node{}", i)).collect();
    let records: Vec<(u64, u32, u32)> = ids.iter().enumerate().map(|(i, id)| {
        (hash64(id), hash32(id), (i % 7) as u32)
    }).collect();
    let filename = utils::temp_file_name("full-ndx");
    internal::write_ndx(&records, &filename);

    let index = open_index(&filename);
    assert_eq!(index.len(), ids.len(), "Wrong record count");
    for (i, id) in ids.iter().enumerate() {
        let expected = (i % 7) as u32;
        for _ in 0..2 {
            let chunk = index.lookup(id);
            assert_eq!(chunk, Some(expected), "Wrong chunk for node {}", id);
        }
    }

    drop(index);
    fs::remove_file(&filename).unwrap();
}

#[test]
fn absent_ids() {
    let records: Vec<(u64, u32, u32)> = (0..10).map(|i| {
        let id = format!("present{}", i);
        (hash64(&id), hash32(&id), i)
    }).collect();
    let filename = utils::temp_file_name("absent-ndx");
    internal::write_ndx(&records, &filename);

    let index = open_index(&filename);
    for i in 0..10 {
        let id = format!("absent{}", i);
        assert!(index.lookup(&id).is_none(), "Found a chunk for absent node {}", id);
    }

    drop(index);
    fs::remove_file(&filename).unwrap();
}

//-----------------------------------------------------------------------------

// Records that collide on the 64-bit hash must be disambiguated by the 32-bit
// hash, regardless of their position within the run of equal 64-bit hashes.
#[test]
fn collision_run_resolution() {
    let query = "collider";
    let hash = hash64(query);
    let sub_hash = hash32(query);
    let records = vec![
        (hash.wrapping_sub(1), 0, 100),
        (hash, sub_hash ^ 1, 101),
        (hash, sub_hash, 7),
        (hash, sub_hash ^ 2, 102),
        (hash.wrapping_add(1), 0, 103),
    ];
    let filename = utils::temp_file_name("collision-ndx");
    internal::write_ndx(&records, &filename);

    let index = open_index(&filename);
    assert_eq!(index.lookup(query), Some(7), "Wrong chunk within a collision run");

    drop(index);
    fs::remove_file(&filename).unwrap();
}

#[test]
fn collision_run_without_match() {
    let query = "collider";
    let hash = hash64(query);
    let sub_hash = hash32(query);
    let records = vec![
        (hash, sub_hash ^ 1, 101),
        (hash, sub_hash ^ 2, 102),
    ];
    let filename = utils::temp_file_name("collision-miss-ndx");
    internal::write_ndx(&records, &filename);

    let index = open_index(&filename);
    assert!(
        index.lookup(query).is_none(),
        "Resolved a node to a colliding record with a different sub-hash"
    );

    drop(index);
    fs::remove_file(&filename).unwrap();
}

//-----------------------------------------------------------------------------
