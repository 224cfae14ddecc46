/*!
 * Export Tests
 * Hole summary, bitmap and memory map dumps from a live arena
 */

use hole_mem::memory::{
    BestFit, HoleSummary, MemoryError, MemoryManager, OccupancyBitmap, PlacementStrategy,
    WorstFit,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::sync::Arc;

fn fragmented() -> MemoryManager {
    let mut mgr = MemoryManager::new(1, Arc::new(BestFit)).with_base_address(0);
    mgr.initialize(26).unwrap();
    let a = mgr.allocate(10).unwrap();
    mgr.allocate(2).unwrap();
    let c = mgr.allocate(2).unwrap();
    mgr.allocate(6).unwrap();
    mgr.free(a);
    mgr.free(c);
    mgr
}

#[test]
fn test_memory_map_text() {
    let mgr = fragmented();
    assert_eq!(mgr.memory_map(), "[0, 10] - [12, 2] - [20, 6]");
}

#[test]
fn test_dump_memory_map() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.txt");

    fragmented().dump_memory_map(&path).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[0, 10] - [12, 2] - [20, 6]"
    );
}

#[test]
fn test_dump_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.txt");
    fs::write(&path, "stale content that is much longer than the map").unwrap();

    let mut mgr = MemoryManager::new(4, Arc::new(BestFit));
    mgr.initialize(8).unwrap();
    mgr.dump_memory_map(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[0, 8]");
}

#[test]
fn test_dump_with_no_holes_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("full.txt");

    let mut mgr = MemoryManager::new(2, Arc::new(BestFit));
    mgr.initialize(4).unwrap();
    mgr.allocate(8).unwrap();
    mgr.dump_memory_map(&path).unwrap();

    assert_eq!(fs::read(&path).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_dump_reports_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("map.txt");

    let result = fragmented().dump_memory_map(&path);
    assert!(matches!(result, Err(MemoryError::ExportIo { .. })));
}

#[cfg(unix)]
#[test]
fn test_dump_creates_file_with_map_mode() {
    use hole_mem::core::limits::MAP_FILE_MODE;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.txt");
    fragmented().dump_memory_map(&path).unwrap();

    // Same mode through the same umask gives the expected bits
    let reference = dir.path().join("reference");
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(MAP_FILE_MODE)
        .open(&reference)
        .unwrap();
    let expected = fs::metadata(&reference).unwrap().permissions().mode() & 0o777;

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(MAP_FILE_MODE, 0o666);
    assert_eq!(mode, expected);
    assert_eq!(mode & 0o600, 0o600);
    assert_eq!(mode & 0o111, 0);
}

#[test]
fn test_encoded_hole_list() {
    let mgr = fragmented();
    let bytes = mgr.encoded_hole_list().unwrap();
    assert_eq!(
        bytes.as_ref(),
        &[3, 0, 0, 0, 10, 0, 12, 0, 2, 0, 20, 0, 6, 0]
    );
    assert_eq!(HoleSummary::decode(&bytes).unwrap(), mgr.hole_summary());
}

#[test]
fn test_strategies_accept_encoded_summary() {
    let mgr = fragmented();
    let bytes = mgr.encoded_hole_list().unwrap();

    assert_eq!(BestFit.choose_encoded(2, &bytes), Ok(Some(12)));
    assert_eq!(WorstFit.choose_encoded(2, &bytes), Ok(Some(0)));
    assert_eq!(BestFit.choose_encoded(11, &bytes), Ok(None));
}

#[test]
fn test_full_arena_summary_overflows() {
    let mut mgr = MemoryManager::new(1, Arc::new(BestFit));
    mgr.initialize(65536).unwrap();
    assert_eq!(
        mgr.encoded_hole_list(),
        Err(MemoryError::EncodingOverflow { value: 65536 })
    );

    mgr.allocate(1).unwrap();
    assert!(mgr.encoded_hole_list().is_ok());
}

#[test]
fn test_bitmap_matches_segments() {
    let mgr = fragmented();
    let encoded = mgr.encoded_bitmap().unwrap();

    // ceil(26 / 8) body bytes plus the 2-byte header
    assert_eq!(encoded.len(), 4 + 2);
    assert_eq!(&encoded[..2], &[4, 0]);

    let bitmap = OccupancyBitmap::decode(&encoded).unwrap();
    for seg in mgr.segments() {
        for word in seg.start..seg.end() {
            assert_eq!(bitmap.is_occupied(word), !seg.is_free, "word {}", word);
        }
    }
    assert_eq!(bitmap.occupied_words(), 8);
}

#[test]
fn test_bitmap_header_little_endian() {
    let mut mgr = MemoryManager::new(1, Arc::new(BestFit));
    mgr.initialize(4000).unwrap();
    let encoded = mgr.encoded_bitmap().unwrap();
    assert_eq!(&encoded[..2], &[0xf4, 0x01]);
    assert_eq!(encoded.len(), 500 + 2);
}
