/*!
 * Arena Storage Tests
 * Reads and writes through allocated addresses
 */

use hole_mem::memory::{BestFit, MemoryError, MemoryManager};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn manager() -> MemoryManager {
    let mut mgr = MemoryManager::new(4, Arc::new(BestFit));
    mgr.initialize(16).unwrap();
    mgr
}

#[test]
fn test_write_then_read() {
    let mut mgr = manager();
    let addr = mgr.allocate(6).unwrap();

    mgr.write_bytes(addr, b"hello!").unwrap();
    assert_eq!(mgr.read_bytes(addr, 6).unwrap(), b"hello!".to_vec());
    assert_eq!(mgr.slice(addr + 1, 4).unwrap(), b"ello");

    // rounding up to two words makes the full 8 bytes usable
    mgr.slice_mut(addr, 8).unwrap()[7] = 0xaa;
    assert_eq!(mgr.read_bytes(addr + 6, 2).unwrap(), vec![0, 0xaa]);
}

#[test]
fn test_fresh_arena_is_zeroed() {
    let mut mgr = manager();
    let addr = mgr.allocate(16).unwrap();
    assert_eq!(mgr.read_bytes(addr, 16).unwrap(), vec![0u8; 16]);
}

#[test]
fn test_access_past_segment_end() {
    let mut mgr = manager();
    let a = mgr.allocate(4).unwrap();
    mgr.allocate(4).unwrap();

    let result = mgr.write_bytes(a, &[1, 2, 3, 4, 5]);
    assert_eq!(
        result,
        Err(MemoryError::OutOfBounds {
            address: a,
            len: 5
        })
    );
    // the neighbour is untouched
    assert_eq!(mgr.read_bytes(a + 4, 4).unwrap(), vec![0u8; 4]);
}

#[test]
fn test_access_to_holes_rejected() {
    let mut mgr = manager();
    let a = mgr.allocate(4).unwrap();
    mgr.free(a);

    assert!(matches!(
        mgr.read_bytes(a, 1),
        Err(MemoryError::OutOfBounds { .. })
    ));
    assert!(mgr.slice(a - 1, 1).is_err());
    assert!(mgr.slice(a + 64, 1).is_err());
}

#[test]
fn test_access_without_arena() {
    let mut mgr = manager();
    let a = mgr.allocate(4).unwrap();
    mgr.shutdown();
    assert_eq!(mgr.read_bytes(a, 1), Err(MemoryError::NotInitialized));
}
