/*!
 * Manager Export Operations
 * Hole summary, bitmap and memory map for the live arena
 */

use super::super::export::{write_memory_map, HoleSummary, MemoryMap, OccupancyBitmap};
use super::super::types::MemoryResult;
use super::MemoryManager;
use bytes::Bytes;
use std::path::Path;

impl MemoryManager {
    /// Free segments as `(offset, length)` pairs
    pub fn hole_summary(&self) -> HoleSummary {
        self.holes.summarize_free()
    }

    /// Hole summary in the 16-bit little-endian wire layout
    pub fn encoded_hole_list(&self) -> MemoryResult<Bytes> {
        self.hole_summary().encode()
    }

    /// Word occupancy bitmap
    pub fn bitmap(&self) -> OccupancyBitmap {
        OccupancyBitmap::from_segments(self.holes.segments(), self.arena_words)
    }

    /// Occupancy bitmap with its 2-byte size header
    pub fn encoded_bitmap(&self) -> MemoryResult<Bytes> {
        self.bitmap().encode()
    }

    /// Holes rendered as `"[start, length] - ..."`
    pub fn memory_map(&self) -> String {
        MemoryMap::new(self.holes.segments()).to_string()
    }

    /// Write the memory map to `path`, creating or truncating it
    pub fn dump_memory_map(&self, path: impl AsRef<Path>) -> MemoryResult<()> {
        write_memory_map(path.as_ref(), &self.memory_map())
    }
}
