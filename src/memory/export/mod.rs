/*!
 * Introspection and Export
 * Hole summary, occupancy bitmap and textual memory map
 *
 * ## Formats
 *
 * - **Hole summary**: 16-bit little-endian words
 *   `[count][offset_0][length_0][offset_1][length_1]...`
 * - **Occupancy bitmap**: `[size_lo][size_hi][body...]`, one bit per word,
 *   low bit first, 1 = occupied
 * - **Memory map**: `"[start, length] - [start, length]"`, holes only
 */

mod bitmap;
mod map;
mod summary;

pub use bitmap::OccupancyBitmap;
pub use map::{write_memory_map, MemoryMap};
pub use summary::HoleSummary;
