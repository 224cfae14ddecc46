/*!
 * Hole-Mem Library
 * Word-addressed hole-list allocator simulator
 *
 * A single arena of up to 65536 words is partitioned into free and occupied
 * segments. Placement strategies (best-fit, worst-fit, or any user strategy)
 * pick the hole for each request, frees coalesce with free neighbours, and the
 * arena state can be exported as a hole summary, an occupancy bitmap or a
 * textual memory map.
 */

pub mod config;
pub mod core;
pub mod memory;
pub mod monitoring;

// Re-exports
pub use config::ArenaConfig;
pub use crate::core::types::{Address, Size, WordOffset, Words};
pub use memory::{
    BestFit, HoleList, HoleSummary, MemoryError, MemoryInfo, MemoryManager, MemoryResult,
    MemoryStats, OccupancyBitmap, PlacementStrategy, Segment, SharedMemoryManager, StrategyKind,
    WorstFit,
};
pub use monitoring::init_tracing;
