/*!
 * Memory Module
 * Hole-list allocation, placement strategies and introspection
 */

pub mod export;
pub mod hole_list;
pub mod manager;
pub mod strategy;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use export::{HoleSummary, MemoryMap, OccupancyBitmap};
pub use hole_list::HoleList;
pub use manager::{MemoryManager, SharedMemoryManager};
pub use strategy::{BestFit, StrategyKind, WorstFit};
pub use traits::*;
pub use types::*;
