/*!
 * Memory Traits
 * Placement and introspection abstractions
 */

use super::export::HoleSummary;
use super::types::*;
use crate::core::types::{Address, Size, WordOffset, Words};

/// Placement strategy interface
///
/// Given a request in words and the current hole summary, picks the offset of
/// the hole to carve the allocation from, or `None` when nothing fits.
/// Implementations must be pure: identical inputs give identical answers.
pub trait PlacementStrategy: Send + Sync {
    /// Choose a hole for `request` words
    fn choose(&self, request: Words, holes: &HoleSummary) -> Option<WordOffset>;

    /// Short name used in logs
    fn name(&self) -> &str {
        "custom"
    }

    /// Choose a hole from the encoded summary layout (`[count][offset][length]...`)
    fn choose_encoded(&self, request: Words, encoded: &[u8]) -> MemoryResult<Option<WordOffset>> {
        let holes = HoleSummary::decode(encoded)?;
        Ok(self.choose(request, &holes))
    }
}

/// Plain functions and closures work as strategies
impl<F> PlacementStrategy for F
where
    F: Fn(Words, &HoleSummary) -> Option<WordOffset> + Send + Sync,
{
    fn choose(&self, request: Words, holes: &HoleSummary) -> Option<WordOffset> {
        self(request, holes)
    }
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get overall arena statistics
    fn stats(&self) -> MemoryStats;

    /// Get arena info as (total, used, available) in bytes
    fn info(&self) -> (Size, Size, Size);

    /// Check if an address is the start of an allocated segment
    fn is_allocated(&self, address: Address) -> bool;

    /// Size in bytes of the allocated segment starting at `address`
    fn block_size(&self, address: Address) -> Option<Size>;

    /// Get memory pressure level
    fn pressure(&self) -> MemoryPressure {
        self.stats().memory_pressure()
    }
}
