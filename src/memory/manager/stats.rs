/*!
 * Memory Statistics
 * Occupancy figures and allocation lookups
 */

use super::super::traits::MemoryInfo;
use super::super::types::MemoryStats;
use super::MemoryManager;
use crate::core::types::{Address, Size, Words};

impl MemoryManager {
    /// Words held by allocated segments
    pub fn used_words(&self) -> Words {
        self.holes
            .iter()
            .filter(|s| !s.is_free)
            .map(|s| s.length)
            .sum()
    }

    pub(super) fn usage_percentage(&self, used: Words) -> f64 {
        if self.arena_words == 0 {
            return 0.0;
        }
        (used as f64 / self.arena_words as f64) * 100.0
    }

    /// Overall arena statistics
    pub fn stats(&self) -> MemoryStats {
        let used_words = self.used_words();
        let free_words = self.arena_words - used_words;
        let hole_count = self.holes.holes().count();
        let largest_hole = self.holes.holes().map(|s| s.length).max().unwrap_or(0);

        let fragmentation = if free_words == 0 {
            0.0
        } else {
            1.0 - largest_hole as f64 / free_words as f64
        };

        MemoryStats {
            word_size: self.word_size,
            total_words: self.arena_words,
            used_words,
            free_words,
            hole_count,
            allocated_segments: self.holes.len() - hole_count,
            largest_hole,
            fragmentation,
            usage_percentage: self.usage_percentage(used_words),
        }
    }

    /// Arena info as (total, used, available) in bytes
    pub fn info(&self) -> (Size, Size, Size) {
        let total = self.arena_words * self.word_size;
        let used = self.used_words() * self.word_size;
        (total, used, total - used)
    }

    /// Check if `address` starts an allocated segment
    pub fn is_allocated(&self, address: Address) -> bool {
        self.block_size(address).is_some()
    }

    /// Size in bytes of the allocated segment starting at `address`
    ///
    /// Unaligned addresses match nothing.
    pub fn block_size(&self, address: Address) -> Option<Size> {
        if !self.is_initialized() {
            return None;
        }
        let offset = self.aligned_offset_of(address)?;
        let index = self.holes.find_segment_by_start(offset)?;
        let seg = self.holes.get(index)?;
        (!seg.is_free).then_some(seg.length * self.word_size)
    }
}

impl MemoryInfo for MemoryManager {
    fn stats(&self) -> MemoryStats {
        MemoryManager::stats(self)
    }

    fn info(&self) -> (Size, Size, Size) {
        MemoryManager::info(self)
    }

    fn is_allocated(&self, address: Address) -> bool {
        MemoryManager::is_allocated(self, address)
    }

    fn block_size(&self, address: Address) -> Option<Size> {
        MemoryManager::block_size(self, address)
    }
}
