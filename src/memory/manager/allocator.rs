/*!
 * Memory Allocator Implementation
 * Initialization, allocation and deallocation logic
 */

use super::super::traits::PlacementStrategy;
use super::super::types::{MemoryError, MemoryPressure, MemoryResult};
use super::MemoryManager;
use crate::core::limits::MAX_ARENA_WORDS;
use crate::core::types::{Address, Size, Words};
use log::{debug, info, warn};
use std::sync::Arc;

impl MemoryManager {
    /// Create a zero-filled arena of `size_words` words
    ///
    /// Sizes above [`MAX_ARENA_WORDS`], and arenas whose byte range would not
    /// fit above the base address, are rejected and leave any existing arena
    /// untouched. Otherwise the previous arena is torn down first and the
    /// hole list is re-seeded with a single hole spanning the new arena.
    pub fn initialize(&mut self, size_words: Words) -> MemoryResult<()> {
        if size_words > MAX_ARENA_WORDS {
            warn!(
                "Rejected arena of {} words (maximum {}), keeping current arena",
                size_words, MAX_ARENA_WORDS
            );
            return Err(MemoryError::InvalidSize {
                requested: size_words,
                max: MAX_ARENA_WORDS,
            });
        }

        let limit = size_words
            .checked_mul(self.word_size)
            .filter(|&limit| self.base_address.checked_add(limit).is_some())
            .ok_or_else(|| {
                warn!(
                    "Rejected arena of {} words x {} bytes at 0x{:x}: exceeds the address space",
                    size_words, self.word_size, self.base_address
                );
                MemoryError::ArenaOverflow {
                    words: size_words,
                    word_size: self.word_size,
                    base_address: self.base_address,
                }
            })?;

        let mut arena = Vec::new();
        if let Err(e) = arena.try_reserve_exact(limit) {
            warn!("Rejected arena of {} bytes: {}", limit, e);
            return Err(MemoryError::ArenaUnavailable { bytes: limit });
        }
        arena.resize(limit, 0u8);

        if self.is_initialized() {
            self.shutdown();
        }

        self.arena = Some(arena);
        self.arena_words = size_words;
        self.holes.reset(size_words);

        info!(
            "Arena initialized: {} words x {} bytes = {} bytes at 0x{:x} ({})",
            size_words,
            self.word_size,
            limit,
            self.base_address,
            self.strategy.name()
        );
        Ok(())
    }

    /// Release the arena and clear the hole list; safe to repeat
    pub fn shutdown(&mut self) {
        if let Some(arena) = self.arena.take() {
            info!(
                "Arena released: {} bytes, {} segments dropped",
                arena.len(),
                self.holes.len()
            );
        }
        self.holes.clear();
        self.arena_words = 0;
    }

    /// Replace the placement strategy for subsequent allocations
    pub fn set_strategy(&mut self, strategy: Arc<dyn PlacementStrategy>) {
        info!(
            "Placement strategy changed: {} -> {}",
            self.strategy.name(),
            strategy.name()
        );
        self.strategy = strategy;
    }

    /// Words needed for `size_bytes`, never less than one
    pub fn words_for(&self, size_bytes: Size) -> Words {
        size_bytes.div_ceil(self.word_size).max(1)
    }

    /// Allocate `size_bytes` rounded up to whole words
    ///
    /// Returns the byte address of the new segment, or `NoFit` when the
    /// strategy finds no usable hole.
    pub fn allocate(&mut self, size_bytes: Size) -> MemoryResult<Address> {
        if !self.is_initialized() {
            return Err(MemoryError::NotInitialized);
        }

        let words = self.words_for(size_bytes);
        let summary = self.holes.summarize_free();
        let no_fit = MemoryError::NoFit {
            requested_words: words,
            largest_hole: summary.largest(),
        };

        let Some(offset) = self.strategy.choose(words, &summary) else {
            debug!(
                "No fit for {} bytes ({} words) among {} holes ({})",
                size_bytes,
                words,
                summary.len(),
                self.strategy.name()
            );
            return Err(no_fit);
        };

        let Some(index) = self.holes.find_segment_by_start(offset) else {
            warn!(
                "Strategy {} chose word {} which starts no segment",
                self.strategy.name(),
                offset
            );
            return Err(no_fit);
        };

        let split = self.holes.segments()[index].length != words;
        let Some(start) = self.holes.carve(index, words) else {
            warn!(
                "Strategy {} chose segment at word {} which cannot hold {} words",
                self.strategy.name(),
                offset,
                words
            );
            return Err(no_fit);
        };
        debug_assert!(self.holes.validate(self.arena_words).is_ok());

        let address = self.address_of(start);
        let used = self.used_words();
        let pressure = MemoryPressure::from_usage(self.usage_percentage(used));

        if matches!(pressure, MemoryPressure::High | MemoryPressure::Critical) {
            warn!(
                "Memory pressure {}: Allocated {} words at 0x{:x} ({} / {} words used)",
                pressure, words, address, used, self.arena_words
            );
        } else {
            info!(
                "Allocated {} bytes ({} words) at 0x{:x}, word {}{}",
                size_bytes,
                words,
                address,
                start,
                if split { ", split hole" } else { ", exact fit" }
            );
        }

        Ok(address)
    }

    /// Free the segment starting at `address`
    ///
    /// Addresses that do not start a segment are ignored.
    pub fn free(&mut self, address: Address) {
        // Unknown addresses are a caller contract violation, already logged
        let _ = self.try_free(address);
    }

    /// Free the segment starting at `address`, reporting unknown addresses
    pub fn try_free(&mut self, address: Address) -> MemoryResult<()> {
        let index = if self.is_initialized() {
            self.offset_of(address)
                .and_then(|offset| self.holes.find_segment_by_start(offset))
        } else {
            None
        };

        let Some(index) = index else {
            warn!(
                "Attempted to free unknown address 0x{:x}, ignoring",
                address
            );
            return Err(MemoryError::UnknownAddress(address));
        };

        let freed = self.holes.segments()[index];
        if freed.is_free {
            debug!("Address 0x{:x} already starts a hole", address);
        }

        let before = self.holes.len();
        let merged = self.holes.release(index);
        debug_assert!(self.holes.validate(self.arena_words).is_ok());

        let hole = self.holes.segments()[merged];
        info!(
            "Freed {} words at 0x{:x}, hole now [{}, {}] ({} segments coalesced)",
            freed.length,
            address,
            hole.start,
            hole.length,
            before - self.holes.len()
        );
        Ok(())
    }
}
