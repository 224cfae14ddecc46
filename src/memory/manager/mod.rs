/*!
 * Memory Management
 *
 * Hole-list allocator over a single word-addressed arena.
 *
 * ## Model
 *
 * The arena is an owned, zero-filled byte buffer of `arena_words * word_size`
 * bytes mapped at `base_address` in a simulated address space. Every word
 * belongs to exactly one segment of the hole list, and allocation requests are
 * rounded up to whole words.
 *
 * ## Operations
 *
 * - **Allocate**: summarize holes, ask the active placement strategy for an
 *   offset, split the chosen hole (or take it whole on an exact fit)
 * - **Free**: translate the address back to a word offset, mark the segment
 *   free and coalesce with the next, then the previous, free neighbour
 * - **Export**: hole summary, occupancy bitmap and textual memory map
 * - **Storage**: bounds-checked reads and writes inside allocated segments
 *
 * The manager is single-threaded. Wrap it with [`MemoryManager::into_shared`]
 * when several threads need it; the mutex then serializes every call.
 */

mod allocator;
mod export;
mod stats;
mod storage;

use super::hole_list::HoleList;
use super::traits::PlacementStrategy;
use super::types::{MemoryResult, Segment};
use crate::config::ArenaConfig;
use crate::core::limits::DEFAULT_ARENA_BASE;
use crate::core::types::{Address, Size, WordOffset, Words};
use log::warn;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Manager shared between threads behind a single mutex
pub type SharedMemoryManager = Arc<Mutex<MemoryManager>>;

/// Memory manager
pub struct MemoryManager {
    pub(super) word_size: Size,
    pub(super) base_address: Address,
    pub(super) arena: Option<Vec<u8>>,
    pub(super) arena_words: Words,
    pub(super) holes: HoleList,
    pub(super) strategy: Arc<dyn PlacementStrategy>,
}

impl MemoryManager {
    /// Create a manager with the native word size (bytes) and initial strategy
    ///
    /// No arena exists until [`MemoryManager::initialize`] is called. A word
    /// size of zero is bumped to one byte.
    pub fn new(word_size: Size, strategy: Arc<dyn PlacementStrategy>) -> Self {
        if word_size == 0 {
            warn!("Word size 0 is not addressable, using 1 byte words");
        }
        Self {
            word_size: word_size.max(1),
            base_address: DEFAULT_ARENA_BASE,
            arena: None,
            arena_words: 0,
            holes: HoleList::new(),
            strategy,
        }
    }

    /// Map the arena at a different base address
    pub fn with_base_address(mut self, base_address: Address) -> Self {
        self.base_address = base_address;
        self
    }

    /// Build a manager from configuration and initialize its arena
    pub fn from_config(config: &ArenaConfig) -> MemoryResult<Self> {
        let mut manager = Self::new(config.word_size, config.strategy.strategy())
            .with_base_address(config.base_address);
        manager.initialize(config.arena_words)?;
        Ok(manager)
    }

    /// Move the manager behind a mutex for shared use
    pub fn into_shared(self) -> SharedMemoryManager {
        Arc::new(Mutex::new(self))
    }

    /// Bytes per word
    pub fn word_size(&self) -> Size {
        self.word_size
    }

    /// Byte address of the first arena word, if an arena exists
    pub fn arena_start(&self) -> Option<Address> {
        self.arena.as_ref().map(|_| self.base_address)
    }

    /// Arena capacity in bytes (0 without an arena)
    pub fn arena_limit_bytes(&self) -> Size {
        self.arena.as_ref().map_or(0, Vec::len)
    }

    /// Arena capacity in words (0 without an arena)
    pub fn arena_words(&self) -> Words {
        self.arena_words
    }

    pub fn is_initialized(&self) -> bool {
        self.arena.is_some()
    }

    /// Name of the active placement strategy
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Read-only view of every segment, holes and allocations alike
    pub fn segments(&self) -> &[Segment] {
        self.holes.segments()
    }

    pub fn hole_list(&self) -> &HoleList {
        &self.holes
    }

    /// Byte address of a word offset
    ///
    /// `initialize` guarantees the whole arena fits above the base address.
    pub(super) fn address_of(&self, offset: WordOffset) -> Address {
        self.base_address + offset * self.word_size
    }

    /// Word offset of a byte address, rounding up
    ///
    /// Addresses below the arena base have no offset.
    pub(super) fn offset_of(&self, address: Address) -> Option<WordOffset> {
        address
            .checked_sub(self.base_address)
            .map(|bytes| bytes.div_ceil(self.word_size))
    }

    /// Word offset of a word-aligned byte address
    pub(super) fn aligned_offset_of(&self, address: Address) -> Option<WordOffset> {
        address
            .checked_sub(self.base_address)
            .filter(|bytes| bytes % self.word_size == 0)
            .map(|bytes| bytes / self.word_size)
    }
}

impl fmt::Debug for MemoryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryManager")
            .field("word_size", &self.word_size)
            .field("base_address", &format_args!("0x{:x}", self.base_address))
            .field("arena_words", &self.arena_words)
            .field("segments", &self.holes.len())
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

impl Drop for MemoryManager {
    fn drop(&mut self) {
        self.shutdown();
    }
}
