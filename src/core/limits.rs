/*!
 * Arena Limits and Constants
 *
 * Centralized location for arena-wide limits and defaults.
 */

use super::types::{Address, Size, Words};

// =============================================================================
// ARENA LIMITS
// =============================================================================

/// Largest arena that can be initialized, in words
/// Offsets and lengths must fit the 16-bit hole summary layout
pub const MAX_ARENA_WORDS: Words = 65536;

/// Default native word size in bytes
pub const DEFAULT_WORD_SIZE: Size = 8;

/// Default arena size used by the demo driver and `ArenaConfig::default()`
pub const DEFAULT_ARENA_WORDS: Words = MAX_ARENA_WORDS;

/// Byte address the arena is mapped at in the simulated address space
/// Non-zero so that offset/address translation is always exercised
pub const DEFAULT_ARENA_BASE: Address = 0x1000;

// =============================================================================
// EXPORT FORMAT
// =============================================================================

/// Size of the little-endian byte-count header in front of the bitmap body
pub const BITMAP_HEADER_BYTES: usize = 2;

/// Separator placed between entries of the textual memory map
pub const MAP_SEPARATOR: &str = " - ";

/// Permission bits for exported memory maps (before umask)
pub const MAP_FILE_MODE: u32 = 0o666;
