/*!
 * Memory Types
 * Common types for the hole-list allocator
 */

use crate::core::types::{Address, Size, WordOffset, Words};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum MemoryError {
    #[error("Invalid arena size: {requested} words (maximum {max})")]
    #[diagnostic(
        code(memory::invalid_size),
        help("The previous arena, if any, was left untouched.")
    )]
    InvalidSize { requested: usize, max: usize },

    #[error("Arena of {words} words x {word_size} bytes at 0x{base_address:x} exceeds the address space")]
    #[diagnostic(
        code(memory::arena_overflow),
        help("Use a smaller word size or a lower base address.")
    )]
    ArenaOverflow {
        words: Words,
        word_size: Size,
        base_address: Address,
    },

    #[error("Arena buffer of {bytes} bytes could not be reserved")]
    #[diagnostic(code(memory::arena_unavailable))]
    ArenaUnavailable { bytes: Size },

    #[error("No fit: requested {requested_words} words, largest hole {largest_hole} words")]
    #[diagnostic(
        code(memory::no_fit),
        help("Free some memory or switch placement strategy and retry.")
    )]
    NoFit {
        requested_words: Words,
        largest_hole: Words,
    },

    #[error("Unknown address: 0x{0:x}")]
    #[diagnostic(code(memory::unknown_address))]
    UnknownAddress(Address),

    #[error("Arena is not initialized")]
    #[diagnostic(code(memory::not_initialized), help("Call initialize() first."))]
    NotInitialized,

    #[error("Access out of bounds: {len} bytes at 0x{address:x}")]
    #[diagnostic(
        code(memory::out_of_bounds),
        help("Reads and writes must stay inside a single allocated segment.")
    )]
    OutOfBounds { address: Address, len: Size },

    #[error("Memory map export to {path} failed: {message}")]
    #[diagnostic(code(memory::export_io))]
    ExportIo { path: String, message: String },

    #[error("Value {value} does not fit a 16-bit export field")]
    #[diagnostic(code(memory::encoding_overflow))]
    EncodingOverflow { value: usize },

    #[error("Malformed hole summary: {0}")]
    #[diagnostic(code(memory::malformed_summary))]
    MalformedSummary(String),

    #[error("Malformed occupancy bitmap: {0}")]
    #[diagnostic(code(memory::malformed_bitmap))]
    MalformedBitmap(String),
}

/// A contiguous run of words in the arena, either free (a hole) or occupied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start: WordOffset,
    pub length: Words,
    pub is_free: bool,
}

impl Segment {
    pub fn hole(start: WordOffset, length: Words) -> Self {
        Self {
            start,
            length,
            is_free: true,
        }
    }

    pub fn occupied(start: WordOffset, length: Words) -> Self {
        Self {
            start,
            length,
            is_free: false,
        }
    }

    /// One past the last word of the segment
    pub fn end(&self) -> WordOffset {
        self.start + self.length
    }

    pub fn contains(&self, offset: WordOffset) -> bool {
        offset >= self.start && offset < self.end()
    }
}

/// Arena statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub word_size: Size,
    pub total_words: Words,
    pub used_words: Words,
    pub free_words: Words,
    pub hole_count: usize,
    pub allocated_segments: usize,
    pub largest_hole: Words,
    /// 1 - largest_hole / free_words; 0.0 when free space is one hole or none
    pub fragmentation: f64,
    pub usage_percentage: f64,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        MemoryPressure::from_usage(self.usage_percentage)
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl MemoryPressure {
    pub fn from_usage(usage_percentage: f64) -> Self {
        if usage_percentage >= 95.0 {
            MemoryPressure::Critical
        } else if usage_percentage >= 80.0 {
            MemoryPressure::High
        } else if usage_percentage >= 60.0 {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

impl std::fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
