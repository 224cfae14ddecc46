/*!
 * Memory Storage Operations
 * Read/write operations on arena bytes
 */

use super::super::types::{MemoryError, MemoryResult};
use super::MemoryManager;
use crate::core::types::{Address, Size};
use log::debug;
use std::ops::Range;

impl MemoryManager {
    /// Byte range inside the arena for `len` bytes at `address`
    ///
    /// The whole range must lie within one allocated segment.
    fn byte_range(&self, address: Address, len: Size) -> MemoryResult<Range<usize>> {
        let out_of_bounds = MemoryError::OutOfBounds { address, len };

        if !self.is_initialized() {
            return Err(MemoryError::NotInitialized);
        }

        let start = address
            .checked_sub(self.base_address)
            .filter(|&offset| offset < self.arena_limit_bytes())
            .ok_or_else(|| out_of_bounds.clone())?;

        let index = self
            .holes
            .find_segment_containing(start / self.word_size)
            .ok_or_else(|| out_of_bounds.clone())?;
        let seg = self.holes.segments()[index];
        if seg.is_free {
            return Err(out_of_bounds);
        }

        let end = start.checked_add(len).ok_or_else(|| out_of_bounds.clone())?;
        if end > seg.end() * self.word_size {
            return Err(out_of_bounds);
        }

        Ok(start..end)
    }

    /// Borrow `len` arena bytes at `address`
    pub fn slice(&self, address: Address, len: Size) -> MemoryResult<&[u8]> {
        let range = self.byte_range(address, len)?;
        let arena = self.arena.as_deref().ok_or(MemoryError::NotInitialized)?;
        Ok(&arena[range])
    }

    /// Mutably borrow `len` arena bytes at `address`
    pub fn slice_mut(&mut self, address: Address, len: Size) -> MemoryResult<&mut [u8]> {
        let range = self.byte_range(address, len)?;
        let arena = self
            .arena
            .as_deref_mut()
            .ok_or(MemoryError::NotInitialized)?;
        Ok(&mut arena[range])
    }

    /// Write bytes to an allocated region
    pub fn write_bytes(&mut self, address: Address, data: &[u8]) -> MemoryResult<()> {
        self.slice_mut(address, data.len())?.copy_from_slice(data);
        debug!("Wrote {} bytes to address 0x{:x}", data.len(), address);
        Ok(())
    }

    /// Read bytes from an allocated region
    pub fn read_bytes(&self, address: Address, size: Size) -> MemoryResult<Vec<u8>> {
        let data = self.slice(address, size)?.to_vec();
        debug!("Read {} bytes from address 0x{:x}", size, address);
        Ok(data)
    }
}
