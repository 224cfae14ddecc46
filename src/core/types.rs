/*!
 * Core Types
 * Common types used across the allocator
 */

/// Byte address handed out to callers
///
/// Addresses are plain integers in the simulated address space that starts at
/// the arena base; they are never dereferenced as machine pointers.
pub type Address = usize;

/// Offset into the arena, in words
pub type WordOffset = usize;

/// Length measured in words
pub type Words = usize;

/// Length measured in bytes
pub type Size = usize;
