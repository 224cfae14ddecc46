/*!
 * Hole List
 * Ordered segment list partitioning the arena
 *
 * The list always covers `[0, total_words)` exactly: segments are sorted by
 * start, leave no gaps, never overlap, and no two neighbours are both free.
 * Every public mutation below keeps those properties before it returns.
 */

use super::export::HoleSummary;
use super::types::Segment;
use crate::core::types::{WordOffset, Words};

/// Hole list store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoleList {
    segments: Vec<Segment>,
}

impl HoleList {
    /// Create an empty list (no arena)
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Re-seed with one hole spanning the whole arena
    pub fn reset(&mut self, total_words: Words) {
        self.segments.clear();
        if total_words > 0 {
            self.segments.push(Segment::hole(0, total_words));
        }
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Iterate over free segments in ascending offset order
    pub fn holes(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.is_free)
    }

    /// Words covered by the list
    pub fn total_words(&self) -> Words {
        self.segments.iter().map(|s| s.length).sum()
    }

    /// Index of the segment starting exactly at `offset`
    pub fn find_segment_by_start(&self, offset: WordOffset) -> Option<usize> {
        self.segments
            .binary_search_by_key(&offset, |s| s.start)
            .ok()
    }

    /// Index of the segment containing word `offset`
    pub fn find_segment_containing(&self, offset: WordOffset) -> Option<usize> {
        let idx = self.segments.partition_point(|s| s.start <= offset);
        if idx == 0 {
            return None;
        }
        let candidate = idx - 1;
        self.segments[candidate]
            .contains(offset)
            .then_some(candidate)
    }

    pub(crate) fn insert_before(&mut self, index: usize, segment: Segment) {
        self.segments.insert(index, segment);
    }

    pub(crate) fn erase(&mut self, index: usize) -> Segment {
        self.segments.remove(index)
    }

    /// Free segments as `(offset, length)` pairs
    pub fn summarize_free(&self) -> HoleSummary {
        self.holes().map(|s| (s.start, s.length)).collect()
    }

    /// Occupy `words` words at the start of the hole at `index`
    ///
    /// An exact fit flips the hole in place; otherwise a new occupied segment
    /// is inserted in front and the hole shrinks and advances by `words`.
    /// Returns the start offset of the occupied segment, or `None` when the
    /// segment is not a hole or is too small.
    pub fn carve(&mut self, index: usize, words: Words) -> Option<WordOffset> {
        let hole = *self.segments.get(index)?;
        if !hole.is_free || words == 0 || hole.length < words {
            return None;
        }

        if hole.length == words {
            self.segments[index].is_free = false;
        } else {
            self.insert_before(index, Segment::occupied(hole.start, words));
            let rest = &mut self.segments[index + 1];
            rest.start += words;
            rest.length -= words;
        }

        Some(hole.start)
    }

    /// Mark the segment at `index` free and coalesce with its neighbours
    ///
    /// The next neighbour is absorbed first, then the previous one. The
    /// segment at `index` survives both merges (taking over the previous
    /// neighbour's start). Returns the index of the resulting hole.
    pub fn release(&mut self, mut index: usize) -> usize {
        if self
            .segments
            .get(index + 1)
            .map_or(false, |next| next.is_free)
        {
            let absorbed = self.erase(index + 1);
            self.segments[index].length += absorbed.length;
        }

        if index > 0 && self.segments[index - 1].is_free {
            let absorbed = self.erase(index - 1);
            index -= 1;
            let survivor = &mut self.segments[index];
            survivor.start = absorbed.start;
            survivor.length += absorbed.length;
        }

        self.segments[index].is_free = true;
        index
    }

    /// Check the partition and coalescing invariants against `total_words`
    pub fn validate(&self, total_words: Words) -> Result<(), String> {
        let mut expected_start = 0;
        let mut prev_free = false;

        for (i, seg) in self.segments.iter().enumerate() {
            if seg.length == 0 {
                return Err(format!("segment {} at word {} has zero length", i, seg.start));
            }
            if seg.start != expected_start {
                return Err(format!(
                    "segment {} starts at word {}, expected {}",
                    i, seg.start, expected_start
                ));
            }
            if seg.is_free && prev_free {
                return Err(format!(
                    "segments {} and {} are adjacent holes",
                    i - 1,
                    i
                ));
            }
            prev_free = seg.is_free;
            expected_start = seg.end();
        }

        if expected_start != total_words {
            return Err(format!(
                "segments cover {} words, arena has {}",
                expected_start, total_words
            ));
        }

        Ok(())
    }
}
