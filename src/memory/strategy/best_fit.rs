/*!
 * Best Fit
 */

use crate::core::types::{WordOffset, Words};
use crate::memory::export::HoleSummary;
use crate::memory::traits::PlacementStrategy;

/// Picks the smallest hole with `length >= request`
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFit;

impl PlacementStrategy for BestFit {
    fn choose(&self, request: Words, holes: &HoleSummary) -> Option<WordOffset> {
        let mut best: Option<(WordOffset, Words)> = None;
        for &(offset, length) in holes {
            if length < request {
                continue;
            }
            // strict `<` keeps the earliest of equally small holes
            if best.map_or(true, |(_, best_len)| length < best_len) {
                best = Some((offset, length));
            }
        }
        best.map(|(offset, _)| offset)
    }

    fn name(&self) -> &str {
        "best-fit"
    }
}
