/*!
 * Worst Fit
 */

use crate::core::types::{WordOffset, Words};
use crate::memory::export::HoleSummary;
use crate::memory::traits::PlacementStrategy;

/// Picks the largest hole with `length >= request`
#[derive(Debug, Clone, Copy, Default)]
pub struct WorstFit;

impl PlacementStrategy for WorstFit {
    fn choose(&self, request: Words, holes: &HoleSummary) -> Option<WordOffset> {
        holes
            .iter()
            .filter(|&&(_, length)| length >= request)
            // fold with strict `>` so the first maximal hole wins
            .fold(None, |best: Option<(WordOffset, Words)>, &(offset, length)| {
                match best {
                    Some((_, best_len)) if length <= best_len => best,
                    _ => Some((offset, length)),
                }
            })
            .map(|(offset, _)| offset)
    }

    fn name(&self) -> &str {
        "worst-fit"
    }
}
