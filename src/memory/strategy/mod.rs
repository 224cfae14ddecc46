/*!
 * Placement Strategies
 * Built-in hole selection algorithms
 *
 * Both strategies scan the hole summary once and break ties in favour of the
 * earliest (lowest offset) hole.
 */

mod best_fit;
mod worst_fit;

pub use best_fit::BestFit;
pub use worst_fit::WorstFit;

use super::traits::PlacementStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Built-in strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Smallest hole that fits
    #[default]
    BestFit,
    /// Largest hole that fits
    WorstFit,
}

impl StrategyKind {
    /// Shared strategy instance for this kind
    pub fn strategy(self) -> Arc<dyn PlacementStrategy> {
        match self {
            StrategyKind::BestFit => Arc::new(BestFit),
            StrategyKind::WorstFit => Arc::new(WorstFit),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StrategyKind::BestFit => write!(f, "best-fit"),
            StrategyKind::WorstFit => write!(f, "worst-fit"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best" | "best-fit" | "bestfit" | "best_fit" => Ok(StrategyKind::BestFit),
            "worst" | "worst-fit" | "worstfit" | "worst_fit" => Ok(StrategyKind::WorstFit),
            other => Err(format!("unknown placement strategy: {}", other)),
        }
    }
}
