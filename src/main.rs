/*!
 * Hole-Mem - Demo Driver
 *
 * Runs a fixed allocate/free workload against an arena configured from the
 * environment and reports the resulting layout:
 * - Memory map, then a JSON report (stats, pressure, segments) on stdout
 * - Optional memory map file (HOLEMEM_MAP_PATH)
 */

use anyhow::Context;
use hole_mem::{init_tracing, ArenaConfig, MemoryManager, StrategyKind};
use tracing::{info, warn};

/// Request sizes in bytes for the first allocation round
const WORKLOAD: [usize; 8] = [64, 16, 128, 8, 256, 32, 96, 24];

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ArenaConfig::from_env();
    info!(
        word_size = config.word_size,
        arena_words = config.arena_words,
        strategy = %config.strategy,
        "Hole-Mem starting"
    );

    let mut manager = MemoryManager::from_config(&config)
        .with_context(|| format!("initializing {} word arena", config.arena_words))?;

    let mut live = Vec::new();
    for size in WORKLOAD {
        match manager.allocate(size) {
            Ok(address) => live.push(address),
            Err(e) => warn!(size, error = %e, "Allocation failed"),
        }
    }

    // Punch holes of different sizes so the strategies diverge
    for address in live.iter().step_by(2) {
        manager.free(*address);
    }
    println!("after frees:       {}", manager.memory_map());

    let other = match config.strategy {
        StrategyKind::BestFit => StrategyKind::WorstFit,
        StrategyKind::WorstFit => StrategyKind::BestFit,
    };
    manager.set_strategy(other.strategy());
    for size in [8, 40] {
        match manager.allocate(size) {
            Ok(address) => info!(size, address = %format!("0x{:x}", address), "Allocated with {}", other),
            Err(e) => warn!(size, error = %e, "Allocation failed"),
        }
    }
    println!("after {:<11} {}", format!("{}:", other), manager.memory_map());

    let stats = manager.stats();
    let report = serde_json::json!({
        "strategy": manager.strategy_name(),
        "pressure": stats.memory_pressure(),
        "stats": stats,
        "segments": manager.segments(),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("serializing report")?
    );

    if let Some(path) = &config.map_path {
        manager
            .dump_memory_map(path)
            .with_context(|| format!("writing memory map to {}", path.display()))?;
        info!(path = %path.display(), "Memory map written");
    }

    manager.shutdown();
    Ok(())
}
