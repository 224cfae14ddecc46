/*!
 * Arena Configuration
 *
 * Runtime configuration for arena geometry and strategy selection
 */

use crate::core::limits::{
    DEFAULT_ARENA_BASE, DEFAULT_ARENA_WORDS, DEFAULT_WORD_SIZE, MAX_ARENA_WORDS,
};
use crate::core::types::{Address, Size, Words};
use crate::memory::StrategyKind;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Arena configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Bytes per word
    pub word_size: Size,
    /// Arena size in words
    pub arena_words: Words,
    /// Address of the first arena byte
    pub base_address: Address,
    /// Initial placement strategy
    pub strategy: StrategyKind,
    /// Where the demo driver writes the memory map
    pub map_path: Option<PathBuf>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            word_size: DEFAULT_WORD_SIZE,
            arena_words: DEFAULT_ARENA_WORDS,
            base_address: DEFAULT_ARENA_BASE,
            strategy: StrategyKind::BestFit,
            map_path: None,
        }
    }
}

impl ArenaConfig {
    /// Small arena for experiments and tests (20 words of 2 bytes)
    pub const fn small() -> Self {
        Self {
            word_size: 2,
            arena_words: 20,
            base_address: DEFAULT_ARENA_BASE,
            strategy: StrategyKind::BestFit,
            map_path: None,
        }
    }

    /// Largest supported arena
    pub const fn max() -> Self {
        Self {
            word_size: DEFAULT_WORD_SIZE,
            arena_words: MAX_ARENA_WORDS,
            base_address: DEFAULT_ARENA_BASE,
            strategy: StrategyKind::BestFit,
            map_path: None,
        }
    }

    /// Load overrides from the environment
    ///
    /// Environment variables:
    /// - HOLEMEM_WORD_SIZE: bytes per word
    /// - HOLEMEM_ARENA_WORDS: arena size in words
    /// - HOLEMEM_BASE_ADDRESS: decimal or 0x-prefixed hex
    /// - HOLEMEM_STRATEGY: best-fit | worst-fit
    /// - HOLEMEM_MAP_PATH: memory map output file
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load overrides through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = parse_var(&lookup, "HOLEMEM_WORD_SIZE", |s| s.parse::<Size>().ok()) {
            config.word_size = v;
        }
        if let Some(v) = parse_var(&lookup, "HOLEMEM_ARENA_WORDS", |s| s.parse::<Words>().ok()) {
            config.arena_words = v;
        }
        if let Some(v) = parse_var(&lookup, "HOLEMEM_BASE_ADDRESS", parse_address) {
            config.base_address = v;
        }
        if let Some(v) = parse_var(&lookup, "HOLEMEM_STRATEGY", |s| {
            StrategyKind::from_str(s).ok()
        }) {
            config.strategy = v;
        }
        if let Some(path) = lookup("HOLEMEM_MAP_PATH").filter(|p| !p.is_empty()) {
            config.map_path = Some(PathBuf::from(path));
        }

        config
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = lookup(key)?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        warn!("Ignoring invalid {}={:?}, using default", key, raw);
    }
    parsed
}

fn parse_address(s: &str) -> Option<Address> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => Address::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}
