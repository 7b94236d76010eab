//! Built-in default configuration and mode presets

use std::collections::BTreeMap;

use super::value::ConfigTree;

/// Mode selected when no configuration names one
pub const DEFAULT_MODE: &str = "balanced";

/// Hooks shipped with the tool, all enabled by default
pub const HOOK_NAMES: &[&str] = &[
    "contextLoader",
    "writeValidator",
    "progressTracker",
    "sessionSummary",
];

pub(crate) const DEFAULT_MIN_QUALITY_SCORE: &str = "B";
pub(crate) const DEFAULT_CACHE_TTL_MS: u64 = 300_000;
pub(crate) const DEFAULT_MAX_CONTEXT_LENGTH: u64 = 2000;
pub(crate) const DEFAULT_MAX_EXECUTION_TIME_MS: u64 = 500;

/// Build the default configuration tree.
///
/// Every key in this tree is guaranteed to be present in a configuration
/// resolved from the user settings file.
pub fn default_config() -> ConfigTree {
    let hooks = HOOK_NAMES
        .iter()
        .fold(ConfigTree::new(), |tree, name| tree.with(*name, true));

    ConfigTree::new()
        .with("enabled", true)
        .with("hooks", hooks)
        .with("quality", quality(true, true, DEFAULT_MIN_QUALITY_SCORE))
        .with(
            "performance",
            ConfigTree::new()
                .with("cacheEnabled", true)
                .with("cacheTTL", DEFAULT_CACHE_TTL_MS)
                .with("maxContextLength", DEFAULT_MAX_CONTEXT_LENGTH)
                .with("maxExecutionTime", DEFAULT_MAX_EXECUTION_TIME_MS),
        )
        .with("modes", ConfigTree::new().with("current", DEFAULT_MODE))
}

fn quality(strict_mode: bool, allow_mocks_in_tests: bool, min_quality_score: &str) -> ConfigTree {
    ConfigTree::new()
        .with("strictMode", strict_mode)
        .with("allowMocksInTests", allow_mocks_in_tests)
        .with("minQualityScore", min_quality_score)
}

/// Named partial configurations selected through `modes.current`
///
/// A preset only carries the keys it changes; everything else is left to
/// the defaults and the user's own values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presets {
    table: BTreeMap<String, ConfigTree>,
}

impl Presets {
    /// The presets shipped with the tool: `strict`, `balanced`, `relaxed`.
    pub fn builtin() -> Self {
        let mut table = BTreeMap::new();
        table.insert(
            "strict".to_string(),
            ConfigTree::new().with("quality", quality(true, false, "A")),
        );
        table.insert(
            "balanced".to_string(),
            ConfigTree::new().with("quality", quality(true, true, "B")),
        );
        table.insert(
            "relaxed".to_string(),
            ConfigTree::new().with("quality", quality(false, true, "C")),
        );
        Self { table }
    }

    pub fn get(&self, name: &str) -> Option<&ConfigTree> {
        self.table.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigTree)> {
        self.table.iter().map(|(name, tree)| (name.as_str(), tree))
    }
}

impl Default for Presets {
    fn default() -> Self {
        Self::builtin()
    }
}
