//! Typed view over a resolved configuration tree
//!
//! Every field falls back to its default when the key is missing, so the
//! view also works on a project override that only sets a few keys. Values
//! are not validated beyond their JSON type.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults::{
    DEFAULT_CACHE_TTL_MS, DEFAULT_MAX_CONTEXT_LENGTH, DEFAULT_MAX_EXECUTION_TIME_MS,
    DEFAULT_MIN_QUALITY_SCORE, DEFAULT_MODE, HOOK_NAMES,
};
use super::value::ConfigTree;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HookSettings {
    /// Master switch for every hook
    pub enabled: bool,
    /// Per-hook switches keyed by hook name
    pub hooks: BTreeMap<String, bool>,
    pub quality: QualitySettings,
    pub performance: PerformanceSettings,
    pub modes: ModeSettings,
}

impl Default for HookSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            hooks: HOOK_NAMES
                .iter()
                .map(|name| (name.to_string(), true))
                .collect(),
            quality: QualitySettings::default(),
            performance: PerformanceSettings::default(),
            modes: ModeSettings::default(),
        }
    }
}

impl HookSettings {
    /// Read the typed view from a resolved tree.
    ///
    /// Fails only when a known key holds a value of the wrong JSON type.
    pub fn from_tree(tree: &ConfigTree) -> Result<Self> {
        serde_json::from_value(tree.to_json()).map_err(|e| Error::InvalidSettings {
            message: e.to_string(),
        })
    }

    /// Whether the named hook should run according to the configuration.
    ///
    /// Hooks without an entry follow the master switch.
    pub fn is_hook_enabled(&self, name: &str) -> bool {
        self.enabled && self.hooks.get(name).copied().unwrap_or(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualitySettings {
    pub strict_mode: bool,
    pub allow_mocks_in_tests: bool,
    /// Letter grade, "A" being the strictest
    pub min_quality_score: String,
}

impl Default for QualitySettings {
    fn default() -> Self {
        Self {
            strict_mode: true,
            allow_mocks_in_tests: true,
            min_quality_score: DEFAULT_MIN_QUALITY_SCORE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceSettings {
    pub cache_enabled: bool,
    /// Cache lifetime in milliseconds
    #[serde(rename = "cacheTTL")]
    pub cache_ttl: u64,
    pub max_context_length: u64,
    /// Per-hook execution budget in milliseconds
    pub max_execution_time: u64,
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            cache_ttl: DEFAULT_CACHE_TTL_MS,
            max_context_length: DEFAULT_MAX_CONTEXT_LENGTH,
            max_execution_time: DEFAULT_MAX_EXECUTION_TIME_MS,
        }
    }
}

impl PerformanceSettings {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl)
    }

    pub fn max_execution_time(&self) -> Duration {
        Duration::from_millis(self.max_execution_time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeSettings {
    pub current: String,
}

impl Default for ModeSettings {
    fn default() -> Self {
        Self {
            current: DEFAULT_MODE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn defaults_agree_with_default_tree() {
        let from_tree = HookSettings::from_tree(&default_config()).unwrap();
        assert_eq!(from_tree, HookSettings::default());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let tree = ConfigTree::from_json(json!({
            "hooks": { "writeValidator": false },
            "performance": { "cacheTTL": 1000 }
        }))
        .unwrap();

        let settings = HookSettings::from_tree(&tree).unwrap();
        assert!(settings.enabled);
        assert!(!settings.is_hook_enabled("writeValidator"));
        assert!(settings.is_hook_enabled("contextLoader"));
        assert_eq!(settings.performance.cache_ttl(), Duration::from_secs(1));
        assert_eq!(settings.performance.max_execution_time(), Duration::from_millis(500));
        assert_eq!(settings.quality.min_quality_score, "B");
    }

    #[test]
    fn master_switch_disables_every_hook() {
        let tree = ConfigTree::from_json(json!({ "enabled": false })).unwrap();
        let settings = HookSettings::from_tree(&tree).unwrap();

        for name in HOOK_NAMES {
            assert!(!settings.is_hook_enabled(name));
        }
    }

    #[test]
    fn wrong_type_is_reported() {
        let tree = ConfigTree::from_json(json!({ "enabled": "yes" })).unwrap();

        let err = HookSettings::from_tree(&tree).unwrap_err();
        assert!(matches!(err, Error::InvalidSettings { .. }));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let tree = ConfigTree::from_json(json!({ "experimental": { "x": 1 } })).unwrap();
        assert_eq!(HookSettings::from_tree(&tree).unwrap(), HookSettings::default());
    }
}
