//! Configuration resolution across the project override, user settings,
//! presets and built-in defaults
//!
//! Sources are consulted in priority order and the first usable one wins:
//!
//! 1. **Project override** - `<root>/.bmad-hooks.json`, returned verbatim
//! 2. **User settings** - the `bmad` section of `~/.claude/settings.json`,
//!    layered over the selected preset and the defaults
//! 3. **Defaults** - the built-in tree
//!
//! Resolution never fails: a missing, unreadable or malformed source is
//! skipped and the next one is tried.

use std::path::PathBuf;

use hooks_fs::NormalizedPath;

use super::defaults::{Presets, default_config};
use super::deep_merge::merge;
use super::source::{ConfigSource, SkipReason};
use super::value::{ConfigTree, ConfigValue};
use crate::switch::{self, DisableFlag};

/// Project-local override file, relative to the project root
pub const LOCAL_OVERRIDE_FILE: &str = ".bmad-hooks.json";

/// User settings file, relative to the home directory
pub const USER_SETTINGS_FILE: &str = ".claude/settings.json";

/// Key of this tool's section inside the user settings file
pub const SETTINGS_SECTION: &str = "bmad";

/// Where a resolved configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// The project override file, used as-is
    LocalOverride(NormalizedPath),
    /// The user settings section merged with preset and defaults
    UserSettings(NormalizedPath),
    /// Nothing usable was found
    Defaults,
}

/// A source that existed but was not used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSource {
    pub path: NormalizedPath,
    pub reason: SkipReason,
}

/// A resolved configuration along with how it was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub config: ConfigTree,
    pub origin: ConfigOrigin,
    /// Sources skipped because they were invalid, in the order consulted
    pub skipped: Vec<SkippedSource>,
}

/// Resolves the hook configuration for a project
///
/// Owns the default tree, the preset table and a handle to the runtime
/// disable flag. Each call to [`load`](Self::load) re-reads the sources.
pub struct ConfigResolver {
    /// Project root containing the override file
    root: NormalizedPath,

    /// Override for the home directory (used for testing).
    /// When `None`, `dirs::home_dir()` is used.
    home_dir_override: Option<PathBuf>,

    defaults: ConfigTree,
    presets: Presets,
    disable_flag: DisableFlag,
}

impl ConfigResolver {
    /// Create a resolver for the given project root.
    ///
    /// The disable flag is seeded from the `BMAD_HOOKS_DISABLED`
    /// environment variable.
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self {
            root: root.into(),
            home_dir_override: None,
            defaults: default_config(),
            presets: Presets::builtin(),
            disable_flag: DisableFlag::from_env(),
        }
    }

    /// Create a resolver with a custom home directory.
    ///
    /// This is primarily useful for testing, where the real user settings
    /// must not leak into the result. The disable flag starts cleared.
    pub fn with_home_dir(root: impl Into<NormalizedPath>, home_dir: impl Into<PathBuf>) -> Self {
        Self {
            home_dir_override: Some(home_dir.into()),
            disable_flag: DisableFlag::new(),
            ..Self::new(root)
        }
    }

    /// Share an existing disable flag instead of the resolver's own.
    pub fn with_disable_flag(mut self, flag: DisableFlag) -> Self {
        self.disable_flag = flag;
        self
    }

    fn home_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.home_dir_override {
            return Some(override_dir.clone());
        }
        dirs::home_dir()
    }

    /// Produce the effective configuration.
    ///
    /// Never fails; in the worst case the defaults are returned.
    pub fn load(&self) -> ConfigTree {
        self.load_detailed().config
    }

    /// Like [`load`](Self::load), but also reports the origin of the result
    /// and every source that was skipped as invalid.
    pub fn load_detailed(&self) -> Resolution {
        let mut skipped = Vec::new();

        let local_path = self.local_override_path();
        match ConfigSource::read(&local_path) {
            ConfigSource::Found(config) => {
                tracing::debug!(%local_path, "Using project override verbatim");
                return Resolution {
                    config,
                    origin: ConfigOrigin::LocalOverride(local_path),
                    skipped,
                };
            }
            ConfigSource::Absent => {
                tracing::debug!(%local_path, "No project override found - skipping");
            }
            ConfigSource::Invalid(reason) => {
                tracing::debug!(%local_path, %reason, "Ignoring invalid project override");
                skipped.push(SkippedSource {
                    path: local_path,
                    reason,
                });
            }
        }

        if let Some(settings_path) = self.user_settings_path() {
            match ConfigSource::read(&settings_path).section(SETTINGS_SECTION) {
                ConfigSource::Found(section) => {
                    tracing::debug!(%settings_path, "Merging user settings with defaults");
                    return Resolution {
                        config: self.merge_with_defaults(&section),
                        origin: ConfigOrigin::UserSettings(settings_path),
                        skipped,
                    };
                }
                ConfigSource::Absent => {
                    tracing::debug!(%settings_path, "No user settings found - skipping");
                }
                ConfigSource::Invalid(reason) => {
                    tracing::debug!(%settings_path, %reason, "Ignoring unusable user settings");
                    skipped.push(SkippedSource {
                        path: settings_path,
                        reason,
                    });
                }
            }
        } else {
            tracing::debug!("No home directory available - skipping user settings");
        }

        Resolution {
            config: self.defaults.clone(),
            origin: ConfigOrigin::Defaults,
            skipped,
        }
    }

    /// Layer a partial user tree over its selected preset and the defaults.
    ///
    /// Precedence is user > preset > default. The preset is the one named by
    /// `modes.current` in `user`; when that key is missing or names no
    /// preset, only the defaults sit beneath the user values.
    pub fn merge_with_defaults(&self, user: &ConfigTree) -> ConfigTree {
        let preset = user
            .lookup("modes.current")
            .and_then(ConfigValue::as_str)
            .and_then(|mode| {
                let preset = self.presets.get(mode);
                if preset.is_none() {
                    tracing::debug!(mode, "Unknown mode - no preset applied");
                }
                preset
            });

        match preset {
            Some(preset) => merge(&self.defaults, &merge(preset, user)),
            None => merge(&self.defaults, user),
        }
    }

    /// Structural merge of two trees; see [`merge`](fn@crate::config::merge).
    pub fn merge(base: &ConfigTree, overlay: &ConfigTree) -> ConfigTree {
        merge(base, overlay)
    }

    /// Apply a runtime command (`*hooks-enable` / `*hooks-disable`).
    ///
    /// Returns `false` for anything else.
    pub fn handle_command(&self, command: &str) -> bool {
        switch::handle_command(&self.disable_flag, command)
    }

    /// Whether hooks are disabled at runtime.
    pub fn is_disabled(&self) -> bool {
        self.disable_flag.is_set()
    }

    pub fn disable_flag(&self) -> &DisableFlag {
        &self.disable_flag
    }

    pub fn defaults(&self) -> &ConfigTree {
        &self.defaults
    }

    pub fn presets(&self) -> &Presets {
        &self.presets
    }

    pub fn preset(&self, name: &str) -> Option<&ConfigTree> {
        self.presets.get(name)
    }

    /// Get the project root path
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn local_override_path(&self) -> NormalizedPath {
        self.root.join(LOCAL_OVERRIDE_FILE)
    }

    /// Path of the user settings file, if a home directory is known
    pub fn user_settings_path(&self) -> Option<NormalizedPath> {
        self.home_dir()
            .map(|home| NormalizedPath::new(home).join(USER_SETTINGS_FILE))
    }

    /// Check if a project override file exists
    pub fn has_local_override(&self) -> bool {
        self.local_override_path().is_file()
    }

    /// Check if a user settings file exists
    pub fn has_user_settings(&self) -> bool {
        self.user_settings_path().is_some_and(|path| path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    fn tree(value: serde_json::Value) -> ConfigTree {
        ConfigTree::from_json(value).unwrap()
    }

    fn resolver(project: &TempDir, home: &TempDir) -> ConfigResolver {
        ConfigResolver::with_home_dir(project.path(), home.path())
    }

    #[test]
    fn load_returns_defaults_when_nothing_exists() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let resolver = resolver(&project, &home);

        assert!(!resolver.has_local_override());
        assert!(!resolver.has_user_settings());

        let resolution = resolver.load_detailed();
        assert_eq!(resolution.config, default_config());
        assert_eq!(resolution.origin, ConfigOrigin::Defaults);
        assert!(resolution.skipped.is_empty());
    }

    #[test]
    fn load_uses_local_override_verbatim() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        std::fs::write(
            project.path().join(LOCAL_OVERRIDE_FILE),
            r#"{"enabled": false, "modes": {"current": "strict"}}"#,
        )
        .unwrap();

        let resolver = resolver(&project, &home);
        let resolution = resolver.load_detailed();

        assert_eq!(
            resolution.config,
            tree(json!({ "enabled": false, "modes": { "current": "strict" } }))
        );
        assert!(matches!(resolution.origin, ConfigOrigin::LocalOverride(_)));
    }

    #[test]
    fn merge_with_defaults_applies_selected_preset_beneath_user() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let resolver = resolver(&project, &home);

        let merged = resolver.merge_with_defaults(&tree(json!({
            "modes": { "current": "strict" },
            "quality": { "minQualityScore": "C" }
        })));

        assert_eq!(merged.lookup("quality.minQualityScore"), Some(&ConfigValue::from("C")));
        assert_eq!(merged.lookup("quality.allowMocksInTests"), Some(&ConfigValue::from(false)));
        assert_eq!(merged.lookup("quality.strictMode"), Some(&ConfigValue::from(true)));
        assert_eq!(merged.lookup("performance.cacheTTL"), Some(&ConfigValue::from(300_000u64)));
    }

    #[test]
    fn merge_with_defaults_skips_unknown_mode() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let resolver = resolver(&project, &home);

        let merged = resolver.merge_with_defaults(&tree(json!({
            "modes": { "current": "paranoid" }
        })));

        let mut expected = default_config();
        expected.insert("modes", ConfigTree::new().with("current", "paranoid"));
        assert_eq!(merged, expected);
    }

    #[test]
    fn with_home_dir_starts_enabled() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let resolver = resolver(&project, &home);

        assert!(!resolver.is_disabled());
        assert!(resolver.handle_command("*hooks-disable"));
        assert!(resolver.is_disabled());
    }

    #[test]
    fn paths_are_built_from_root_and_home() {
        let resolver = ConfigResolver::with_home_dir("/work/project", "/home/dev");

        assert_eq!(
            resolver.local_override_path().as_str(),
            "/work/project/.bmad-hooks.json"
        );
        assert_eq!(
            resolver.user_settings_path().unwrap().as_str(),
            "/home/dev/.claude/settings.json"
        );
    }
}
