//! [`TestEnv`] builder for configuration resolution scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// A temporary project directory and a temporary home directory.
///
/// Keeps tests away from the real `~/.claude/settings.json`.
///
/// # Example
///
/// ```rust,no_run
/// use hooks_test_utils::TestEnv;
/// use serde_json::json;
///
/// let env = TestEnv::new();
/// env.write_user_settings(&json!({ "bmad": { "enabled": false } }));
/// env.assert_file_exists(env.home(), ".claude/settings.json");
/// ```
pub struct TestEnv {
    project: TempDir,
    home: TempDir,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    /// Create empty project and home directories.
    pub fn new() -> Self {
        Self {
            project: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
        }
    }

    /// Return the project root.
    pub fn project(&self) -> &Path {
        self.project.path()
    }

    /// Return the home directory.
    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Path of the project override file.
    pub fn local_override_path(&self) -> PathBuf {
        self.project().join(".bmad-hooks.json")
    }

    /// Path of the user settings file.
    pub fn user_settings_path(&self) -> PathBuf {
        self.home().join(".claude").join("settings.json")
    }

    /// Write `.bmad-hooks.json` in the project root.
    pub fn write_local_override(&self, value: &Value) {
        self.write_local_override_raw(&serde_json::to_string_pretty(value).unwrap());
    }

    /// Write arbitrary (possibly malformed) content to `.bmad-hooks.json`.
    pub fn write_local_override_raw(&self, content: &str) {
        fs::write(self.local_override_path(), content).unwrap();
    }

    /// Write `~/.claude/settings.json` under the temporary home.
    pub fn write_user_settings(&self, value: &Value) {
        self.write_user_settings_raw(&serde_json::to_string_pretty(value).unwrap());
    }

    /// Write arbitrary (possibly malformed) content to the user settings file.
    pub fn write_user_settings_raw(&self, content: &str) {
        let path = self.user_settings_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Assert that a file exists relative to `base`.
    pub fn assert_file_exists(&self, base: &Path, relative: &str) {
        let path = base.join(relative);
        assert!(path.is_file(), "Expected file to exist: {}", path.display());
    }
}
