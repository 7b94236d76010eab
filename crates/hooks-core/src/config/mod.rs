//! Configuration model and resolution
//!
//! # Sources
//!
//! Configuration is taken from the first usable source:
//!
//! 1. **Project override** - `.bmad-hooks.json` in the project root, used as-is
//! 2. **User settings** - the `bmad` section of `~/.claude/settings.json`,
//!    merged over the selected preset and the defaults
//! 3. **Defaults** - see [`default_config`]
//!
//! # Presets
//!
//! `modes.current` selects one of the [`Presets`]. A preset supplies a
//! second baseline between the defaults and the user's explicit values:
//! user > preset > default.

mod defaults;
mod deep_merge;
mod resolver;
mod settings;
mod source;
mod value;

pub use defaults::{DEFAULT_MODE, HOOK_NAMES, Presets, default_config};
pub use deep_merge::merge;
pub use resolver::{
    ConfigOrigin, ConfigResolver, LOCAL_OVERRIDE_FILE, Resolution, SETTINGS_SECTION,
    SkippedSource, USER_SETTINGS_FILE,
};
pub use settings::{HookSettings, ModeSettings, PerformanceSettings, QualitySettings};
pub use source::{ConfigSource, SkipReason};
pub use value::{ConfigTree, ConfigValue, Scalar};
