//! Command implementations for hooks-cli

pub mod command;
pub mod presets;
pub mod show;
pub mod status;

pub use command::run_command;
pub use presets::run_presets;
pub use show::run_show;
pub use status::run_status;

use hooks_core::ConfigOrigin;

/// Human-readable description of where a configuration came from
pub(crate) fn describe_origin(origin: &ConfigOrigin) -> String {
    match origin {
        ConfigOrigin::LocalOverride(path) => format!("project override ({path})"),
        ConfigOrigin::UserSettings(path) => format!("user settings ({path})"),
        ConfigOrigin::Defaults => "built-in defaults".to_string(),
    }
}
