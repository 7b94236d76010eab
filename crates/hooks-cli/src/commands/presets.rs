//! Presets command implementation

use std::path::Path;

use colored::Colorize;
use hooks_core::{ConfigResolver, ConfigValue};

use crate::error::Result;

/// List every preset and the values it sets, marking the active mode.
pub fn run_presets(root: &Path) -> Result<()> {
    let resolver = ConfigResolver::new(root);
    let config = resolver.load();
    let current = config
        .lookup("modes.current")
        .and_then(ConfigValue::as_str)
        .unwrap_or_default()
        .to_string();

    println!("{}", "Presets".bold());
    println!();

    for (name, preset) in resolver.presets().iter() {
        let marker = if name == current {
            "*".green()
        } else {
            " ".normal()
        };
        println!("{} {}", marker, name.cyan());
        for path in preset.leaf_paths() {
            if let Some(value) = preset.lookup(&path) {
                println!("    {} = {}", path.dimmed(), serde_json::Value::from(value.clone()));
            }
        }
    }

    Ok(())
}
