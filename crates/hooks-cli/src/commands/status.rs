//! Status command implementation

use std::path::Path;

use colored::Colorize;
use hooks_core::{ConfigResolver, HookSettings};

use super::describe_origin;
use crate::error::Result;

/// Run the status command
pub fn run_status(root: &Path) -> Result<()> {
    let resolver = ConfigResolver::new(root);
    let resolution = resolver.load_detailed();
    let settings = HookSettings::from_tree(&resolution.config)?;

    println!("{}", "Hook Status".bold());
    println!();

    let runtime = if resolver.is_disabled() {
        "disabled (*hooks-disable)".red()
    } else {
        "active".green()
    };
    println!("{}:  {}", "Runtime".dimmed(), runtime);
    println!("{}:   {}", "Source".dimmed(), describe_origin(&resolution.origin));
    println!("{}:     {}", "Mode".dimmed(), settings.modes.current.cyan());
    println!(
        "{}:  {} (min score {})",
        "Quality".dimmed(),
        if settings.quality.strict_mode {
            "strict"
        } else {
            "lenient"
        },
        settings.quality.min_quality_score
    );
    println!();

    println!("{}:", "Hooks".bold());
    for name in settings.hooks.keys() {
        let state = if resolver.is_disabled() || !settings.is_hook_enabled(name) {
            "off".red()
        } else {
            "on".green()
        };
        println!("  {} {}", name.cyan(), state);
    }

    for skipped in &resolution.skipped {
        println!();
        println!(
            "{} {} was ignored: {}",
            "warning:".yellow().bold(),
            skipped.path,
            skipped.reason
        );
    }

    Ok(())
}
