//! Show command implementation

use std::path::Path;

use colored::Colorize;
use hooks_core::ConfigResolver;

use super::describe_origin;
use crate::error::Result;

/// Print the resolved configuration as pretty JSON on stdout.
///
/// With `explain`, the origin and any skipped sources go to stderr so the
/// JSON on stdout stays machine-readable.
pub fn run_show(root: &Path, explain: bool) -> Result<()> {
    let resolution = ConfigResolver::new(root).load_detailed();

    if explain {
        eprintln!("{}: {}", "Source".dimmed(), describe_origin(&resolution.origin));
        for skipped in &resolution.skipped {
            eprintln!(
                "{}: {} ({})",
                "Skipped".yellow(),
                skipped.path,
                skipped.reason
            );
        }
    }

    println!("{}", resolution.config.to_json_pretty()?);
    Ok(())
}
