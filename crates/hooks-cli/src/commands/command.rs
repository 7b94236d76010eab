//! Runtime command implementation

use colored::Colorize;
use hooks_core::switch::DISABLED_ENV_VAR;
use hooks_core::{DisableFlag, HookCommand, handle_command};

use crate::error::{CliError, Result};

/// Apply a runtime command and print the shell line that persists it.
///
/// The flag is seeded from this process's environment; the printed line is
/// meant for `eval` so the parent shell (and the hooks it spawns) pick up
/// the new state.
pub fn run_command(command: &str) -> Result<()> {
    let flag = DisableFlag::from_env();

    if !handle_command(&flag, command) {
        return Err(CliError::user(format!(
            "unrecognized hook command '{}' (expected {} or {})",
            command,
            HookCommand::Enable,
            HookCommand::Disable
        )));
    }

    match flag.env_marker() {
        Some((name, value)) => {
            eprintln!("{}", "Hooks disabled".yellow());
            println!("export {name}={value}");
        }
        None => {
            eprintln!("{}", "Hooks enabled".green());
            println!("unset {DISABLED_ENV_VAR}");
        }
    }

    Ok(())
}
