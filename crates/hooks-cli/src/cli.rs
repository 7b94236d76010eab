//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// BMAD hooks - inspect the resolved hook configuration and toggle hooks
#[derive(Parser, Debug)]
#[command(name = "bmad-hooks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root containing .bmad-hooks.json (defaults to the current directory)
    #[arg(long, global = true, env = "BMAD_HOOKS_ROOT")]
    pub root: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the resolved configuration as JSON
    Show {
        /// Also report where the configuration came from and which sources were skipped
        #[arg(long)]
        explain: bool,
    },

    /// List the built-in mode presets
    Presets,

    /// Apply a runtime command (*hooks-enable or *hooks-disable)
    ///
    /// Prints the shell line that applies the new state, e.g.:
    ///   eval "$(bmad-hooks command '*hooks-disable')"
    Command {
        /// The literal command string
        command: String,
    },

    /// Show whether hooks are active and which ones are enabled
    Status,
}
