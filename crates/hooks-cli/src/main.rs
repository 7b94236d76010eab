//! BMAD hooks CLI
//!
//! Inspects the resolved hook configuration and applies runtime commands.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    }

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Some(cmd) => execute_command(cmd, root),
        None => {
            println!("{} BMAD hooks configuration", "bmad-hooks".green().bold());
            println!();
            println!("Run {} for available commands.", "bmad-hooks --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, root: PathBuf) -> Result<()> {
    match cmd {
        Commands::Show { explain } => commands::run_show(&root, explain),
        Commands::Presets => commands::run_presets(&root),
        Commands::Command { command } => commands::run_command(&command),
        Commands::Status => commands::run_status(&root),
    }
}
