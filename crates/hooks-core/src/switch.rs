//! Runtime switch for disabling every hook
//!
//! The switch lives outside the configuration tree: an operator flips it
//! with a literal command and every component holding a [`DisableFlag`]
//! handle sees the change. The flag can be seeded from, and exported to,
//! the `BMAD_HOOKS_DISABLED` environment marker so hook subprocesses
//! observe the same state.

use std::fmt;
use std::process::Command;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable carrying the disabled marker
pub const DISABLED_ENV_VAR: &str = "BMAD_HOOKS_DISABLED";

/// The only marker value that means "disabled"
pub const DISABLED_MARKER: &str = "true";

/// Command that clears the disabled marker
pub const ENABLE_COMMAND: &str = "*hooks-enable";

/// Command that sets the disabled marker
pub const DISABLE_COMMAND: &str = "*hooks-disable";

/// A recognized runtime command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookCommand {
    Enable,
    Disable,
}

impl HookCommand {
    /// Parse a command string. Only exact matches are recognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            ENABLE_COMMAND => Some(Self::Enable),
            DISABLE_COMMAND => Some(Self::Disable),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enable => ENABLE_COMMAND,
            Self::Disable => DISABLE_COMMAND,
        }
    }

    /// Apply this command to a flag.
    pub fn apply(self, flag: &DisableFlag) {
        match self {
            Self::Enable => flag.clear(),
            Self::Disable => flag.set(),
        }
    }
}

impl fmt::Display for HookCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared handle to the runtime disabled state
///
/// Clones share the same underlying state. Concurrent toggles are
/// last-writer-wins.
#[derive(Debug, Clone, Default)]
pub struct DisableFlag {
    disabled: Arc<AtomicBool>,
}

impl DisableFlag {
    /// Create a cleared flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flag from a marker value; set only for exactly `"true"`.
    pub fn from_marker(marker: Option<&str>) -> Self {
        let flag = Self::new();
        if marker == Some(DISABLED_MARKER) {
            flag.set();
        }
        flag
    }

    /// Create a flag seeded from the `BMAD_HOOKS_DISABLED` environment variable.
    pub fn from_env() -> Self {
        Self::from_marker(std::env::var(DISABLED_ENV_VAR).ok().as_deref())
    }

    pub fn set(&self) {
        self.disabled.store(true, Ordering::SeqCst);
    }

    pub fn clear(&self) {
        self.disabled.store(false, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }

    /// The environment entry describing the current state, or `None` when
    /// the marker should be absent.
    pub fn env_marker(&self) -> Option<(&'static str, &'static str)> {
        self.is_set().then_some((DISABLED_ENV_VAR, DISABLED_MARKER))
    }

    /// Propagate the current state to a child process.
    ///
    /// Sets the marker when disabled and removes any inherited marker
    /// otherwise.
    pub fn apply_to_command(&self, command: &mut Command) {
        match self.env_marker() {
            Some((name, value)) => {
                command.env(name, value);
            }
            None => {
                command.env_remove(DISABLED_ENV_VAR);
            }
        }
    }
}

/// Handle a runtime command against `flag`.
///
/// Returns `true` if the command was recognized; unrecognized commands leave
/// the flag untouched.
pub fn handle_command(flag: &DisableFlag, command: &str) -> bool {
    match HookCommand::parse(command) {
        Some(cmd) => {
            cmd.apply(flag);
            tracing::info!(command = %cmd, disabled = flag.is_set(), "Applied hook command");
            true
        }
        None => {
            tracing::debug!(command, "Ignoring unrecognized hook command");
            false
        }
    }
}
