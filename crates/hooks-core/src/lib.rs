//! Configuration resolution for BMAD hooks
//!
//! This crate turns the handful of places a user can configure the hooks
//! into one resolved configuration tree, and owns the runtime switch that
//! lets an operator disable every hook without touching a file:
//!
//! - **Configuration tree**: [`ConfigTree`] / [`ConfigValue`], an explicit
//!   tagged JSON-like value model with a pure recursive [`merge`]
//! - **Resolution**: [`ConfigResolver`] consults the project override, then
//!   the user settings file, then the built-in defaults
//! - **Presets**: named partial trees (`strict`, `balanced`, `relaxed`)
//!   applied beneath explicit user values
//! - **Runtime switch**: [`DisableFlag`] toggled by `*hooks-disable` /
//!   `*hooks-enable`
//!
//! # Architecture
//!
//! ```text
//!                  hooks-cli
//!                      |
//!                 hooks-core
//!                      |
//!                  hooks-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use hooks_core::ConfigResolver;
//!
//! let resolver = ConfigResolver::new(std::env::current_dir().unwrap());
//! let config = resolver.load();
//! if !resolver.is_disabled() {
//!     println!("mode: {:?}", config.lookup("modes.current"));
//! }
//! ```

pub mod config;
pub mod error;
pub mod switch;

pub use config::{
    ConfigOrigin, ConfigResolver, ConfigSource, ConfigTree, ConfigValue, HookSettings, Presets,
    Resolution, Scalar, SkipReason, SkippedSource, default_config, merge,
};
pub use error::{Error, Result};
pub use switch::{DisableFlag, HookCommand, handle_command};
