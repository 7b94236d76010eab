//! Filesystem access for BMAD hook configuration
//!
//! Provides platform-neutral path handling and read helpers that tell a
//! missing file apart from an unreadable or malformed one.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use io::{read_json, read_text};
pub use path::NormalizedPath;
