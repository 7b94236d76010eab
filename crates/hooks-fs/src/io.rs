//! Read helpers for configuration files

use std::fs;

use serde_json::Value;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read and parse a JSON document.
///
/// Returns `Ok(None)` when the file does not exist. Any other I/O failure
/// and any parse failure is reported as an error so callers can tell a
/// missing file from a broken one.
pub fn read_json(path: &NormalizedPath) -> Result<Option<Value>> {
    let content = match read_text(path) {
        Ok(content) => content,
        Err(e) if e.is_not_found() => {
            tracing::trace!(%path, "JSON file not found");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| Error::JsonParse {
            path: path.to_native(),
            message: e.to_string(),
        })
}
