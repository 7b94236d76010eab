//! Outcomes of reading a configuration source
//!
//! A source is either found, absent, or present but unusable. The resolver
//! keeps these apart so callers and tests can see why a source was skipped,
//! even though resolution treats "invalid" exactly like "absent".

use std::fmt;

use hooks_fs::NormalizedPath;
use serde_json::Value;

use super::value::{ConfigTree, ConfigValue};

/// Why a source that exists was not used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file exists but could not be read
    Unreadable(String),
    /// The file is not valid JSON
    Malformed(String),
    /// The document (or section) is valid JSON but not an object
    NotAnObject,
    /// The expected section key is missing
    MissingSection(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(message) => write!(f, "unreadable: {message}"),
            Self::Malformed(message) => write!(f, "malformed JSON: {message}"),
            Self::NotAnObject => write!(f, "not a JSON object"),
            Self::MissingSection(key) => write!(f, "no \"{key}\" section"),
        }
    }
}

/// Result of consulting one configuration source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Found(ConfigTree),
    Absent,
    Invalid(SkipReason),
}

impl ConfigSource {
    /// Read a JSON file whose top level must be an object.
    pub fn read(path: &NormalizedPath) -> Self {
        match hooks_fs::read_json(path) {
            Ok(Some(value)) => Self::from_json(value),
            Ok(None) => Self::Absent,
            Err(hooks_fs::Error::JsonParse { message, .. }) => {
                Self::Invalid(SkipReason::Malformed(message))
            }
            Err(e) => Self::Invalid(SkipReason::Unreadable(e.to_string())),
        }
    }

    /// Classify an already-parsed JSON document.
    pub fn from_json(value: Value) -> Self {
        match ConfigTree::from_json(value) {
            Some(tree) => Self::Found(tree),
            None => Self::Invalid(SkipReason::NotAnObject),
        }
    }

    /// Narrow a found tree to the mapping stored under `key`.
    ///
    /// Absent and invalid sources pass through unchanged.
    pub fn section(self, key: &str) -> Self {
        match self {
            Self::Found(mut tree) => match tree.remove(key) {
                Some(ConfigValue::Mapping(section)) => Self::Found(section),
                Some(_) => Self::Invalid(SkipReason::NotAnObject),
                None => Self::Invalid(SkipReason::MissingSection(key.to_string())),
            },
            other => other,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Collapse to the tree, treating invalid sources as absent.
    pub fn into_tree(self) -> Option<ConfigTree> {
        match self {
            Self::Found(tree) => Some(tree),
            Self::Absent | Self::Invalid(_) => None,
        }
    }
}
