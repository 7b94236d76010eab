//! Tagged configuration values
//!
//! Configuration files are JSON, but the merge rules care about exactly
//! three shapes: leaves, ordered sequences, and nested mappings. Modelling
//! those shapes as an enum keeps the merge an exhaustive `match`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::Result;

/// A leaf value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

/// A node of a configuration tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ConfigValue {
    /// Boolean, number, string or null
    Scalar(Scalar),
    /// Ordered sequence; replaced wholesale on merge
    Sequence(Vec<ConfigValue>),
    /// Nested mapping; merged key by key
    Mapping(ConfigTree),
}

impl ConfigValue {
    pub fn as_mapping(&self) -> Option<&ConfigTree> {
        match self {
            Self::Mapping(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Scalar(Scalar::Number(n)) => n.as_u64(),
            _ => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<u64> for ConfigValue {
    fn from(n: u64) -> Self {
        Self::Scalar(Scalar::Number(n.into()))
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<ConfigTree> for ConfigValue {
    fn from(tree: ConfigTree) -> Self {
        Self::Mapping(tree)
    }
}

impl From<Value> for ConfigValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n)),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Mapping(ConfigTree::from(map)),
        }
    }
}

impl From<ConfigValue> for Value {
    fn from(value: ConfigValue) -> Self {
        match value {
            ConfigValue::Scalar(Scalar::Null) => Value::Null,
            ConfigValue::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            ConfigValue::Scalar(Scalar::Number(n)) => Value::Number(n),
            ConfigValue::Scalar(Scalar::String(s)) => Value::String(s),
            ConfigValue::Sequence(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            ConfigValue::Mapping(tree) => Value::from(tree),
        }
    }
}

/// A nested mapping from string keys to [`ConfigValue`]s
///
/// Keys are kept sorted so two structurally equal trees also serialize
/// identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigTree {
    entries: BTreeMap<String, ConfigValue>,
}

impl ConfigTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a JSON value, or `None` if it is not an object.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self::from(map)),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        Value::from(self.clone())
    }

    /// Render the tree as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value by dot-separated key path, e.g. `"quality.strictMode"`.
    pub fn lookup(&self, path: &str) -> Option<&ConfigValue> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            current = current.as_mapping()?.get(segment)?;
        }
        Some(current)
    }

    /// Dot-separated paths of every non-mapping value in the tree.
    ///
    /// Empty mappings contribute their own path so no key goes unlisted.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(self, "", &mut paths);
        paths
    }
}

fn collect_leaf_paths(tree: &ConfigTree, prefix: &str, out: &mut Vec<String>) {
    for (key, value) in tree.iter() {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            ConfigValue::Mapping(child) if !child.is_empty() => {
                collect_leaf_paths(child, &path, out)
            }
            _ => out.push(path),
        }
    }
}

impl From<Map<String, Value>> for ConfigTree {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(key, value)| (key, ConfigValue::from(value)))
                .collect(),
        }
    }
}

impl From<ConfigTree> for Value {
    fn from(tree: ConfigTree) -> Self {
        Value::Object(
            tree.entries
                .into_iter()
                .map(|(key, value)| (key, Value::from(value)))
                .collect(),
        )
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigTree {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_objects_become_mappings() {
        let tree = ConfigTree::from_json(json!({
            "enabled": true,
            "quality": { "minQualityScore": "A" },
            "tags": [1, "two", null]
        }))
        .unwrap();

        assert_eq!(tree.get("enabled"), Some(&ConfigValue::from(true)));
        assert!(tree.get("quality").unwrap().is_mapping());
        assert!(matches!(tree.get("tags"), Some(ConfigValue::Sequence(items)) if items.len() == 3));
    }

    #[test]
    fn non_objects_are_not_trees() {
        assert!(ConfigTree::from_json(json!(42)).is_none());
        assert!(ConfigTree::from_json(json!([1, 2])).is_none());
        assert!(ConfigTree::from_json(Value::Null).is_none());
    }

    #[test]
    fn lookup_walks_nested_mappings() {
        let tree = ConfigTree::from_json(json!({
            "modes": { "current": "strict" },
            "enabled": false
        }))
        .unwrap();

        assert_eq!(tree.lookup("modes.current").and_then(ConfigValue::as_str), Some("strict"));
        assert_eq!(tree.lookup("enabled").and_then(ConfigValue::as_bool), Some(false));
        assert!(tree.lookup("enabled.nested").is_none());
        assert!(tree.lookup("modes.missing").is_none());
        assert!(tree.lookup("").is_none());
    }

    #[test]
    fn leaf_paths_are_sorted_and_complete() {
        let tree = ConfigTree::from_json(json!({
            "b": { "y": 1, "x": { "deep": true } },
            "a": [],
            "c": {}
        }))
        .unwrap();

        assert_eq!(tree.leaf_paths(), vec!["a", "b.x.deep", "b.y", "c"]);
    }

    #[test]
    fn serializes_as_plain_json() {
        let tree = ConfigTree::new()
            .with("enabled", true)
            .with("performance", ConfigTree::new().with("cacheTTL", 300_000u64));

        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(value, json!({ "enabled": true, "performance": { "cacheTTL": 300000 } }));

        let back: ConfigTree = serde_json::from_value(value).unwrap();
        assert_eq!(back, tree);
    }
}
