//! Nested configuration tree with deep merge
//!
//! A [`ConfigTree`] is a string-keyed mapping whose values are scalars,
//! sequences or nested mappings. Trees loaded from several sources are
//! merged in order, later sources overriding earlier ones.

use std::fmt;

use bench_fs::{ConfigFormat, ConfigStore, NormalizedPath, io};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigTree {
    root: Map<String, Value>,
}

impl ConfigTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Wrap a document value; `null` (an empty document) becomes an empty tree.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            Value::Null => Ok(Self::new()),
            other => Err(Error::InvalidConfig {
                message: format!("expected a mapping at the top level, found {}", kind(&other)),
            }),
        }
    }

    /// Parse a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }
        let value: Value = ConfigStore::new().parse(content, ConfigFormat::Yaml)?;
        Self::from_value(value)
    }

    /// Load a configuration file; the format follows the file extension.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let value = load_document(path)?;
        Self::from_value(value).map_err(|e| Error::InvalidDefinition {
            path: path.to_native(),
            message: e.to_string(),
        })
    }

    /// Look up a value by dotted key, e.g. `benchmarks.defaults.folds`.
    pub fn get(&self, dotted: &str) -> Option<&Value> {
        let mut segments = dotted.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    pub fn get_str(&self, dotted: &str) -> Option<&str> {
        self.get(dotted).and_then(Value::as_str)
    }

    /// Insert or replace a top-level key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.root.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.root
    }

    /// Merge another tree into this one.
    ///
    /// Nested mappings are merged key by key; any other value from `other`
    /// replaces the value held here.
    pub fn merge(&mut self, other: &ConfigTree) {
        for (key, other_value) in &other.root {
            match self.root.get_mut(key) {
                Some(base_value) => deep_merge_value(base_value, other_value),
                None => {
                    self.root.insert(key.clone(), other_value.clone());
                }
            }
        }
    }

    /// Merge `trees` in order into a new tree.
    pub fn merged(trees: &[ConfigTree]) -> ConfigTree {
        let mut merged = ConfigTree::new();
        for tree in trees {
            merged.merge(tree);
        }
        merged
    }

    /// Deserialize the tree into a typed view.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.root.clone())).map_err(|e| Error::InvalidConfig {
            message: e.to_string(),
        })
    }
}

impl fmt::Display for ConfigTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yaml = serde_yaml::to_string(&self.root).map_err(|_| fmt::Error)?;
        f.write_str(&yaml)
    }
}

/// Read a whole document; an empty file reads as `null`.
pub(crate) fn load_document(path: &NormalizedPath) -> Result<Value> {
    let format = ConfigFormat::from_path(path)?;
    let content = io::read_text(path)?;
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(ConfigStore::new().parse_at(&content, format, path.to_native())?)
}

/// Deep merge two JSON values
///
/// If both values are objects, merge them recursively with `other` taking precedence.
/// Otherwise, `other` replaces `base`.
fn deep_merge_value(base: &mut Value, other: &Value) {
    match (base, other) {
        (Value::Object(base_map), Value::Object(other_map)) => {
            for (key, other_val) in other_map {
                if let Some(base_val) = base_map.get_mut(key) {
                    deep_merge_value(base_val, other_val);
                } else {
                    base_map.insert(key.clone(), other_val.clone());
                }
            }
        }
        (base, other) => {
            *base = other.clone();
        }
    }
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
