//! Path normalization over a configuration tree
//!
//! Every value held by a key named like `*_dir`, `*_file` or `*_cmd` (or the
//! plural forms) is rewritten to an absolute, canonical path after optional
//! `{name}` placeholder substitution.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use bench_fs::NormalizedPath;
use regex::Regex;
use serde_json::{Map, Value};

use crate::tree::ConfigTree;
use crate::{Error, Result};

/// Placeholder name to replacement, e.g. `output` -> `/data/output`.
pub type Placeholders = BTreeMap<String, String>;

static PATH_KEY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(dir|file|cmd)s?$").unwrap());

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}|\{([^{}]*)\}").unwrap());

/// Whether `key` names a path (`input_dir`, `definition_files`, `setup_cmd`, ...).
pub fn is_path_key(key: &str) -> bool {
    PATH_KEY.is_match(key)
}

/// Produce a normalized copy of `tree`.
///
/// Nested mappings are normalized recursively; only a key's own name decides
/// whether its value is a path. Values under other keys are copied as-is.
///
/// Normalizing the result again without placeholders leaves it unchanged.
/// With placeholders it is only stable when no value used the `{{`/`}}`
/// escapes: the literal braces they produce read as placeholders on the
/// second pass.
pub fn normalize(tree: &ConfigTree, placeholders: Option<&Placeholders>) -> Result<ConfigTree> {
    normalize_map(tree.as_map(), "", placeholders).map(ConfigTree::from_map)
}

fn normalize_map(
    map: &Map<String, Value>,
    prefix: &str,
    placeholders: Option<&Placeholders>,
) -> Result<Map<String, Value>> {
    let mut normalized = Map::with_capacity(map.len());
    for (key, value) in map {
        let dotted = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        normalized.insert(key.clone(), normalize_value(key, &dotted, value, placeholders)?);
    }
    Ok(normalized)
}

fn normalize_value(
    key: &str,
    dotted: &str,
    value: &Value,
    placeholders: Option<&Placeholders>,
) -> Result<Value> {
    match value {
        Value::Object(map) => Ok(Value::Object(normalize_map(map, dotted, placeholders)?)),
        _ if !is_path_key(key) => Ok(value.clone()),
        Value::String(path) => normalize_path(path, placeholders).map(Value::String),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(path) => normalize_path(path, placeholders).map(Value::String),
                _ => Err(Error::InvalidPathValue {
                    key: dotted.to_string(),
                }),
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Value::Null => Ok(Value::Null),
        _ => Err(Error::InvalidPathValue {
            key: dotted.to_string(),
        }),
    }
}

/// Substitute placeholders in `path`, then make it absolute and canonical.
pub fn normalize_path(path: &str, placeholders: Option<&Placeholders>) -> Result<String> {
    let path = match placeholders {
        Some(placeholders) => substitute(path, placeholders)?,
        None => path.to_string(),
    };
    Ok(NormalizedPath::absolute(&path)?.to_native_string())
}

/// Replace `{name}` tokens in `template`.
///
/// `{{` and `}}` stand for literal braces. An unknown name or a stray brace
/// is an error.
pub fn substitute(template: &str, placeholders: &Placeholders) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(token) = caps.get(0) else { continue };
        push_literal(&mut out, &template[last..token.start()], template)?;
        match caps.get(1) {
            Some(name) => {
                let value =
                    placeholders
                        .get(name.as_str())
                        .ok_or_else(|| Error::UnknownPlaceholder {
                            name: name.as_str().to_string(),
                            value: template.to_string(),
                        })?;
                out.push_str(value);
            }
            None => out.push_str(&token.as_str()[..1]),
        }
        last = token.end();
    }
    push_literal(&mut out, &template[last..], template)?;
    Ok(out)
}

fn push_literal(out: &mut String, literal: &str, template: &str) -> Result<()> {
    if literal.contains(['{', '}']) {
        return Err(Error::MalformedPlaceholder {
            value: template.to_string(),
        });
    }
    out.push_str(literal);
    Ok(())
}
