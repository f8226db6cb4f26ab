//! Framework definitions - loaded from the framework definition file(s)
//!
//! # Example YAML
//!
//! ```yaml
//! RandomForest:
//!   version: '0.24.2'
//!   setup_args: stable
//!   docker_image:
//!     tag: '0.24'
//!
//! TunedRandomForest:
//!   module: extensions.tuned_rf
//!   params:
//!     n_estimators: 2000
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::settings::OneOrMany;

/// Docker image coordinates for a framework.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockerImage {
    #[serde(deserialize_with = "lenient::scalar")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient::scalar")]
    pub image: Option<String>,
    /// Unquoted versions such as `tag: 0.24` are kept as written
    #[serde(deserialize_with = "lenient::scalar")]
    pub tag: Option<String>,
}

impl DockerImage {
    /// Fill every unset field from `defaults`, keeping the ones already set.
    pub fn fill_from(&mut self, defaults: &DockerImage) {
        if self.author.is_none() {
            self.author = defaults.author.clone();
        }
        if self.image.is_none() {
            self.image = defaults.image.clone();
        }
        if self.tag.is_none() {
            self.tag = defaults.tag.clone();
        }
    }
}

/// A framework as declared in a definition file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkEntry {
    /// Ignored; a framework is always named by its declaration key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::scalars"
    )]
    pub setup_args: Option<OneOrMany<String>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::scalars"
    )]
    pub setup_cmd: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<DockerImage>,
    /// Any other declared keys (version, project, params, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A validated framework with all defaults applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Framework {
    /// Name as declared in the definition file
    pub name: String,
    /// Module implementing the framework adapter
    pub module: String,
    pub setup_args: Option<OneOrMany<String>>,
    pub setup_cmd: Option<OneOrMany<String>>,
    pub docker_image: DockerImage,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Framework {
    /// Look up a declared key that has no dedicated field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// Accept any scalar where a string is expected.
mod lenient {
    use serde::de::{Deserialize, Deserializer, Error};
    use serde_json::Value;

    use crate::settings::OneOrMany;
    use crate::tree::kind;

    fn to_string<E: Error>(value: Value) -> Result<String, E> {
        match value {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(E::custom(format!("expected a scalar, found {}", kind(&other)))),
        }
    }

    pub fn scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => to_string(value).map(Some),
        }
    }

    pub fn scalars<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<OneOrMany<String>>, D::Error> {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(to_string)
                .collect::<Result<Vec<_>, _>>()
                .map(|values| Some(OneOrMany::Many(values))),
            Some(value) => to_string(value).map(|value| Some(OneOrMany::One(value))),
        }
    }
}
