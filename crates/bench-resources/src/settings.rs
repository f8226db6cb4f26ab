//! Typed view of the normalized run configuration
//!
//! Only the keys the harness consumes are modelled here; everything else
//! stays reachable through [`ConfigTree`](crate::ConfigTree).

use std::fmt;

use bench_fs::NormalizedPath;
use serde::{Deserialize, Serialize};

use crate::schema::DockerImage;

/// A configuration value that may be given once or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::One(value) => std::slice::from_ref(value).iter(),
            Self::Many(values) => values.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> OneOrMany<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

impl<T: fmt::Display> fmt::Display for OneOrMany<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(value) => write!(f, "{value}"),
            Self::Many(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Run settings consumed by the harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub input_dir: NormalizedPath,
    pub output_dir: NormalizedPath,
    pub user_dir: NormalizedPath,
    pub predictions_dir: NormalizedPath,
    pub scores_dir: NormalizedPath,
    pub logs_dir: NormalizedPath,
    pub frameworks: FrameworksSettings,
    pub benchmarks: BenchmarksSettings,
    pub aws: AwsSettings,
    pub docker: DockerSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworksSettings {
    /// One or more framework definition files, loaded in order
    pub definition_file: OneOrMany<NormalizedPath>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarksSettings {
    /// Directories searched in order for `{name}.yaml`
    pub definition_dir: OneOrMany<NormalizedPath>,
    pub defaults: TaskDefaults,
}

/// Benchmark-wide defaults for optional task fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefaults {
    pub max_runtime_seconds: u64,
    /// `-1` lets the framework use every available core
    pub cores: i32,
    pub folds: u32,
    pub max_mem_size_mb: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwsSettings {
    pub ec2: Ec2Settings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ec2Settings {
    pub instance_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockerSettings {
    pub image_defaults: DockerImage,
}
