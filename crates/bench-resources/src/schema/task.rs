//! Task definitions - loaded from benchmark definition files
//!
//! A benchmark file is a sequence of tasks:
//!
//! ```yaml
//! - name: kc2
//!   openml_task_id: 3913
//!   metric: auc
//!
//! - name: iris
//!   openml_task_id: 59
//!   metric: logloss
//!   folds: 3
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A task as declared in a benchmark file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openml_task_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_runtime_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cores: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_mem_size_mb: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec2_instance_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A validated task; every field holds a value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub openml_task_id: u64,
    pub metric: String,
    pub max_runtime_seconds: u64,
    pub cores: i32,
    pub folds: u32,
    pub max_mem_size_mb: i64,
    pub ec2_instance_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
