//! Benchmark definition resolution
//!
//! A benchmark is requested either by name, matched against
//! `{name}.yaml` in the configured definition directories, or by the path
//! of a benchmark file.

use bench_fs::NormalizedPath;
use serde::Serialize;
use serde_json::Value;

use crate::schema::{Task, TaskEntry};
use crate::settings::{OneOrMany, Settings};
use crate::tree::{kind, load_document};
use crate::validation::validate_task;
use crate::{Error, Result};

/// A resolved benchmark: its validated tasks, name and source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkDefinition {
    pub tasks: Vec<Task>,
    pub name: String,
    pub file: NormalizedPath,
}

/// Find the file for benchmark `name` and the benchmark's display name.
///
/// The first definition directory holding `{name}.yaml` wins. Otherwise
/// `name` is taken as a file path and the benchmark is named after its
/// file stem.
pub fn locate(
    name: &str,
    definition_dirs: &OneOrMany<NormalizedPath>,
) -> Result<(String, NormalizedPath)> {
    let file_name = format!("{name}.yaml");
    if let Some(file) = definition_dirs
        .iter()
        .map(|dir| dir.join(&file_name))
        .find(NormalizedPath::is_file)
    {
        return Ok((name.to_string(), file));
    }

    // Named after the path as given, not the symlink target.
    let benchmark_name = NormalizedPath::new(name)
        .file_stem()
        .unwrap_or(name)
        .to_string();
    let file = NormalizedPath::absolute(name)?;
    if !file.is_file() {
        return Err(Error::UnknownBenchmark {
            name: name.to_string(),
            definition_dirs: definition_dirs.to_string(),
        });
    }
    Ok((benchmark_name, file))
}

/// Locate, load and validate benchmark `name`.
pub fn load(name: &str, settings: &Settings) -> Result<BenchmarkDefinition> {
    let (benchmark_name, file) = locate(name, &settings.benchmarks.definition_dir)?;

    tracing::info!(file = %file, "Loading benchmark definitions");
    let tasks = load_tasks(&file)?
        .into_iter()
        .map(|entry| {
            validate_task(
                entry,
                &settings.benchmarks.defaults,
                &settings.aws.ec2.instance_type,
            )
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(benchmark = %benchmark_name, tasks = tasks.len(), "Using benchmark definition");

    Ok(BenchmarkDefinition {
        tasks,
        name: benchmark_name,
        file,
    })
}

fn load_tasks(file: &NormalizedPath) -> Result<Vec<TaskEntry>> {
    let items = match load_document(file)? {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => {
            return Err(Error::InvalidDefinition {
                path: file.to_native(),
                message: format!("expected a sequence of tasks, found {}", kind(&other)),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| Error::InvalidDefinition {
                path: file.to_native(),
                message: format!("task #{}: {e}", index + 1),
            })
        })
        .collect()
}
