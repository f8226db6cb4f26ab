//! Validation and defaulting of framework and task definitions

use std::fmt;

use crate::schema::{DockerImage, Framework, FrameworkEntry, Task, TaskEntry};
use crate::settings::TaskDefaults;
use crate::{Error, Result};

/// Namespace of the built-in framework adapter modules.
pub const FRAMEWORK_MODULE_PREFIX: &str = "automl.frameworks";

/// Task fields without a default, in the order they are checked.
pub const REQUIRED_TASK_FIELDS: [&str; 3] = ["name", "openml_task_id", "metric"];

/// Resolve a declared framework.
///
/// The module defaults to `automl.frameworks.<name>`. A missing
/// `docker_image` takes `image_defaults` wholesale; a partial one only has
/// its unset fields filled.
pub fn validate_framework(
    name: &str,
    entry: FrameworkEntry,
    image_defaults: &DockerImage,
) -> Framework {
    let module = entry
        .module
        .unwrap_or_else(|| format!("{FRAMEWORK_MODULE_PREFIX}.{name}"));

    let docker_image = match entry.docker_image {
        Some(mut image) => {
            image.fill_from(image_defaults);
            image
        }
        None => image_defaults.clone(),
    };

    Framework {
        name: name.to_string(),
        module,
        setup_args: entry.setup_args,
        setup_cmd: entry.setup_cmd,
        docker_image,
        extra: entry.extra,
    }
}

/// Resolve a declared task.
///
/// Fails with every missing required field at once. Optional fields fall
/// back to the benchmark `defaults`, and `ec2_instance_type` to
/// `instance_type`, each independently of the others.
pub fn validate_task(entry: TaskEntry, defaults: &TaskDefaults, instance_type: &str) -> Result<Task> {
    let (name, openml_task_id, metric) = match (&entry.name, entry.openml_task_id, &entry.metric) {
        (Some(name), Some(openml_task_id), Some(metric)) => {
            (name.clone(), openml_task_id, metric.clone())
        }
        (name, openml_task_id, metric) => {
            let absent = [name.is_none(), openml_task_id.is_none(), metric.is_none()];
            let missing = REQUIRED_TASK_FIELDS
                .iter()
                .zip(absent)
                .filter(|(_, absent)| *absent)
                .map(|(field, _)| field.to_string())
                .collect();
            return Err(Error::MissingTaskFields {
                missing,
                task: task_payload(&entry),
            });
        }
    };

    let max_runtime_seconds = or_default(
        entry.max_runtime_seconds,
        "max_runtime_seconds",
        &name,
        &defaults.max_runtime_seconds,
    );
    let cores = or_default(entry.cores, "cores", &name, &defaults.cores);
    let folds = or_default(entry.folds, "folds", &name, &defaults.folds);
    let max_mem_size_mb = or_default(
        entry.max_mem_size_mb,
        "max_mem_size_mb",
        &name,
        &defaults.max_mem_size_mb,
    );
    let ec2_instance_type = or_default(
        entry.ec2_instance_type,
        "ec2_instance_type",
        &name,
        &instance_type.to_string(),
    );

    Ok(Task {
        name,
        openml_task_id,
        metric,
        max_runtime_seconds,
        cores,
        folds,
        max_mem_size_mb,
        ec2_instance_type,
        extra: entry.extra,
    })
}

fn or_default<T: Clone + fmt::Debug>(value: Option<T>, field: &str, task: &str, default: &T) -> T {
    value.unwrap_or_else(|| {
        tracing::debug!(field, task, default = ?default, "Config not set for task, using default");
        default.clone()
    })
}

fn task_payload(entry: &TaskEntry) -> String {
    serde_json::to_string(entry).unwrap_or_else(|_| format!("{entry:?}"))
}
