//! Error types for bench-resources

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] bench_fs::Error),

    #[error("Missing required configuration key `{key}`")]
    MissingConfig { key: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Configuration key `{key}` must hold a path or a list of paths")]
    InvalidPathValue { key: String },

    #[error("Unknown placeholder `{{{name}}}` in `{value}`")]
    UnknownPlaceholder { name: String, value: String },

    #[error("Unbalanced braces in `{value}`")]
    MalformedPlaceholder { value: String },

    #[error("Incorrect framework `{name}`: not listed in {definition_files}")]
    UnknownFramework {
        name: String,
        definition_files: String,
    },

    #[error("Incorrect benchmark name or path `{name}`, name not available in {definition_dirs}")]
    UnknownBenchmark {
        name: String,
        definition_dirs: String,
    },

    #[error("{missing:?} mandatory properties are missing in task definition {task}")]
    MissingTaskFields { missing: Vec<String>, task: String },

    #[error("Invalid definition at {path}: {message}")]
    InvalidDefinition { path: PathBuf, message: String },

    #[error("No adapter module `{module}` found in {searched}")]
    AdapterNotFound { module: String, searched: String },
}
