//! Resources - the normalized run configuration and the definitions it points to
//!
//! Framework definitions are loaded on first access and kept for the
//! lifetime of the [`Resources`]. Benchmark definitions are cached per
//! requested name.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use bench_fs::{NormalizedPath, io};

use crate::adapter::AdapterLoader;
use crate::benchmarks::{self, BenchmarkDefinition};
use crate::frameworks::FrameworkRegistry;
use crate::normalize::{Placeholders, normalize};
use crate::schema::Framework;
use crate::settings::Settings;
use crate::tree::ConfigTree;
use crate::{Error, Result};

/// Top-level directories every configuration must name, with the
/// placeholder each one provides.
const ROOT_DIRS: [(&str, &str); 3] = [
    ("input_dir", "input"),
    ("output_dir", "output"),
    ("user_dir", "user"),
];

/// Run output subdirectories created under `output_dir`.
const OUTPUT_SUBDIRS: [(&str, &str); 3] = [
    ("predictions_dir", "predictions"),
    ("scores_dir", "scores"),
    ("logs_dir", "logs"),
];

#[derive(Debug)]
pub struct Resources {
    config: ConfigTree,
    settings: Settings,
    frameworks: OnceLock<FrameworkRegistry>,
    benchmarks: Mutex<HashMap<String, Arc<BenchmarkDefinition>>>,
}

impl Resources {
    /// Normalize `config` and prepare the output directories.
    ///
    /// `input_dir`, `output_dir` and `user_dir` must be present; their raw
    /// values are available as `{input}`, `{output}` and `{user}` in every
    /// path value. Nothing is created on disk unless the whole configuration
    /// is valid.
    pub fn new(config: &ConfigTree) -> Result<Self> {
        let mut placeholders = Placeholders::new();
        for (key, placeholder) in ROOT_DIRS {
            let value = config.get_str(key).ok_or_else(|| Error::MissingConfig {
                key: key.to_string(),
            })?;
            placeholders.insert(placeholder.to_string(), value.to_string());
        }

        let mut normalized = normalize(config, Some(&placeholders))?;
        let output_dir = normalized
            .get_str("output_dir")
            .map(NormalizedPath::new)
            .ok_or_else(|| Error::MissingConfig {
                key: "output_dir".to_string(),
            })?;
        for (key, subdir) in OUTPUT_SUBDIRS {
            normalized.insert(key, output_dir.join(subdir).to_native_string());
        }

        let settings: Settings = normalized.deserialize()?;
        for dir in [
            &settings.predictions_dir,
            &settings.scores_dir,
            &settings.logs_dir,
        ] {
            io::ensure_dir(dir)?;
        }
        tracing::debug!(config = %normalized, "Using config");

        Ok(Self {
            config: normalized,
            settings,
            frameworks: OnceLock::new(),
            benchmarks: Mutex::new(HashMap::new()),
        })
    }

    /// Merge `configs` in order, then build as [`Resources::new`].
    pub fn from_configs(configs: &[ConfigTree]) -> Result<Self> {
        Self::new(&ConfigTree::merged(configs))
    }

    /// Load and merge configuration files in order.
    pub fn from_files(files: &[NormalizedPath]) -> Result<Self> {
        let configs = files
            .iter()
            .map(ConfigTree::load)
            .collect::<Result<Vec<_>>>()?;
        Self::from_configs(&configs)
    }

    /// The normalized configuration.
    pub fn config(&self) -> &ConfigTree {
        &self.config
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Directories searched for framework adapter modules, user first.
    pub fn module_search_dirs(&self) -> Vec<NormalizedPath> {
        vec![self.settings.user_dir.clone(), self.settings.input_dir.clone()]
    }

    /// The framework registry, loaded on first call.
    ///
    /// A failed load is returned as an error and retried on the next call.
    pub fn frameworks(&self) -> Result<&FrameworkRegistry> {
        if let Some(registry) = self.frameworks.get() {
            return Ok(registry);
        }
        let registry = FrameworkRegistry::load(
            &self.settings.frameworks.definition_file,
            &self.settings.docker.image_defaults,
        )?;
        Ok(self.frameworks.get_or_init(|| registry))
    }

    /// Resolve a framework by name, ignoring case.
    ///
    /// Returns the definition together with its declared name.
    pub fn framework_definition(&self, name: &str) -> Result<(&Framework, &str)> {
        let framework = self.frameworks()?.get(name)?;
        tracing::debug!(framework = ?framework, "Using framework definition");
        Ok((framework, framework.name.as_str()))
    }

    /// Resolve a benchmark by name or file path.
    ///
    /// Repeat requests for the same string return the same definition.
    pub fn benchmark_definition(&self, name: &str) -> Result<Arc<BenchmarkDefinition>> {
        if let Some(cached) = self.cached_benchmark(name) {
            return Ok(cached);
        }

        let definition = Arc::new(benchmarks::load(name, &self.settings)?);
        let mut cache = self
            .benchmarks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(
            cache.entry(name.to_string()).or_insert(definition),
        ))
    }

    fn cached_benchmark(&self, name: &str) -> Option<Arc<BenchmarkDefinition>> {
        self.benchmarks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Resolve framework `name` and hand it to `loader` with the module
    /// search directories.
    pub fn load_adapter<L: AdapterLoader>(&self, loader: &L, name: &str) -> Result<L::Handle> {
        let (framework, _) = self.framework_definition(name)?;
        loader.load(framework, &self.module_search_dirs())
    }
}
