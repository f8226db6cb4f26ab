//! Framework registry
//!
//! Maps framework names to their validated definitions. Every framework is
//! registered under its declared name and under the lowercased name, so
//! lookups are case-insensitive.

use std::collections::HashMap;
use std::sync::Arc;

use bench_fs::NormalizedPath;
use serde_json::Value;

use crate::schema::{DockerImage, Framework, FrameworkEntry};
use crate::settings::OneOrMany;
use crate::tree::ConfigTree;
use crate::validation::validate_framework;
use crate::{Error, Result};

/// Registry of validated framework definitions.
#[derive(Debug, Clone)]
pub struct FrameworkRegistry {
    frameworks: HashMap<String, Arc<Framework>>,
    definition_files: OneOrMany<NormalizedPath>,
}

impl FrameworkRegistry {
    /// Load and validate the frameworks declared in `definition_files`.
    ///
    /// Files are read in order; when a name is declared in several files
    /// the last declaration wins.
    pub fn load(
        definition_files: &OneOrMany<NormalizedPath>,
        image_defaults: &DockerImage,
    ) -> Result<Self> {
        let mut declared: HashMap<String, FrameworkEntry> = HashMap::new();
        for file in definition_files.iter() {
            tracing::info!(file = %file, "Loading frameworks definitions");
            for (name, value) in ConfigTree::load(file)?.into_map() {
                let entry = parse_entry(file, &name, value)?;
                if declared.insert(name.clone(), entry).is_some() {
                    tracing::warn!(framework = %name, file = %file, "Framework redefined, using the later definition");
                }
            }
        }

        let validated: Vec<Arc<Framework>> = declared
            .into_iter()
            .map(|(name, entry)| Arc::new(validate_framework(&name, entry, image_defaults)))
            .collect();
        Ok(Self::from_frameworks(validated, definition_files.clone()))
    }

    fn from_frameworks(
        validated: Vec<Arc<Framework>>,
        definition_files: OneOrMany<NormalizedPath>,
    ) -> Self {
        let mut frameworks: HashMap<String, Arc<Framework>> = validated
            .iter()
            .map(|framework| (framework.name.clone(), Arc::clone(framework)))
            .collect();
        // A name declared in lowercase keeps its own entry.
        for framework in &validated {
            frameworks
                .entry(framework.name.to_lowercase())
                .or_insert_with(|| Arc::clone(framework));
        }
        tracing::debug!(count = validated.len(), "Using framework definitions");

        Self {
            frameworks,
            definition_files,
        }
    }

    /// Look up a framework, ignoring case.
    pub fn get(&self, name: &str) -> Result<&Framework> {
        self.frameworks
            .get(&name.to_lowercase())
            .map(Arc::as_ref)
            .ok_or_else(|| Error::UnknownFramework {
                name: name.to_string(),
                definition_files: self.definition_files.to_string(),
            })
    }

    /// Distinct frameworks, sorted by declared name.
    pub fn frameworks(&self) -> Vec<&Framework> {
        let mut frameworks: Vec<&Framework> =
            self.frameworks.values().map(Arc::as_ref).collect();
        frameworks.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        frameworks.dedup_by(|a, b| std::ptr::eq(*a, *b));
        frameworks
    }

    /// Declared framework names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.frameworks()
            .into_iter()
            .map(|framework| framework.name.as_str())
            .collect()
    }

    /// Number of distinct frameworks.
    pub fn len(&self) -> usize {
        self.names().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }

    pub fn definition_files(&self) -> &OneOrMany<NormalizedPath> {
        &self.definition_files
    }
}

fn parse_entry(file: &NormalizedPath, name: &str, value: Value) -> Result<FrameworkEntry> {
    if value.is_null() {
        return Ok(FrameworkEntry::default());
    }
    serde_json::from_value(value).map_err(|e| Error::InvalidDefinition {
        path: file.to_native(),
        message: format!("framework `{name}`: {e}"),
    })
}
