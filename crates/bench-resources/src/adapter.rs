//! Framework adapter lookup
//!
//! A framework's `module` is a dotted name (`extensions.tuned_rf`) resolved
//! against the module search directories of [`Resources`](crate::Resources).
//! Loading is delegated to an [`AdapterLoader`]; [`ModuleLocator`] only finds
//! where the adapter lives.

use bench_fs::NormalizedPath;
use serde::Serialize;

use crate::schema::Framework;
use crate::settings::OneOrMany;
use crate::{Error, Result};

/// Loads the adapter of a framework from the given search directories.
pub trait AdapterLoader {
    type Handle;

    /// Search `search_dirs` in order and load the adapter of `framework`.
    fn load(&self, framework: &Framework, search_dirs: &[NormalizedPath]) -> Result<Self::Handle>;
}

/// Location of a framework adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdapterModule {
    pub module: String,
    pub path: NormalizedPath,
}

/// Finds adapter modules on disk.
///
/// `a.b.c` matches the directory `<dir>/a/b/c` or a file `<dir>/a/b/c.<ext>`
/// for one of the configured extensions. The first search directory with a
/// match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLocator {
    extensions: Vec<String>,
}

impl Default for ModuleLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleLocator {
    /// Locator for Python adapter modules.
    pub fn new() -> Self {
        Self::with_extensions(["py"])
    }

    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Find `module` in `search_dirs`.
    pub fn locate(&self, module: &str, search_dirs: &[NormalizedPath]) -> Result<AdapterModule> {
        let not_found = || Error::AdapterNotFound {
            module: module.to_string(),
            searched: OneOrMany::from(search_dirs.to_vec()).to_string(),
        };

        let segments: Vec<&str> = module.split('.').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(not_found());
        }
        let relative = segments.join("/");

        for dir in search_dirs {
            let base = dir.join(&relative);
            if base.is_dir() {
                return Ok(self.found(module, base));
            }
            if let Some(file) = self
                .extensions
                .iter()
                .map(|ext| dir.join(&format!("{relative}.{ext}")))
                .find(NormalizedPath::is_file)
            {
                return Ok(self.found(module, file));
            }
        }
        Err(not_found())
    }

    fn found(&self, module: &str, path: NormalizedPath) -> AdapterModule {
        tracing::debug!(module, path = %path, "Located framework adapter");
        AdapterModule {
            module: module.to_string(),
            path,
        }
    }
}

impl AdapterLoader for ModuleLocator {
    type Handle = AdapterModule;

    fn load(&self, framework: &Framework, search_dirs: &[NormalizedPath]) -> Result<AdapterModule> {
        self.locate(&framework.module, search_dirs)
    }
}
