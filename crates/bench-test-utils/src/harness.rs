//! [`TestHarness`] builder for resource-loading test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary harness layout with `input/` and `user/` directories.
///
/// `output/` is left for the code under test to create.
///
/// # Example
///
/// ```rust,no_run
/// use bench_test_utils::{TestHarness, samples};
///
/// let harness = TestHarness::new();
/// harness.write_frameworks(samples::FRAMEWORKS_YAML);
/// harness.write_benchmark("user", "toy", samples::TOY_BENCHMARK_YAML);
/// let config = harness.write_config();
/// ```
pub struct TestHarness {
    temp_dir: TempDir,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Create a temporary directory holding empty `input/` and `user/`.
    pub fn new() -> Self {
        let harness = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(harness.path("input")).unwrap();
        fs::create_dir_all(harness.path("user")).unwrap();
        harness
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` under the root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write the framework definition file referenced by [`config_yaml`](Self::config_yaml).
    pub fn write_frameworks(&self, content: &str) -> PathBuf {
        self.write("user/frameworks.yaml", content)
    }

    /// Write `<location>/benchmarks/<name>.yaml`, `location` being `user` or `input`.
    pub fn write_benchmark(&self, location: &str, name: &str, content: &str) -> PathBuf {
        self.write(&format!("{location}/benchmarks/{name}.yaml"), content)
    }

    /// A complete run configuration rooted in this harness.
    ///
    /// Benchmarks are searched in `user/benchmarks` first, then
    /// `input/benchmarks`.
    pub fn config_yaml(&self) -> String {
        let root = self.root().to_string_lossy().replace('\\', "/");
        format!(
            r#"input_dir: '{root}/input'
output_dir: '{root}/output'
user_dir: '{root}/user'
frameworks:
  definition_file: '{{user}}/frameworks.yaml'
benchmarks:
  definition_dir:
    - '{{user}}/benchmarks'
    - '{{input}}/benchmarks'
  defaults:
    max_runtime_seconds: 600
    cores: 2
    folds: 10
    max_mem_size_mb: 4096
aws:
  ec2:
    instance_type: m5.large
docker:
  image_defaults:
    author: automlbenchmark
    image: null
    tag: latest
"#
        )
    }

    /// Write [`config_yaml`](Self::config_yaml) to `config.yaml` at the root.
    pub fn write_config(&self) -> PathBuf {
        self.write("config.yaml", &self.config_yaml())
    }

    /// Assert that `relative` exists and is a directory.
    ///
    /// # Panics
    /// Panics with a descriptive message otherwise.
    pub fn assert_dir_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            full_path.is_dir(),
            "Expected directory to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `relative` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_not_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            !full_path.exists(),
            "Expected path NOT to exist: {}",
            full_path.display()
        );
    }
}
