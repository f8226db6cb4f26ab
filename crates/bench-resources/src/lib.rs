//! Run configuration, framework definitions and benchmark definitions for
//! the AutoML benchmark harness.
//!
//! [`Resources`] owns the normalized run configuration and resolves
//! framework and benchmark definitions on demand:
//!
//! ```no_run
//! use bench_resources::{ConfigTree, Resources};
//! use bench_fs::NormalizedPath;
//!
//! let config = ConfigTree::load(&NormalizedPath::new("resources/config.yaml"))?;
//! let resources = Resources::new(&config)?;
//!
//! let (framework, name) = resources.framework_definition("randomforest")?;
//! let benchmark = resources.benchmark_definition("test")?;
//! println!("{name}: {} ({} tasks)", framework.module, benchmark.tasks.len());
//! # Ok::<(), bench_resources::Error>(())
//! ```

pub mod adapter;
pub mod benchmarks;
pub mod error;
pub mod frameworks;
pub mod global;
pub mod normalize;
pub mod resources;
pub mod schema;
pub mod settings;
pub mod tree;
pub mod validation;

pub use adapter::{AdapterLoader, AdapterModule, ModuleLocator};
pub use benchmarks::BenchmarkDefinition;
pub use error::{Error, Result};
pub use frameworks::FrameworkRegistry;
pub use normalize::{Placeholders, normalize};
pub use resources::Resources;
pub use schema::{DockerImage, Framework, FrameworkEntry, Task, TaskEntry};
pub use settings::{OneOrMany, Settings, TaskDefaults};
pub use tree::ConfigTree;
