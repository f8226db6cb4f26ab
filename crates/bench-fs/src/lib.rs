//! Filesystem abstraction for the AutoML benchmark harness
//!
//! Provides absolute path normalization, text I/O and format-agnostic
//! configuration loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
pub use path::NormalizedPath;
