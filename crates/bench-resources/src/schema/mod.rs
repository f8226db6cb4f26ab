//! Framework and task definitions
//!
//! Each definition has two forms: the entry as declared in a definition
//! file, where most fields are optional, and the resolved form produced by
//! [`validation`](crate::validation) with every default applied.

pub mod framework;
pub mod task;

pub use framework::{DockerImage, Framework, FrameworkEntry};
pub use task::{Task, TaskEntry};
