//! Shared test utilities for the benchmark harness workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`harness`] - [`TestHarness`](harness::TestHarness) builder for a
//!   temporary harness layout (input, output and user directories)
//! - [`samples`] - sample framework and benchmark definitions

pub mod harness;
pub mod samples;

pub use harness::TestHarness;
