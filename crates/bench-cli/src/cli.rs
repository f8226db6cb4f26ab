//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// AutoML benchmark harness - inspect configuration, frameworks and benchmarks
#[derive(Parser, Debug)]
#[command(name = "bench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file, merged in the order given (YAML, JSON or TOML)
    #[arg(short, long = "config", value_name = "FILE", global = true, env = "BENCH_CONFIG")]
    pub configs: Vec<PathBuf>,

    /// Override `input_dir`
    #[arg(long, value_name = "DIR", global = true)]
    pub input_dir: Option<String>,

    /// Override `output_dir`
    #[arg(long, value_name = "DIR", global = true)]
    pub output_dir: Option<String>,

    /// Override `user_dir`
    #[arg(long, value_name = "DIR", global = true)]
    pub user_dir: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the normalized configuration as YAML
    Config,

    /// List the declared frameworks
    Frameworks,

    /// Print a resolved framework definition
    ///
    /// Examples:
    ///   bench framework randomforest
    ///   bench framework RandomForest
    Framework {
        /// Framework name, matched ignoring case
        name: String,
    },

    /// Print a resolved benchmark definition
    ///
    /// Examples:
    ///   bench benchmark test
    ///   bench benchmark ./my_benchmarks/custom.yaml
    Benchmark {
        /// Benchmark name or path to a benchmark file
        name: String,
    },

    /// Print where the adapter module of a framework lives
    Locate {
        /// Framework name, matched ignoring case
        name: String,
    },
}
