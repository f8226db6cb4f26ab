//! Command implementations

use bench_fs::NormalizedPath;
use bench_resources::{ConfigTree, ModuleLocator, Resources};
use colored::Colorize;
use serde_json::{Map, Value};

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};

/// Merge the `--config` files, then the directory overrides on top.
pub fn load_config(cli: &Cli) -> Result<ConfigTree> {
    if cli.configs.is_empty() {
        return Err(CliError::user(
            "No configuration given, pass at least one --config FILE",
        ));
    }

    let mut layers = cli
        .configs
        .iter()
        .map(|path| -> Result<ConfigTree> {
            Ok(ConfigTree::load(&NormalizedPath::absolute(path)?)?)
        })
        .collect::<Result<Vec<_>>>()?;
    layers.push(overrides(cli));
    Ok(ConfigTree::merged(&layers))
}

fn overrides(cli: &Cli) -> ConfigTree {
    let mut map = Map::new();
    for (key, value) in [
        ("input_dir", &cli.input_dir),
        ("output_dir", &cli.output_dir),
        ("user_dir", &cli.user_dir),
    ] {
        if let Some(value) = value {
            map.insert(key.to_string(), Value::String(value.clone()));
        }
    }
    ConfigTree::from_map(map)
}

pub fn run(cli: &Cli) -> Result<()> {
    let resources = Resources::new(&load_config(cli)?)?;
    match &cli.command {
        Commands::Config => print!("{}", resources.config()),
        Commands::Frameworks => list_frameworks(&resources)?,
        Commands::Framework { name } => {
            let (framework, _) = resources.framework_definition(name)?;
            print!("{}", serde_yaml::to_string(framework)?);
        }
        Commands::Benchmark { name } => {
            let benchmark = resources.benchmark_definition(name)?;
            print!("{}", serde_yaml::to_string(benchmark.as_ref())?);
        }
        Commands::Locate { name } => {
            let adapter = resources.load_adapter(&ModuleLocator::new(), name)?;
            println!("{}", adapter.path.to_native().display());
        }
    }
    Ok(())
}

fn list_frameworks(resources: &Resources) -> Result<()> {
    let registry = resources.frameworks()?;
    for framework in registry.frameworks() {
        println!("{}  {}", framework.name.bold(), framework.module.dimmed());
    }
    Ok(())
}
