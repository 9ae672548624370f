use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, arg};

use gens_core::models::GenomeBuild;

use crate::config::{GensConfig, ReferenceData};

/// Arguments every subcommand takes.
pub fn reference_args() -> [Arg; 2] {
    [
        arg!(-c --config <CONFIG> "Path to the gens configuration file (toml)").required(true),
        arg!(-b --build <BUILD> "Genome build (19 or 38)").required(true),
    ]
}

///
/// Read the configuration file and the reference data of the requested build.
///
pub fn load_reference(matches: &ArgMatches) -> Result<(GensConfig, ReferenceData)> {
    let config_path = matches
        .get_one::<String>("config")
        .context("A path to a configuration file is required.")?;
    let build = matches
        .get_one::<String>("build")
        .context("A genome build is required.")?
        .parse::<GenomeBuild>()
        .map_err(anyhow::Error::msg)?;

    let config = GensConfig::try_from(Path::new(config_path))
        .with_context(|| format!("Failed to read configuration from {}", config_path))?;
    let reference = config
        .load_reference(build)
        .with_context(|| format!("Failed to load reference data for genome build {}", build))?;
    Ok((config, reference))
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
