use anyhow::{Context, Result};
use clap::ArgMatches;

use gens_core::models::Region;
use gens_core::resolve_region;

use crate::config::ReferenceData;
use crate::shared::{load_reference, print_json};

pub fn run_resolve(matches: &ArgMatches) -> Result<()> {
    let region = matches
        .get_one::<String>("region")
        .context("A region is required.")?;

    let (_, reference) = load_reference(matches)?;
    print_json(&resolve(&reference, region)?)
}

pub fn resolve(reference: &ReferenceData, region: &str) -> Result<Region> {
    resolve_region(region, reference.build, &reference.catalog, &reference.genes)
        .with_context(|| format!("Failed to resolve region '{}'", region))
}
