use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;

use gens_core::ChromosomeCatalog;
use gens_core::models::{Chromosome, ChromosomeSize};

use crate::config::ReferenceData;
use crate::shared::{load_reference, print_json};

pub fn run_chrom_info(matches: &ArgMatches) -> Result<()> {
    let chrom = matches
        .get_one::<String>("chrom")
        .context("A chromosome is required.")?;

    let (_, reference) = load_reference(matches)?;
    print_json(&chrom_info(&reference, chrom)?)
}

pub fn chrom_info(reference: &ReferenceData, chrom: &str) -> Result<ChromosomeSize> {
    let chrom = Chromosome::parse(chrom).ok_or_else(|| anyhow!("Invalid chromosome name: {}", chrom))?;
    Ok(reference.catalog.get_chromosome(chrom, reference.build)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    use gens_core::models::GenomeBuild;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::config::GensConfig;

    #[fixture]
    fn reference() -> ReferenceData {
        GensConfig::try_from(Path::new("../tests/data/gens.toml"))
            .unwrap()
            .load_reference(GenomeBuild::Hg38)
            .unwrap()
    }

    #[rstest]
    #[case("X", 156_040_895)]
    #[case("chrY", 57_227_415)]
    #[case("M", 16_569)]
    fn test_chrom_info(reference: ReferenceData, #[case] chrom: &str, #[case] size: u32) {
        let info = chrom_info(&reference, chrom).unwrap();
        assert_eq!(info.size, size);
        assert_eq!(info.genome_build, GenomeBuild::Hg38);
    }

    #[rstest]
    fn test_invalid_chromosome(reference: ReferenceData) {
        assert!(chrom_info(&reference, "chr23").is_err());
    }
}
