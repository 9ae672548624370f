//! Chromosome reference data: sizes and relative scales per genome build.

use std::path::Path;

use fxhash::FxHashMap;
use log::info;

use crate::errors::{GensError, Result};
use crate::models::{Chromosome, ChromosomeSize, GenomeBuild};
use crate::utils::read_data_lines;

///
/// Read-only lookup of chromosome metadata.
///
pub trait ChromosomeCatalog: Send + Sync {
    ///
    /// Get the size and scale of a chromosome, or `ChromosomeNotFound`.
    ///
    fn get_chromosome(&self, chrom: Chromosome, build: GenomeBuild) -> Result<ChromosomeSize>;
}

///
/// In-memory chromosome catalog, usually loaded from `chrom.sizes` files.
///
#[derive(Debug, Clone, Default)]
pub struct ChromSizes {
    sizes: FxHashMap<(GenomeBuild, Chromosome), ChromosomeSize>,
}

impl ChromSizes {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Register the chromosome lengths of a genome build. The scale of each
    /// chromosome is its share of the summed length, so the scales of a build
    /// add up to one.
    ///
    /// # Arguments
    /// - build: genome build the sizes belong to
    /// - sizes: `(chromosome, length in bp)` pairs
    ///
    pub fn add_build(&mut self, build: GenomeBuild, sizes: &[(Chromosome, u32)]) -> Result<()> {
        if sizes.is_empty() {
            return Err(GensError::ReferenceData(format!(
                "no chromosome sizes given for genome build {}",
                build
            )));
        }

        let mut seen = Vec::with_capacity(sizes.len());
        for (chrom, size) in sizes {
            if seen.contains(chrom) {
                return Err(GensError::ReferenceData(format!(
                    "chromosome {} is listed twice for genome build {}",
                    chrom, build
                )));
            }
            if *size == 0 {
                return Err(GensError::ReferenceData(format!(
                    "chromosome {} has zero length in genome build {}",
                    chrom, build
                )));
            }
            seen.push(*chrom);
        }

        let total: u64 = sizes.iter().map(|(_, size)| *size as u64).sum();
        self.sizes.retain(|(b, _), _| *b != build);
        for (chrom, size) in sizes {
            self.sizes.insert(
                (build, *chrom),
                ChromosomeSize {
                    chrom: *chrom,
                    genome_build: build,
                    size: *size,
                    scale: *size as f64 / total as f64,
                },
            );
        }
        Ok(())
    }

    ///
    /// Load a `chrom.sizes` style file (`<chrom> <size>` per line) for a build.
    ///
    /// # Arguments
    /// - build: genome build the file describes
    /// - path: path to the, optionally gzip'd, sizes file
    ///
    pub fn load_build<P: AsRef<Path>>(&mut self, build: GenomeBuild, path: P) -> Result<()> {
        let path = path.as_ref();
        info!("Loading chromosome sizes for genome build {} from {:?}", build, path);

        let lines = read_data_lines(path).map_err(|e| GensError::ReferenceData(format!("{:#}", e)))?;

        let mut sizes = Vec::with_capacity(lines.len());
        for line in lines {
            let mut parts = line.split_whitespace();
            let (name, size) = match (parts.next(), parts.next()) {
                (Some(name), Some(size)) => (name, size),
                _ => {
                    return Err(GensError::ReferenceData(format!(
                        "chrom sizes line does not have two columns: {}",
                        line
                    )));
                }
            };
            let chrom = Chromosome::parse(name).ok_or_else(|| {
                GensError::ReferenceData(format!("invalid chromosome name {}", name))
            })?;
            let size = size.parse::<u32>().map_err(|_| {
                GensError::ReferenceData(format!("invalid size for chromosome {}: {}", name, size))
            })?;
            sizes.push((chrom, size));
        }

        self.add_build(build, &sizes)
    }

    ///
    /// All chromosomes of a build in canonical order.
    ///
    pub fn chromosomes(&self, build: GenomeBuild) -> Vec<ChromosomeSize> {
        Chromosome::ALL
            .iter()
            .filter_map(|chrom| self.sizes.get(&(build, *chrom)).copied())
            .collect()
    }
}

impl ChromosomeCatalog for ChromSizes {
    fn get_chromosome(&self, chrom: Chromosome, build: GenomeBuild) -> Result<ChromosomeSize> {
        self.sizes
            .get(&(build, chrom))
            .copied()
            .ok_or_else(|| GensError::chromosome_not_found(chrom, build))
    }
}
