//! Gene and feature name lookup.

use std::path::Path;

use fxhash::FxHashMap;
use log::{info, warn};
use serde::Serialize;

use crate::errors::{GensError, Result};
use crate::models::{Chromosome, GenomeBuild};
use crate::utils::read_data_lines;

///
/// Genomic extent covered by every feature sharing a name.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureExtent {
    pub chrom: Chromosome,
    pub start: u32,
    pub end: u32,
}

///
/// Read-only lookup of named features (genes, transcripts).
///
pub trait GeneIndex: Send + Sync {
    ///
    /// Get the union extent of all features named `name` (case-insensitive),
    /// or `FeatureNotFound`.
    ///
    fn lookup_feature_extent(&self, name: &str, build: GenomeBuild) -> Result<FeatureExtent>;
}

#[derive(Debug, Clone, Copy)]
struct Feature {
    chrom: Chromosome,
    start: u32,
    end: u32,
}

///
/// In-memory feature index keyed by lower-cased feature name.
///
#[derive(Debug, Clone, Default)]
pub struct FeatureIndex {
    features: FxHashMap<(GenomeBuild, String), Vec<Feature>>,
}

impl FeatureIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, build: GenomeBuild, name: &str, chrom: Chromosome, start: u32, end: u32) {
        self.features
            .entry((build, name.to_lowercase()))
            .or_default()
            .push(Feature { chrom, start, end });
    }

    ///
    /// Load features from a BED-like file: `chrom start end name [...]`.
    /// Features on contigs outside the karyotype are skipped.
    ///
    /// # Arguments
    /// - build: genome build the file is annotated against
    /// - path: path to the, optionally gzip'd, file
    ///
    pub fn load_build<P: AsRef<Path>>(&mut self, build: GenomeBuild, path: P) -> Result<()> {
        let path = path.as_ref();
        info!("Loading features for genome build {} from {:?}", build, path);

        let lines = read_data_lines(path).map_err(|e| GensError::ReferenceData(format!("{:#}", e)))?;

        let mut skipped = 0;
        for line in lines {
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() < 4 {
                return Err(GensError::ReferenceData(format!(
                    "feature line does not have at least 4 fields: {}",
                    line
                )));
            }

            let Some(chrom) = Chromosome::parse(parts[0]) else {
                skipped += 1;
                continue;
            };
            let start = parts[1].parse::<u32>().map_err(|_| {
                GensError::ReferenceData(format!("invalid start position in line: {}", line))
            })?;
            let end = parts[2].parse::<u32>().map_err(|_| {
                GensError::ReferenceData(format!("invalid end position in line: {}", line))
            })?;

            self.insert(build, parts[3].trim(), chrom, start, end);
        }

        if skipped > 0 {
            warn!("Skipped {} features on unsupported contigs in {:?}", skipped, path);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.features.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl GeneIndex for FeatureIndex {
    fn lookup_feature_extent(&self, name: &str, build: GenomeBuild) -> Result<FeatureExtent> {
        let not_found = || GensError::FeatureNotFound {
            name: name.to_string(),
            build,
        };

        let matches = self
            .features
            .get(&(build, name.trim().to_lowercase()))
            .filter(|features| !features.is_empty())
            .ok_or_else(not_found)?;

        // the chromosome of the left-most feature wins
        let first = matches
            .iter()
            .min_by_key(|f| (f.start, f.chrom))
            .ok_or_else(not_found)?;

        let on_chrom = matches.iter().filter(|f| f.chrom == first.chrom);
        let end = on_chrom.map(|f| f.end).max().unwrap_or(first.end);

        Ok(FeatureExtent {
            chrom: first.chrom,
            start: first.start,
            end,
        })
    }
}
