//! Track records held in memory.
//!
//! Used for the pre-computed whole-genome overview file, which is small
//! enough to load at once, and wherever a source is built programmatically.

use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use fxhash::FxHashMap;
use log::{info, warn};
use serde::Deserialize;

use gens_core::models::{Chromosome, DataRecord, ZoomLevel};
use gens_core::{GensError, Result};

use crate::source::{Track, TrackSource};

/// Per-chromosome entry of an overview file.
#[derive(Debug, Default, Deserialize)]
struct OverviewEntry {
    #[serde(default)]
    cov: Vec<(u32, f64)>,
    #[serde(default)]
    baf: Vec<(u32, f64)>,
}

///
/// A [`TrackSource`] backed by sorted in-memory vectors, one per track and
/// chromosome. Zoom levels are not distinguished.
///
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: FxHashMap<(Track, Chromosome), Vec<DataRecord>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Add records for a track on a chromosome. Records are kept sorted by
    /// position.
    ///
    pub fn insert(&mut self, track: Track, chrom: Chromosome, records: Vec<DataRecord>) {
        let entry = self.records.entry((track, chrom)).or_default();
        entry.extend(records);
        entry.sort_by_key(|r| r.position);
    }

    ///
    /// Load a gzip'd overview file of the form
    /// `{"<chrom>": {"cov": [[pos, value], ...], "baf": [[pos, value], ...]}}`.
    /// Entries for unknown chromosomes are skipped.
    ///
    /// # Arguments
    /// - path: path to the `.overview.json.gz` file
    ///
    pub fn from_overview_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(GensError::SourceFileMissing(path.to_path_buf()));
        }
        info!("Loading overview data from {:?}", path);

        let file = std::fs::File::open(path)?;
        let mut contents = String::new();
        MultiGzDecoder::new(file).read_to_string(&mut contents)?;
        Self::from_overview_json(&contents)
    }

    ///
    /// Parse the uncompressed contents of an overview file.
    ///
    pub fn from_overview_json(json: &str) -> Result<Self> {
        let entries: FxHashMap<String, OverviewEntry> = serde_json::from_str(json)?;

        let mut source = MemorySource::new();
        for (name, entry) in entries {
            let Some(chrom) = Chromosome::parse(&name) else {
                warn!("Skipping overview data for unsupported chromosome {}", name);
                continue;
            };
            for (track, points) in [(Track::Coverage, entry.cov), (Track::Baf, entry.baf)] {
                let records = points
                    .into_iter()
                    .map(|(position, value)| DataRecord::new(position, value))
                    .collect();
                source.insert(track, chrom, records);
            }
        }
        Ok(source)
    }
}

impl TrackSource for MemorySource {
    fn fetch(
        &self,
        track: Track,
        _res: ZoomLevel,
        chrom: Chromosome,
        start: u32,
        end: u32,
    ) -> Result<Vec<DataRecord>> {
        let Some(records) = self.records.get(&(track, chrom)) else {
            return Ok(Vec::new());
        };
        if end <= start {
            return Ok(Vec::new());
        }

        let first = records.partition_point(|r| r.position < start);
        let last = records.partition_point(|r| r.position < end);
        Ok(records[first..last].to_vec())
    }
}
