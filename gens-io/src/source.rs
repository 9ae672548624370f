use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

use gens_core::models::{Chromosome, DataRecord, ZoomLevel};
use gens_core::{GensError, Result};

pub const COV_SUFFIX: &str = ".cov.bed.gz";
pub const BAF_SUFFIX: &str = ".baf.bed.gz";
pub const OVERVIEW_SUFFIX: &str = ".overview.json.gz";
pub const INDEX_SUFFIX: &str = ".tbi";

///
/// The two parallel measurement tracks stored per sample.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    /// Log2 ratio of the normalized sequencing depth.
    Coverage,
    /// B-allele frequency.
    Baf,
}

impl Track {
    pub fn suffix(&self) -> &'static str {
        match self {
            Track::Coverage => COV_SUFFIX,
            Track::Baf => BAF_SUFFIX,
        }
    }
}

impl Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Track::Coverage => write!(f, "coverage"),
            Track::Baf => write!(f, "baf"),
        }
    }
}

///
/// Anything that can serve the records of one track in a window.
///
pub trait TrackSource: Send + Sync {
    ///
    /// Get the records of `track` in bucket `res` overlapping `[start, end)`
    /// on `chrom`, in ascending position order. A bucket the source does not
    /// have yields an empty vector.
    ///
    fn fetch(
        &self,
        track: Track,
        res: ZoomLevel,
        chrom: Chromosome,
        start: u32,
        end: u32,
    ) -> Result<Vec<DataRecord>>;
}

///
/// Paths to the data files of one sample.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFiles {
    pub coverage: PathBuf,
    pub baf: PathBuf,
    pub overview: Option<PathBuf>,
}

impl SampleFiles {
    pub fn new<P: Into<PathBuf>>(coverage: P, baf: P) -> Self {
        SampleFiles {
            coverage: coverage.into(),
            baf: baf.into(),
            overview: None,
        }
    }

    ///
    /// Locate the files of `sample_id` in `data_dir` by their conventional
    /// suffixes. The overview file is optional; both track files must exist.
    ///
    /// # Arguments
    /// - data_dir: directory holding the sample files
    /// - sample_id: file name prefix of the sample
    ///
    pub fn locate<P: AsRef<Path>>(data_dir: P, sample_id: &str) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        let coverage = data_dir.join(format!("{}{}", sample_id, COV_SUFFIX));
        let baf = data_dir.join(format!("{}{}", sample_id, BAF_SUFFIX));
        for path in [&coverage, &baf] {
            if !path.is_file() {
                return Err(GensError::SourceFileMissing(path.to_path_buf()));
            }
        }

        let overview = data_dir.join(format!("{}{}", sample_id, OVERVIEW_SUFFIX));
        Ok(SampleFiles {
            coverage,
            baf,
            overview: overview.is_file().then_some(overview),
        })
    }

    pub fn track(&self, track: Track) -> &Path {
        match track {
            Track::Coverage => &self.coverage,
            Track::Baf => &self.baf,
        }
    }
}

///
/// Parse one line of a track file: `bucket-key  start  end  value`.
/// Only the start position and the value are kept.
///
pub fn parse_track_line(line: &str) -> Result<DataRecord> {
    let mut fields = line.trim_end().split('\t');
    let (Some(_key), Some(start), Some(_end), Some(value)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(GensError::RecordParse(format!(
            "expected 4 tab separated columns: {}",
            line
        )));
    };

    let position = start
        .parse::<u32>()
        .map_err(|_| GensError::RecordParse(format!("invalid start position: {}", line)))?;
    let value = value
        .parse::<f64>()
        .map_err(|_| GensError::RecordParse(format!("invalid value: {}", line)))?;

    Ok(DataRecord::new(position, value))
}
