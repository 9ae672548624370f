use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Chromosome, GenomeBuild};

#[derive(Error, Debug)]
pub enum GensError {
    #[error("Invalid region format: {0}")]
    RegionFormat(String),

    #[error("Could not find chromosome {chrom} for genome build {build}")]
    ChromosomeNotFound { chrom: String, build: GenomeBuild },

    #[error("Did not find a feature named '{name}' in genome build {build}")]
    FeatureNotFound { name: String, build: GenomeBuild },

    #[error("Invalid span: end ({end}) must be greater than start ({start})")]
    InvalidSpan { start: i64, end: i64 },

    #[error("Reduce fraction must be within (0, 1], got {0}")]
    InvalidReduceFraction(f64),

    #[error("Invalid plot parameters: {0}")]
    InvalidPlot(String),

    #[error("File not found: {}", .0.display())]
    SourceFileMissing(PathBuf),

    #[error("Error parsing record: {0}")]
    RecordParse(String),

    #[error("Invalid reference data: {0}")]
    ReferenceData(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// How an error should be reported to whoever issued the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Client,
    NotFound,
    Internal,
}

impl GensError {
    pub fn chromosome_not_found(chrom: Chromosome, build: GenomeBuild) -> Self {
        GensError::ChromosomeNotFound {
            chrom: chrom.to_string(),
            build,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GensError::RegionFormat(_)
            | GensError::InvalidSpan { .. }
            | GensError::InvalidReduceFraction(_)
            | GensError::InvalidPlot(_) => ErrorKind::Client,
            GensError::ChromosomeNotFound { .. }
            | GensError::FeatureNotFound { .. }
            | GensError::SourceFileMissing(_) => ErrorKind::NotFound,
            GensError::RecordParse(_)
            | GensError::ReferenceData(_)
            | GensError::Io(_)
            | GensError::Json(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, GensError>;
