use std::fmt::{self, Display};

use serde::Serialize;

use super::Chromosome;

/// Spans wider than this are served from the `a` bucket.
pub const TIER_A_MIN_SPAN: u32 = 15_000_000;
/// Spans wider than this are served from the `b` bucket.
pub const TIER_B_MIN_SPAN: u32 = 1_400_000;
/// Spans wider than this are served from the `c` bucket.
pub const TIER_C_MIN_SPAN: u32 = 200_000;

///
/// Pre-aggregated data bucket to read from. `O` is reserved for the
/// whole-genome overview, `A` is the coarsest zoom level and `D` the finest.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomLevel {
    O,
    A,
    B,
    C,
    D,
}

impl ZoomLevel {
    ///
    /// Select the zoom level for a window of `span` base pairs.
    ///
    pub fn for_span(span: u32) -> ZoomLevel {
        if span > TIER_A_MIN_SPAN {
            ZoomLevel::A
        } else if span > TIER_B_MIN_SPAN {
            ZoomLevel::B
        } else if span > TIER_C_MIN_SPAN {
            ZoomLevel::C
        } else {
            ZoomLevel::D
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoomLevel::O => "o",
            ZoomLevel::A => "a",
            ZoomLevel::B => "b",
            ZoomLevel::C => "c",
            ZoomLevel::D => "d",
        }
    }

    ///
    /// Name of the sequence the data files store this level under, e.g. `d_1`.
    ///
    pub fn bucket_key(&self, chrom: Chromosome) -> String {
        format!("{}_{}", self.as_str(), chrom)
    }
}

impl Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// A resolved window on one chromosome, `[start, end)` in base pairs.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Region {
    pub chrom: Chromosome,
    pub start: u32,
    pub end: u32,
    pub res: ZoomLevel,
}

impl Region {
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    ///
    /// Same window, served from the overview bucket.
    ///
    pub fn as_overview(&self) -> Region {
        Region {
            res: ZoomLevel::O,
            ..*self
        }
    }

    pub fn as_string(&self) -> String {
        format!("{}:{}-{}", self.chrom, self.start, self.end)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
