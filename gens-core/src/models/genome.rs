use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

///
/// Reference assembly a sample was aligned against.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum GenomeBuild {
    Hg19,
    Hg38,
}

impl GenomeBuild {
    pub const ALL: [GenomeBuild; 2] = [GenomeBuild::Hg19, GenomeBuild::Hg38];

    pub fn version(&self) -> u16 {
        match self {
            GenomeBuild::Hg19 => 19,
            GenomeBuild::Hg38 => 38,
        }
    }
}

impl TryFrom<u16> for GenomeBuild {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            19 | 37 => Ok(GenomeBuild::Hg19),
            38 => Ok(GenomeBuild::Hg38),
            _ => Err(format!("{} is not a valid genome build; use 19/37 or 38", value)),
        }
    }
}

impl From<GenomeBuild> for u16 {
    fn from(build: GenomeBuild) -> Self {
        build.version()
    }
}

impl FromStr for GenomeBuild {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "19" | "37" | "hg19" | "grch37" => Ok(GenomeBuild::Hg19),
            "38" | "hg38" | "grch38" => Ok(GenomeBuild::Hg38),
            other => Err(format!("{} is not a valid genome build; use 19/37 or 38", other)),
        }
    }
}

impl Display for GenomeBuild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version())
    }
}

///
/// Karyotype of the supported genomes. The declaration order is the canonical
/// ordering used for overview layouts.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Chromosome {
    Chr1,
    Chr2,
    Chr3,
    Chr4,
    Chr5,
    Chr6,
    Chr7,
    Chr8,
    Chr9,
    Chr10,
    Chr11,
    Chr12,
    Chr13,
    Chr14,
    Chr15,
    Chr16,
    Chr17,
    Chr18,
    Chr19,
    Chr20,
    Chr21,
    Chr22,
    X,
    Y,
    MT,
}

impl Chromosome {
    pub const ALL: [Chromosome; 25] = [
        Chromosome::Chr1,
        Chromosome::Chr2,
        Chromosome::Chr3,
        Chromosome::Chr4,
        Chromosome::Chr5,
        Chromosome::Chr6,
        Chromosome::Chr7,
        Chromosome::Chr8,
        Chromosome::Chr9,
        Chromosome::Chr10,
        Chromosome::Chr11,
        Chromosome::Chr12,
        Chromosome::Chr13,
        Chromosome::Chr14,
        Chromosome::Chr15,
        Chromosome::Chr16,
        Chromosome::Chr17,
        Chromosome::Chr18,
        Chromosome::Chr19,
        Chromosome::Chr20,
        Chromosome::Chr21,
        Chromosome::Chr22,
        Chromosome::X,
        Chromosome::Y,
        Chromosome::MT,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Chromosome::Chr1 => "1",
            Chromosome::Chr2 => "2",
            Chromosome::Chr3 => "3",
            Chromosome::Chr4 => "4",
            Chromosome::Chr5 => "5",
            Chromosome::Chr6 => "6",
            Chromosome::Chr7 => "7",
            Chromosome::Chr8 => "8",
            Chromosome::Chr9 => "9",
            Chromosome::Chr10 => "10",
            Chromosome::Chr11 => "11",
            Chromosome::Chr12 => "12",
            Chromosome::Chr13 => "13",
            Chromosome::Chr14 => "14",
            Chromosome::Chr15 => "15",
            Chromosome::Chr16 => "16",
            Chromosome::Chr17 => "17",
            Chromosome::Chr18 => "18",
            Chromosome::Chr19 => "19",
            Chromosome::Chr20 => "20",
            Chromosome::Chr21 => "21",
            Chromosome::Chr22 => "22",
            Chromosome::X => "X",
            Chromosome::Y => "Y",
            Chromosome::MT => "MT",
        }
    }

    ///
    /// Parse a chromosome name. A `chr` prefix is ignored and case does not
    /// matter; `M` is read as `MT`.
    ///
    pub fn parse(name: &str) -> Option<Chromosome> {
        let name = name.trim();
        let stripped = match name.get(..3) {
            Some(prefix) if prefix.eq_ignore_ascii_case("chr") => &name[3..],
            _ => name,
        };
        let normalized = stripped.to_uppercase();
        if normalized == "M" {
            return Some(Chromosome::MT);
        }
        Chromosome::ALL
            .iter()
            .copied()
            .find(|chrom| chrom.as_str() == normalized)
    }
}

impl FromStr for Chromosome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chromosome::parse(s).ok_or_else(|| format!("{} is not a valid chromosome name", s))
    }
}

impl Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Chromosome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
