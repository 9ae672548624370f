pub mod chrom_size;
pub mod genome;
pub mod record;
pub mod region;

// re-export for cleaner imports
pub use self::chrom_size::{ChromosomeBox, ChromosomeSize};
pub use self::genome::{Chromosome, GenomeBuild};
pub use self::record::{DataRecord, ScreenPoint, flatten_points};
pub use self::region::{Region, ZoomLevel};
