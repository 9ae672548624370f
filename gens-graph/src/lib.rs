//! Turning track records into something a browser can draw.
//!
//! This crate provides the drawing side of gens:
//!
//! - Mapping records of a region onto pixel coordinates, with values capped
//!   to the plot axes
//! - Laying out the whole-genome overview strip and hit-testing it
//! - The coverage pipeline tying region resolution, data access, decimation
//!   and mapping together, for one region or a whole genome at once
//!
//! # Example
//!
//! ```no_run
//! use gens_core::models::GenomeBuild;
//! use gens_core::{ChromSizes, FeatureIndex};
//! use gens_graph::{CoverageRequest, PlotParams, get_coverage};
//! use gens_io::{SampleFiles, TabixDataSource};
//!
//! let mut catalog = ChromSizes::new();
//! catalog.load_build(GenomeBuild::Hg38, "chrom_sizes_hg38.tsv").unwrap();
//!
//! let files = SampleFiles::locate("/data/gens", "sample1").unwrap();
//! let source = TabixDataSource::open(&files).unwrap();
//!
//! let request = CoverageRequest {
//!     region: "17:7661779-7687538".to_string(),
//!     build: GenomeBuild::Hg38,
//!     x_pos: 0.0,
//!     y_pos: 0.0,
//!     x_ampl: 1200.0,
//!     reduce_data: None,
//!     overview: false,
//!     plot: PlotParams::default(),
//! };
//! let result = get_coverage(&request, &catalog, &FeatureIndex::new(), &source).unwrap();
//! ```

pub mod layout;
pub mod mapper;
pub mod pipeline;

// re-exports
pub use layout::{layout, locate};
pub use mapper::{AxisConfig, GraphLayout, PlotParams, Viewport, map_records};
pub use pipeline::{ChromosomePosition, CoverageRequest, CoverageResult, get_coverage, get_multiple_coverages};
