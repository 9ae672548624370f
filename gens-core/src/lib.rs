//! # Core models and reference data for gens.
//!
//! This crate holds what every other gens crate shares: the karyotype and
//! genome build enums, resolved regions and their zoom levels, the records
//! and screen points flowing through the coverage pipeline, and the two
//! read-only collaborators the pipeline consumes (chromosome sizes and gene
//! lookup) together with in-memory implementations of both.
//!
pub mod catalog;
pub mod errors;
pub mod features;
pub mod models;
pub mod resolve;
pub mod utils;

// re-export for cleaner imports
pub use catalog::{ChromSizes, ChromosomeCatalog};
pub use errors::{ErrorKind, GensError, Result};
pub use features::{FeatureExtent, FeatureIndex, GeneIndex};
pub use resolve::resolve_region;
