//! # Input/Output for gens track data.
//!
//! Per-sample coverage and BAF tracks are stored as bgzipped, tabix-indexed
//! files whose sequence names are zoom level buckets (`d_1`, `a_X`, ...).
//! This crate reads windows of those files, loads the optional whole-genome
//! overview file, and thins record streams before they are plotted.
//!
pub mod decimate;
pub mod memory;
pub mod source;
pub mod tabix;

// re-expose core functions
pub use decimate::*;
pub use memory::MemorySource;
pub use source::*;
pub use tabix::{IndexedTrackFile, TabixDataSource};
