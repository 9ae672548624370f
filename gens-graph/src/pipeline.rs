//! Region in, screen coordinates out: the coverage request pipeline.

use std::collections::BTreeMap;

use log::{debug, info};
use rayon::prelude::*;
use serde::{Serialize, Serializer};

use gens_core::models::{Chromosome, ChromosomeBox, GenomeBuild, Region, ScreenPoint, flatten_points};
use gens_core::{ChromosomeCatalog, GeneIndex, Result, resolve_region};
use gens_io::{Track, TrackSource, decimate};

use crate::mapper::{GraphLayout, PlotParams, Viewport};

///
/// Everything needed to draw the tracks of one region.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRequest {
    pub region: String,
    pub build: GenomeBuild,
    pub x_pos: f64,
    pub y_pos: f64,
    pub x_ampl: f64,
    pub reduce_data: Option<f64>,
    /// Read from the whole-genome overview bucket regardless of span.
    pub overview: bool,
    pub plot: PlotParams,
}

///
/// Where a chromosome is drawn in a whole-genome batch.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ChromosomePosition {
    pub region: String,
    pub x_pos: f64,
    pub y_pos: f64,
    pub x_ampl: f64,
}

impl ChromosomePosition {
    ///
    /// One position per overview box, covering each whole chromosome.
    ///
    pub fn from_layout(boxes: &BTreeMap<Chromosome, ChromosomeBox>) -> Vec<ChromosomePosition> {
        boxes
            .values()
            .map(|chrom_box| ChromosomePosition {
                region: chrom_box.chrom.to_string(),
                x_pos: chrom_box.x_pos,
                y_pos: chrom_box.y_pos,
                x_ampl: chrom_box.width,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackPoints {
    #[serde(serialize_with = "serialize_flat")]
    pub log2: Vec<ScreenPoint>,
    #[serde(serialize_with = "serialize_flat")]
    pub baf: Vec<ScreenPoint>,
}

///
/// Screen coordinates of both tracks of one region, plus the window they
/// were computed for.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageResult {
    pub region: Region,
    pub padded_start: i64,
    pub padded_end: i64,
    pub x_pos: i64,
    pub y_pos: i64,
    pub data: TrackPoints,
    /// Neither track had records in a window starting at 0.
    pub no_data: bool,
}

fn serialize_flat<S: Serializer>(points: &[ScreenPoint], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    flatten_points(points).serialize(serializer)
}

///
/// Resolve a region and compute the screen coordinates of its coverage and
/// BAF records.
///
/// # Arguments
/// - request: region and plot placement
/// - catalog: chromosome sizes
/// - genes: feature lookup for gene-name regions
/// - source: track records of the sample
///
pub fn get_coverage(
    request: &CoverageRequest,
    catalog: &dyn ChromosomeCatalog,
    genes: &dyn GeneIndex,
    source: &dyn TrackSource,
) -> Result<CoverageResult> {
    let mut region = resolve_region(&request.region, request.build, catalog, genes)?;
    if request.overview {
        region = region.as_overview();
    }
    let chrom_size = catalog.get_chromosome(region.chrom, request.build)?.size;

    let viewport = Viewport::new(
        &region,
        chrom_size,
        request.x_pos,
        request.x_ampl,
        request.plot.extra_plot_width,
    )?;
    let graph = GraphLayout::new(&request.plot, request.y_pos)?;

    let fetch = |track: Track| -> Result<Vec<ScreenPoint>> {
        let records = source.fetch(
            track,
            region.res,
            region.chrom,
            viewport.fetch_start,
            viewport.fetch_end,
        )?;
        let records = decimate(records, request.reduce_data)?;
        let axis = match track {
            Track::Coverage => &graph.log2,
            Track::Baf => &graph.baf,
        };
        Ok(viewport.map(&records, axis))
    };
    let log2 = fetch(Track::Coverage)?;
    let baf = fetch(Track::Baf)?;

    // an empty window further along the chromosome is still drawable
    let no_data = log2.is_empty() && baf.is_empty() && viewport.padded_start == 0;
    if no_data {
        info!("No data in {} (res {})", region, region.res);
    } else if log2.is_empty() && baf.is_empty() {
        info!("Empty window {} (res {})", region, region.res);
    } else {
        debug!(
            "Mapped {} log2 and {} baf points for {}",
            log2.len(),
            baf.len(),
            region
        );
    }

    Ok(CoverageResult {
        region,
        padded_start: viewport.padded_start,
        padded_end: viewport.padded_end,
        x_pos: request.x_pos.round() as i64,
        y_pos: request.y_pos.round() as i64,
        data: TrackPoints { log2, baf },
        no_data,
    })
}

///
/// Run [`get_coverage`] for many chromosomes at once, in parallel, always
/// reading the overview bucket. The first failing chromosome fails the batch.
///
/// # Arguments
/// - request: shared plot parameters; its region and placement are ignored
/// - positions: region and placement of each chromosome
/// - catalog: chromosome sizes
/// - genes: feature lookup for gene-name regions
/// - source: track records of the sample
///
pub fn get_multiple_coverages(
    request: &CoverageRequest,
    positions: &[ChromosomePosition],
    catalog: &dyn ChromosomeCatalog,
    genes: &dyn GeneIndex,
    source: &dyn TrackSource,
) -> Result<BTreeMap<Chromosome, CoverageResult>> {
    let results: Vec<CoverageResult> = positions
        .par_iter()
        .map(|position| {
            let chrom_request = CoverageRequest {
                region: position.region.clone(),
                x_pos: position.x_pos,
                y_pos: position.y_pos,
                x_ampl: position.x_ampl,
                overview: true,
                ..request.clone()
            };
            get_coverage(&chrom_request, catalog, genes, source)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(results
        .into_iter()
        .map(|result| (result.region.chrom, result))
        .collect())
}
