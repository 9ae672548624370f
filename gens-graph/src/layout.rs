//! Whole-genome overview strip: one box per chromosome, laid out left to
//! right with widths proportional to chromosome length.

use std::collections::BTreeMap;

use gens_core::models::{Chromosome, ChromosomeBox, GenomeBuild};
use gens_core::{ChromosomeCatalog, Result};

///
/// Lay out the chromosomes of a build in karyotype order.
///
/// # Arguments
/// - origin_x: pixel column of the first box
/// - origin_y: pixel row shared by all boxes
/// - total_width: combined width of all boxes
/// - build: genome build
/// - catalog: chromosome sizes
///
pub fn layout(
    origin_x: f64,
    origin_y: f64,
    total_width: f64,
    build: GenomeBuild,
    catalog: &dyn ChromosomeCatalog,
) -> Result<BTreeMap<Chromosome, ChromosomeBox>> {
    let mut boxes = BTreeMap::new();
    let mut offset = 0.0;
    for chrom in Chromosome::ALL {
        let chrom_size = catalog.get_chromosome(chrom, build)?;
        let width = total_width * chrom_size.scale;
        boxes.insert(
            chrom,
            ChromosomeBox {
                chrom,
                x_pos: origin_x + offset,
                y_pos: origin_y,
                width,
                size: chrom_size.size,
            },
        );
        offset += width;
    }
    Ok(boxes)
}

///
/// Find the chromosome whose box contains the point `(x, y)`.
///
pub fn locate(
    boxes: &BTreeMap<Chromosome, ChromosomeBox>,
    height: f64,
    x: f64,
    y: f64,
    margin: f64,
) -> Option<Chromosome> {
    boxes
        .values()
        .find(|chrom_box| chrom_box.contains(height, x, y, margin))
        .map(|chrom_box| chrom_box.chrom)
}
