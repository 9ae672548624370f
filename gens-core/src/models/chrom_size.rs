use serde::Serialize;

use super::{Chromosome, GenomeBuild};

///
/// Length of a chromosome and its share of the whole genome length.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChromosomeSize {
    pub chrom: Chromosome,
    pub genome_build: GenomeBuild,
    pub size: u32,
    pub scale: f64,
}

///
/// Placement of one chromosome in the whole-genome overview strip.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChromosomeBox {
    pub chrom: Chromosome,
    pub x_pos: f64,
    pub y_pos: f64,
    pub width: f64,
    pub size: u32,
}

impl ChromosomeBox {
    ///
    /// Whether `(x, y)` falls inside this box when rows are `height` pixels
    /// tall; `margin` shrinks the box from its left and top edges.
    ///
    pub fn contains(&self, height: f64, x: f64, y: f64, margin: f64) -> bool {
        self.x_pos + margin <= x
            && x <= self.x_pos + self.width
            && self.y_pos + margin <= y
            && y <= self.y_pos + height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(10.0, 10.0, 0.0, true)]
    #[case(60.0, 30.0, 0.0, true)]
    #[case(61.0, 30.0, 0.0, false)]
    #[case(12.0, 30.0, 5.0, false)]
    #[case(15.0, 15.0, 5.0, true)]
    #[case(30.0, 31.0, 0.0, false)]
    fn test_box_contains(#[case] x: f64, #[case] y: f64, #[case] margin: f64, #[case] expected: bool) {
        let chrom_box = ChromosomeBox {
            chrom: Chromosome::Chr1,
            x_pos: 10.0,
            y_pos: 10.0,
            width: 50.0,
            size: 1000,
        };
        assert_eq!(chrom_box.contains(20.0, x, y, margin), expected);
    }
}
