//! Turn a textual region specifier into a window on a chromosome.
//!
//! Three forms are understood:
//!
//! - `<chrom>:<start>-<end>`, where `end` may be the literal `None` for
//!   "to the end of the chromosome" and `start` may be negative,
//! - a bare chromosome name such as `X` or `chr17`,
//! - a feature name such as `BRCA2`, looked up in a [`GeneIndex`].
//!
//! The returned window always satisfies `0 <= start < end <= size`.

use log::debug;

use crate::catalog::ChromosomeCatalog;
use crate::errors::{GensError, Result};
use crate::features::GeneIndex;
use crate::models::{Chromosome, GenomeBuild, Region, ZoomLevel};

/// Unvalidated coordinates as written in the specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawRegion {
    chrom: Chromosome,
    start: i64,
    end: Option<i64>,
}

///
/// Resolve a region specifier against the reference data of a genome build.
///
/// # Arguments
/// - query: the region specifier
/// - build: genome build of the request
/// - catalog: chromosome sizes
/// - genes: feature name lookup for bare names that are not chromosomes
///
pub fn resolve_region(
    query: &str,
    build: GenomeBuild,
    catalog: &dyn ChromosomeCatalog,
    genes: &dyn GeneIndex,
) -> Result<Region> {
    let raw = parse_region_query(query, build, genes)?;
    let chrom_size = catalog.get_chromosome(raw.chrom, build)?.size as i64;

    let mut start = raw.start;
    let mut end = raw.end.unwrap_or(chrom_size);

    if end <= start {
        return Err(GensError::InvalidSpan { start, end });
    }

    // move the window left when it runs past the chromosome end
    if end > chrom_size {
        start = start.saturating_sub(end - chrom_size).max(0);
        end = chrom_size;
    }

    if start < 0 {
        end = end.saturating_add(start);
        start = 0;
        if end <= start {
            return Err(GensError::InvalidSpan { start, end });
        }
    }

    let region = Region {
        chrom: raw.chrom,
        start: start as u32,
        end: end as u32,
        res: ZoomLevel::for_span((end - start) as u32),
    };
    debug!("Resolved '{}' to {} (res {})", query, region, region.res);
    Ok(region)
}

fn parse_region_query(query: &str, build: GenomeBuild, genes: &dyn GeneIndex) -> Result<RawRegion> {
    let query = query.trim();
    if query.is_empty() {
        return Err(GensError::RegionFormat("empty region".to_string()));
    }

    let Some((chrom_name, range)) = query.split_once(':') else {
        return parse_name(query, build, genes);
    };

    if range.contains(':') {
        return Err(GensError::RegionFormat(query.to_string()));
    }

    let chrom = Chromosome::parse(chrom_name).ok_or_else(|| GensError::ChromosomeNotFound {
        chrom: chrom_name.to_string(),
        build,
    })?;

    // a leading '-' is the sign of the start position
    let (sign, unsigned) = match range.trim().strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, range.trim()),
    };
    let (start, end) = unsigned
        .split_once('-')
        .ok_or_else(|| GensError::RegionFormat(query.to_string()))?;

    let start = parse_position(start, query)? * sign;
    let end = match end.trim() {
        e if e.eq_ignore_ascii_case("none") => None,
        e => Some(parse_position(e, query)?),
    };

    Ok(RawRegion { chrom, start, end })
}

fn parse_name(name: &str, build: GenomeBuild, genes: &dyn GeneIndex) -> Result<RawRegion> {
    if let Some(chrom) = Chromosome::parse(name) {
        return Ok(RawRegion {
            chrom,
            start: 0,
            end: None,
        });
    }

    let extent = genes.lookup_feature_extent(name, build)?;
    Ok(RawRegion {
        chrom: extent.chrom,
        start: extent.start as i64,
        end: Some(extent.end as i64),
    })
}

fn parse_position(value: &str, query: &str) -> Result<i64> {
    value
        .trim()
        .replace(',', "")
        .parse::<i64>()
        .map_err(|_| GensError::RegionFormat(query.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::ChromSizes;
    use crate::features::FeatureIndex;

    use pretty_assertions::assert_eq;
    use rstest::*;

    const CHR1_SIZE: u32 = 248_956_422;

    #[fixture]
    fn catalog() -> ChromSizes {
        let mut catalog = ChromSizes::new();
        catalog
            .load_build(GenomeBuild::Hg38, "../tests/data/chrom_sizes_hg38.tsv")
            .unwrap();
        catalog
    }

    #[fixture]
    fn genes() -> FeatureIndex {
        let mut genes = FeatureIndex::new();
        genes
            .load_build(GenomeBuild::Hg38, "../tests/data/genes_hg38.bed")
            .unwrap();
        genes
    }

    fn resolve(query: &str, catalog: &ChromSizes, genes: &FeatureIndex) -> Result<Region> {
        resolve_region(query, GenomeBuild::Hg38, catalog, genes)
    }

    #[rstest]
    fn test_coordinate_range(catalog: ChromSizes, genes: FeatureIndex) {
        let region = resolve("1:100000-200000", &catalog, &genes).unwrap();
        assert_eq!(
            region,
            Region {
                chrom: Chromosome::Chr1,
                start: 100_000,
                end: 200_000,
                res: ZoomLevel::D,
            }
        );
    }

    #[rstest]
    fn test_open_ended_range(catalog: ChromSizes, genes: FeatureIndex) {
        let region = resolve("1:0-None", &catalog, &genes).unwrap();
        assert_eq!(region.start, 0);
        assert_eq!(region.end, CHR1_SIZE);
        assert_eq!(region.res, ZoomLevel::A);
    }

    #[rstest]
    fn test_gene_name(catalog: ChromSizes, genes: FeatureIndex) {
        let region = resolve("BRCA2", &catalog, &genes).unwrap();
        assert_eq!(region.chrom, Chromosome::Chr13);
        assert_eq!(region.start, 32_315_473);
        assert_eq!(region.end, 32_400_268);
        assert_eq!(region.res, ZoomLevel::D);
    }

    #[rstest]
    fn test_negative_start(catalog: ChromSizes, genes: FeatureIndex) {
        let region = resolve("1:-500-1000", &catalog, &genes).unwrap();
        assert_eq!(region.start, 0);
        assert_eq!(region.end, 500);
    }

    #[rstest]
    #[case("X", Chromosome::X, 156_040_895)]
    #[case("chr17", Chromosome::Chr17, 83_257_441)]
    #[case("mt", Chromosome::MT, 16_569)]
    fn test_whole_chromosome(
        catalog: ChromSizes,
        genes: FeatureIndex,
        #[case] query: &str,
        #[case] chrom: Chromosome,
        #[case] size: u32,
    ) {
        let region = resolve(query, &catalog, &genes).unwrap();
        assert_eq!(region.chrom, chrom);
        assert_eq!(region.start, 0);
        assert_eq!(region.end, size);
    }

    #[rstest]
    fn test_chr_prefix_and_case(catalog: ChromSizes, genes: FeatureIndex) {
        let region = resolve("chrx:1000-2000", &catalog, &genes).unwrap();
        assert_eq!(region.chrom, Chromosome::X);
        assert_eq!(region.width(), 1000);
    }

    #[rstest]
    fn test_window_shifted_at_chromosome_end(catalog: ChromSizes, genes: FeatureIndex) {
        let query = format!("1:{}-{}", CHR1_SIZE - 1000, CHR1_SIZE + 4000);
        let region = resolve(&query, &catalog, &genes).unwrap();
        assert_eq!(region.end, CHR1_SIZE);
        assert_eq!(region.start, CHR1_SIZE - 5000);
    }

    #[rstest]
    fn test_oversized_window_starts_at_zero(catalog: ChromSizes, genes: FeatureIndex) {
        let region = resolve("MT:100-50000", &catalog, &genes).unwrap();
        assert_eq!(region.start, 0);
        assert_eq!(region.end, 16_569);
    }

    #[rstest]
    #[case("1:a-b")]
    #[case("1:100")]
    #[case("1:1:100-200")]
    #[case("1:100-")]
    #[case("")]
    #[case("1:-9223372036854775808-100")]
    fn test_region_format_errors(catalog: ChromSizes, genes: FeatureIndex, #[case] query: &str) {
        let result = resolve(query, &catalog, &genes);
        assert!(matches!(result, Err(GensError::RegionFormat(_))), "{:?}", result);
    }

    #[rstest]
    #[case("1:200-100")]
    #[case("1:100-100")]
    #[case("1:-1000-500")]
    #[case("1:-9223372036854775807--2")]
    fn test_invalid_span(catalog: ChromSizes, genes: FeatureIndex, #[case] query: &str) {
        let result = resolve(query, &catalog, &genes);
        assert!(matches!(result, Err(GensError::InvalidSpan { .. })), "{:?}", result);
    }

    #[rstest]
    fn test_unknown_chromosome(catalog: ChromSizes, genes: FeatureIndex) {
        let result = resolve("25:1-100", &catalog, &genes);
        assert!(matches!(result, Err(GensError::ChromosomeNotFound { .. })));
    }

    #[rstest]
    fn test_unknown_gene(catalog: ChromSizes, genes: FeatureIndex) {
        let result = resolve("NOTAGENE", &catalog, &genes);
        assert!(matches!(result, Err(GensError::FeatureNotFound { .. })));
    }

    #[rstest]
    fn test_resolved_regions_stay_in_bounds(catalog: ChromSizes, genes: FeatureIndex) {
        let queries = [
            "1:0-10",
            "2:-100-100000000000",
            "X:156040000-156050000",
            "Y:0-None",
            "MT:-5-20",
            "22:50818000-None",
            "TP53",
            "dmd",
            "1:-9223372036854775807-9223372036854775807",
            "3:9223372036854775806-9223372036854775807",
        ];
        for query in queries {
            let region = resolve(query, &catalog, &genes).unwrap();
            let size = catalog.get_chromosome(region.chrom, GenomeBuild::Hg38).unwrap().size;
            assert!(region.start < region.end, "{}", query);
            assert!(region.end <= size, "{}", query);
        }
    }
}
