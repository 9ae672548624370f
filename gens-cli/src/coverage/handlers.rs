use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use gens_graph::{CoverageRequest, CoverageResult, PlotParams, get_coverage};
use gens_io::{MemorySource, TabixDataSource, TrackSource};

use crate::config::{GensConfig, ReferenceData};
use crate::shared::{load_reference, print_json};

pub fn run_coverage(matches: &ArgMatches) -> Result<()> {
    print_json(&coverage_from_matches(matches)?)
}

pub fn coverage_from_matches(matches: &ArgMatches) -> Result<CoverageResult> {
    let sample = matches
        .get_one::<String>("sample")
        .context("A sample id is required.")?;
    let region = matches
        .get_one::<String>("region")
        .context("A region is required.")?;
    let x_pos = *matches.get_one::<f64>("x-pos").context("--x-pos is required.")?;
    let y_pos = *matches.get_one::<f64>("y-pos").context("--y-pos is required.")?;
    let x_ampl = *matches.get_one::<f64>("x-ampl").context("--x-ampl is required.")?;
    let overview = matches.get_flag("overview");

    let (config, reference) = load_reference(matches)?;
    let plot = PlotParams {
        extra_plot_width: matches
            .get_one::<f64>("extra-plot-width")
            .copied()
            .unwrap_or(config.plot.params.extra_plot_width),
        ..config.plot.params
    };
    let request = CoverageRequest {
        region: region.to_string(),
        build: reference.build,
        x_pos,
        y_pos,
        x_ampl,
        reduce_data: matches.get_one::<f64>("reduce").copied().or(config.plot.reduce_data),
        overview,
        plot,
    };

    let source = open_source(&config, sample, overview)?;
    coverage(&reference, &request, source.as_ref())
}

pub fn coverage(reference: &ReferenceData, request: &CoverageRequest, source: &dyn TrackSource) -> Result<CoverageResult> {
    get_coverage(request, &reference.catalog, &reference.genes, source)
        .with_context(|| format!("Failed to get coverage for '{}'", request.region))
}

///
/// Open the track data of a sample. Overview requests read the pre-computed
/// overview file when the sample has one.
///
pub fn open_source(config: &GensConfig, sample: &str, overview: bool) -> Result<Box<dyn TrackSource>> {
    let files = config
        .sample_files(sample)
        .with_context(|| format!("Failed to locate data files of sample {}", sample))?;

    match (&files.overview, overview) {
        (Some(path), true) => {
            info!("Using overview file {:?}", path);
            Ok(Box::new(MemorySource::from_overview_file(path)?))
        }
        _ => Ok(Box::new(TabixDataSource::open(&files)?)),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use std::fs::File;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use gens_core::models::{Chromosome, ScreenPoint, ZoomLevel};
    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::TempDir;

    use crate::coverage::cli::create_coverage_cli;

    ///
    /// Write a config pointing at the test reference data, plus a sample `s1`
    /// that only has overview data.
    ///
    pub fn write_overview_sample(dir: &Path) -> PathBuf {
        let chrom_sizes = std::fs::canonicalize("../tests/data/chrom_sizes_hg38.tsv").unwrap();
        let genes = std::fs::canonicalize("../tests/data/genes_hg38.bed").unwrap();
        let config_path = dir.join("gens.toml");
        std::fs::write(
            &config_path,
            format!(
                "data_dir = \".\"\n\n[[builds]]\ngenome_build = 38\nchrom_sizes = {:?}\nfeatures = {:?}\n",
                chrom_sizes.display().to_string(),
                genes.display().to_string()
            ),
        )
        .unwrap();

        File::create(dir.join("s1.cov.bed.gz")).unwrap();
        File::create(dir.join("s1.baf.bed.gz")).unwrap();
        let mut encoder = GzEncoder::new(File::create(dir.join("s1.overview.json.gz")).unwrap(), Compression::default());
        encoder
            .write_all(br#"{"1": {"cov": [[100000, 0.0], [150000, 1.0]], "baf": [[120000, 0.5]]}}"#)
            .unwrap();
        encoder.finish().unwrap();
        config_path
    }

    #[fixture]
    fn sample_dir() -> TempDir {
        let tempdir = tempfile::tempdir().unwrap();
        write_overview_sample(tempdir.path());
        tempdir
    }

    #[rstest]
    fn test_coverage_from_overview(sample_dir: TempDir) {
        let config = sample_dir.path().join("gens.toml");
        let matches = create_coverage_cli()
            .try_get_matches_from([
                "coverage",
                "--config",
                config.to_str().unwrap(),
                "--build",
                "38",
                "--sample",
                "s1",
                "--region",
                "1:100000-200000",
                "--x-pos",
                "0",
                "--y-pos",
                "-10",
                "--x-ampl",
                "100",
                "--overview",
            ])
            .unwrap();

        let result = coverage_from_matches(&matches).unwrap();
        assert_eq!(result.region.chrom, Chromosome::Chr1);
        assert_eq!(result.region.res, ZoomLevel::O);
        assert_eq!(result.y_pos, -10);
        assert_eq!(
            result.data.log2,
            vec![ScreenPoint { x: 0, y: 260 }, ScreenPoint { x: 50, y: 240 }]
        );
        assert_eq!(result.data.baf, vec![ScreenPoint { x: 20, y: 80 }]);
    }

    #[rstest]
    fn test_tabix_files_required_without_overview(sample_dir: TempDir) {
        let config = GensConfig::try_from(sample_dir.path().join("gens.toml").as_path()).unwrap();
        assert!(open_source(&config, "s1", false).is_err());
        assert!(open_source(&config, "s1", true).is_ok());
        assert!(open_source(&config, "s2", true).is_err());
    }
}
