use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::Serialize;

use gens_core::models::{Chromosome, ChromosomeBox};
use gens_graph::{ChromosomePosition, CoverageRequest, CoverageResult, get_multiple_coverages, layout, locate};

use crate::coverage::handlers::open_source;
use crate::shared::{load_reference, print_json};

#[derive(Debug, Serialize)]
pub struct OverviewResult {
    pub boxes: BTreeMap<Chromosome, ChromosomeBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub located: Option<Chromosome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<BTreeMap<Chromosome, CoverageResult>>,
}

pub fn run_overview(matches: &ArgMatches) -> Result<()> {
    print_json(&overview_from_matches(matches)?)
}

pub fn overview_from_matches(matches: &ArgMatches) -> Result<OverviewResult> {
    let x_pos = *matches.get_one::<f64>("x-pos").context("--x-pos is required.")?;
    let y_pos = *matches.get_one::<f64>("y-pos").context("--y-pos is required.")?;
    let width = *matches.get_one::<f64>("width").context("--width is required.")?;
    let margin = matches.get_one::<f64>("margin").copied().unwrap_or(0.0);

    let (config, reference) = load_reference(matches)?;
    let boxes = layout(x_pos, y_pos, width, reference.build, &reference.catalog)
        .context("Failed to lay out the overview")?;

    let height = matches
        .get_one::<f64>("height")
        .copied()
        .unwrap_or(config.plot.params.plot_height);
    let located = match (matches.get_one::<f64>("locate-x"), matches.get_one::<f64>("locate-y")) {
        (Some(x), Some(y)) => locate(&boxes, height, *x, *y, margin),
        _ => None,
    };

    let coverage = match matches.get_one::<String>("sample") {
        Some(sample) => {
            let source = open_source(&config, sample, true)?;
            let request = CoverageRequest {
                region: String::new(),
                build: reference.build,
                x_pos,
                y_pos,
                x_ampl: width,
                reduce_data: config.plot.reduce_data,
                overview: true,
                plot: config.plot.params,
            };
            let positions = ChromosomePosition::from_layout(&boxes);
            let results = get_multiple_coverages(
                &request,
                &positions,
                &reference.catalog,
                &reference.genes,
                source.as_ref(),
            )
            .with_context(|| format!("Failed to get overview coverage of sample {}", sample))?;
            Some(results)
        }
        None => None,
    };

    Ok(OverviewResult {
        boxes,
        located,
        coverage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::coverage::handlers::tests::write_overview_sample;
    use crate::overview::cli::create_overview_cli;

    #[rstest]
    fn test_overview_layout_and_locate() {
        let matches = create_overview_cli()
            .try_get_matches_from([
                "overview",
                "--config",
                "../tests/data/gens.toml",
                "--build",
                "hg38",
                "--x-pos",
                "0",
                "--y-pos",
                "0",
                "--width",
                "1000",
                "--locate-x",
                "5",
                "--locate-y",
                "5",
            ])
            .unwrap();

        let result = overview_from_matches(&matches).unwrap();
        assert_eq!(result.boxes.len(), 25);
        assert_eq!(result.located, Some(Chromosome::Chr1));
        assert!(result.coverage.is_none());
    }

    #[rstest]
    fn test_locate_requires_both_coordinates() {
        let result = create_overview_cli().try_get_matches_from([
            "overview",
            "--config",
            "../tests/data/gens.toml",
            "--build",
            "38",
            "--x-pos",
            "0",
            "--y-pos",
            "0",
            "--width",
            "1000",
            "--locate-x",
            "5",
        ]);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_overview_with_sample() {
        let tempdir = tempfile::tempdir().unwrap();
        let config = write_overview_sample(tempdir.path());
        let matches = create_overview_cli()
            .try_get_matches_from([
                "overview",
                "--config",
                config.to_str().unwrap(),
                "--build",
                "38",
                "--x-pos",
                "0",
                "--y-pos",
                "0",
                "--width",
                "2000",
                "--sample",
                "s1",
            ])
            .unwrap();

        let result = overview_from_matches(&matches).unwrap();
        let coverage = result.coverage.unwrap();
        assert_eq!(coverage.len(), 25);
        assert_eq!(coverage[&Chromosome::Chr1].data.log2.len(), 2);
        assert_eq!(coverage[&Chromosome::Chr1].data.baf.len(), 1);
        assert!(coverage[&Chromosome::X].no_data);
        assert_eq!(result.located, None);
    }
}
