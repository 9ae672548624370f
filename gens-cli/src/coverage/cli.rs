use clap::{ArgAction, Command, arg, value_parser};

use crate::shared::reference_args;

pub const COVERAGE_CMD: &str = "coverage";

pub fn create_coverage_cli() -> Command {
    Command::new(COVERAGE_CMD)
        .author("Gens")
        .about("Compute screen coordinates of the coverage and BAF tracks of a sample in a region")
        .arg_required_else_help(true)
        .args(reference_args())
        .arg(arg!(-s --sample <SAMPLE> "Sample id, the file name prefix of its track files").required(true))
        .arg(arg!(-r --region <REGION> "Region as chrom:start-end, a chromosome or a gene name").required(true))
        .arg(
            arg!(--"x-pos" <X_POS> "Pixel column where the region starts")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--"y-pos" <Y_POS> "Pixel row of the top of the plot")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--"x-ampl" <X_AMPL> "Pixel width of the region")
                .required(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--reduce <FRACTION> "Share of records to keep, within (0, 1]")
                .required(false)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--"extra-plot-width" <PIXELS> "Pixels to draw beyond each side of the region")
                .required(false)
                .value_parser(value_parser!(f64)),
        )
        .arg(arg!(--overview "Read the whole-genome overview data").action(ArgAction::SetTrue))
}
