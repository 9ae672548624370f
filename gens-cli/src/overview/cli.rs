use clap::{Command, arg, value_parser};

use crate::shared::reference_args;

pub const OVERVIEW_CMD: &str = "overview";

pub fn create_overview_cli() -> Command {
    Command::new(OVERVIEW_CMD)
        .author("Gens")
        .about("Lay out the whole-genome overview, optionally with the coverage of a sample")
        .arg_required_else_help(true)
        .args(reference_args())
        .arg(
            arg!(--"x-pos" <X_POS> "Pixel column of the first chromosome")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--"y-pos" <Y_POS> "Pixel row of the overview")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--width <WIDTH> "Combined pixel width of all chromosomes")
                .required(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(arg!(-s --sample <SAMPLE> "Also compute the coverage of this sample").required(false))
        .arg(
            arg!(--height <HEIGHT> "Row height used for hit-testing [default: plot height]")
                .required(false)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--"locate-x" <X> "Pixel column to hit-test")
                .required(false)
                .requires("locate-y")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--"locate-y" <Y> "Pixel row to hit-test")
                .required(false)
                .requires("locate-x")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--margin <PIXELS> "Margin shrinking each box from its left and top edges")
                .required(false)
                .default_value("0")
                .value_parser(value_parser!(f64)),
        )
}
