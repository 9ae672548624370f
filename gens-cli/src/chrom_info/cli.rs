use clap::{Command, arg};

use crate::shared::reference_args;

pub const CHROM_INFO_CMD: &str = "chrom-info";

pub fn create_chrom_info_cli() -> Command {
    Command::new(CHROM_INFO_CMD)
        .author("Gens")
        .about("Show the size and genome scale of a chromosome")
        .arg_required_else_help(true)
        .args(reference_args())
        .arg(arg!(--chrom <CHROM> "Chromosome name, e.g. 1, X or chrMT").required(true))
}
