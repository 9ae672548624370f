use clap::{Command, arg};

use crate::shared::reference_args;

pub const RESOLVE_CMD: &str = "resolve";

pub fn create_resolve_cli() -> Command {
    Command::new(RESOLVE_CMD)
        .author("Gens")
        .about("Resolve a region, chromosome or gene name to a window and zoom level")
        .arg_required_else_help(true)
        .args(reference_args())
        .arg(arg!(-r --region <REGION> "Region as chrom:start-end, a chromosome or a gene name").required(true))
}
