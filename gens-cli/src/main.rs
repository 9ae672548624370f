mod chrom_info;
mod config;
mod coverage;
mod overview;
mod resolve;
mod shared;

use anyhow::Result;
use clap::{ArgAction, ArgMatches, Command, arg};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "gens";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Gens")
        .about("Resolve genomic regions and turn copy-number tracks into screen coordinates.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "Log more; repeat for debug output")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(resolve::cli::create_resolve_cli())
        .subcommand(chrom_info::cli::create_chrom_info_cli())
        .subcommand(coverage::cli::create_coverage_cli())
        .subcommand(overview::cli::create_overview_cli())
}

fn init_logging(matches: &ArgMatches) {
    let level = match matches.get_count("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();
    init_logging(&matches);

    match matches.subcommand() {
        //
        // RESOLVE
        //
        Some((resolve::cli::RESOLVE_CMD, matches)) => {
            resolve::handlers::run_resolve(matches)?;
        }

        //
        // CHROMOSOME INFO
        //
        Some((chrom_info::cli::CHROM_INFO_CMD, matches)) => {
            chrom_info::handlers::run_chrom_info(matches)?;
        }

        //
        // COVERAGE
        //
        Some((coverage::cli::COVERAGE_CMD, matches)) => {
            coverage::handlers::run_coverage(matches)?;
        }

        //
        // OVERVIEW
        //
        Some((overview::cli::OVERVIEW_CMD, matches)) => {
            overview::handlers::run_overview(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
