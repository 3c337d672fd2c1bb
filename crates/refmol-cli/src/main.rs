mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("refmol v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let settings = config::resolve(&cli)?;
    debug!("Effective settings: {:?}", &settings);

    let result = commands::print::run(&cli, &settings);
    match &result {
        Ok(_) => info!("Coordinate report completed."),
        Err(e) => error!("Command failed: {}", e),
    }
    result
}
