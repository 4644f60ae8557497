//! Colony graph CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use colony_graph_cli::{
    Args, CliError,
    error_adapter::{ErrorAdapter, render},
};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting colony-graph");
    debug!(args:?; "Parsed arguments");

    match colony_graph_cli::run(&args) {
        Ok(()) => info!("Completed successfully"),
        // Each failed colony has already been reported.
        Err(err @ CliError::Failed { .. }) => {
            error!("{err}");
            process::exit(1);
        }
        Err(err) => {
            error!("{}", render(&ErrorAdapter(&err)));
            process::exit(1);
        }
    }
}
