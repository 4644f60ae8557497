//! CLI logic for the colony graph tool.
//!
//! This module reads a catalog and colony record files, builds every colony
//! and prints a summary of its graphs. A colony that fails to build is
//! reported and skipped.

pub mod error_adapter;

mod args;
mod config;
mod error;
mod summary;

pub use args::Args;
pub use config::ConfigError;
pub use error::CliError;

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::{error, info, warn};

use colony_graph::{ColonyBuilder, ColonyError, catalog::StaticCatalog};
use colony_graph_loader::{LoadError, record::ColonyRecord};

use error_adapter::{ColonyDiagnostic, ErrorAdapter, render};

/// Run the colony graph CLI application
///
/// Summaries are written to standard output.
///
/// # Errors
///
/// See [`run_with_output`].
pub fn run(args: &Args) -> Result<(), CliError> {
    let stdout = io::stdout();
    run_with_output(args, &mut stdout.lock())
}

/// Run the CLI, writing colony summaries to `out`.
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - An unreadable or malformed catalog
/// - Failure to write the summary
/// - [`CliError::Failed`] once all inputs are processed, if any colony failed
pub fn run_with_output(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    info!(
        inputs = args.inputs.len(),
        catalog_path = args.catalog;
        "Processing colonies"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let catalog = load_catalog(Path::new(&args.catalog))?;
    let builder = ColonyBuilder::new(app_config);

    let mut total = 0;
    let mut failed = 0;

    for input in &args.inputs {
        let path = Path::new(input);
        let records = match read_records(path) {
            Ok(records) => records,
            Err(err) => {
                total += 1;
                failed += 1;
                error!("{}", render(&ErrorAdapter(&err)));
                continue;
            }
        };

        for (index, record) in records.into_iter().enumerate() {
            total += 1;

            let (label, outcome) = match record {
                Ok(record) => (record.name.clone(), builder.load(&record, &catalog)),
                Err(err) => (
                    format!("{}#{index}", path.display()),
                    Err(ColonyError::from(err)),
                ),
            };

            match outcome {
                Ok(colony) => {
                    summary::write_summary(out, &colony)?;
                    info!(planet = label, export_stem = colony.export_stem(); "Colony built");
                }
                Err(err) => {
                    failed += 1;
                    error!("{}", render(&ColonyDiagnostic::new(&label, &err)));
                }
            }
        }
    }

    if failed > 0 {
        warn!(failed, total; "Some colonies were skipped");
        return Err(CliError::Failed { failed, total });
    }

    info!(colonies = total; "All colonies built");
    Ok(())
}

fn load_catalog(path: &Path) -> Result<StaticCatalog, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog: StaticCatalog =
        serde_json::from_str(&content).map_err(|source| CliError::Catalog {
            path: path.to_path_buf(),
            source,
        })?;

    info!(entries = catalog.len(); "Catalog loaded");
    Ok(catalog)
}

fn read_records(path: &Path) -> Result<Vec<Result<ColonyRecord, LoadError>>, CliError> {
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    colony_graph_loader::parse_records(&source).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })
}
