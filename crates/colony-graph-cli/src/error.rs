//! Error type for the colony graph CLI.

use std::{io, path::PathBuf};

use thiserror::Error;

use colony_graph_loader::LoadError;

use crate::config::ConfigError;

/// Errors raised while running the CLI.
///
/// `Read` and `Input` concern a single input file; [`run`](crate::run)
/// reports them and moves on to the next file. The other variants end the
/// run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid catalog {}: {source}", path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid colony file {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("{failed} of {total} colonies failed to build")]
    Failed { failed: usize, total: usize },
}
