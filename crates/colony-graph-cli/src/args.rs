//! Command-line argument definitions for the colony graph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the colony records and catalog to read,
//! the configuration file, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the colony graph tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Paths to colony record files (JSON, one record or an array)
    #[arg(required = true, help = "Paths to the colony record files")]
    pub inputs: Vec<String>,

    /// Path to the catalog file (JSON)
    #[arg(short = 'k', long)]
    pub catalog: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
