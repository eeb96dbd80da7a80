//! Command-line argument definitions for the Placement CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, output formatting, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Placement ordering tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input manifest
    #[arg(help = "Path to the input manifest (TOML)")]
    pub input: String,

    /// Path to the output file, stdout if omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path prefix for every element, overriding the configuration
    #[arg(long)]
    pub base_path: Option<String>,

    /// Print each element's value next to its path
    #[arg(long)]
    pub values: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
