//! Error type for CLI operations.

use std::{io, path::PathBuf};

use thiserror::Error;

use placement::PlacementError;

use crate::config::ConfigError;

/// The main error type for the CLI.
///
/// Only the `Placement` variant carries diagnostics with spans; every other
/// variant is reported as a plain message.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid manifest {}: {message}", .path.display())]
    Manifest { path: PathBuf, message: String },

    #[error(transparent)]
    Placement(#[from] PlacementError),
}
