//! CLI logic for the Placement ordering tool.
//!
//! This module reads a manifest of elements, resolves their positions, and
//! prints one line per element in resolved order.

pub mod error_adapter;

mod args;
mod config;
mod error;
mod manifest;

pub use args::Args;
pub use config::{AppConfig, ConfigError, OutputConfig};
pub use error::CliError;
pub use manifest::Manifest;

use std::{
    fs,
    io::{self, Write},
};

use log::{debug, info};

/// Run the Placement CLI application
///
/// This function orders the elements of the input manifest and writes one
/// line per element to the output file, or to stdout if none is given.
/// Returns the number of elements written.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed manifests
/// - Invalid position directives
/// - Unresolved position references
pub fn run(args: &Args) -> Result<usize, CliError> {
    debug!(
        input_path = args.input,
        output_path:? = args.output;
        "Ordering manifest"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let base_path = args
        .base_path
        .as_deref()
        .unwrap_or(app_config.output().base_path());
    let show_values = args.values || app_config.output().show_values();

    // Read and order the manifest
    let manifest = Manifest::load(&args.input)?;
    let sorted = manifest.into_builder().build()?.into_sorted()?;

    let mut rendered = String::new();
    for (key, value) in &sorted {
        rendered.push_str(&element_path(base_path, key.as_str()));
        if let (true, Some(value)) = (show_values, value) {
            rendered.push_str(" = ");
            rendered.push_str(&value.to_string());
        }
        rendered.push('\n');
    }

    // Write output
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(output_file = path, elements = sorted.len(); "Order written");
        }
        None => io::stdout().lock().write_all(rendered.as_bytes())?,
    }

    Ok(sorted.len())
}

/// Join a base path and an element key into the element's path.
fn element_path(base_path: &str, key: &str) -> String {
    let base_path = base_path.trim_end_matches('/');
    if base_path.is_empty() {
        key.to_string()
    } else {
        format!("{base_path}/{key}")
    }
}
