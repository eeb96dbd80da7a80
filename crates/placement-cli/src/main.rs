//! Command-line entry point for ordering manifests.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};

use placement_cli::{Args, CliError, error_adapter::to_reportables};

/// Configure `env_logger`, falling back to `warn` for an unknown level name.
fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).ok();

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter.unwrap_or(LevelFilter::Warn))
        .init();

    if filter.is_none() {
        warn!(log_level = level; "Unknown log level, logging warnings only");
    }
}

/// Log every element-level diagnostic of `err` as a rendered miette report.
fn report(err: &CliError) {
    let reporter = miette::GraphicalReportHandler::new();

    for reportable in to_reportables(err) {
        let mut rendered = String::new();
        match reporter.render_report(&mut rendered, &reportable) {
            Ok(()) => error!("{rendered}"),
            Err(_) => error!("{reportable}"),
        }
    }
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    info!(manifest = args.input; "Ordering manifest");
    match placement_cli::run(&args) {
        Ok(elements) => info!(manifest = args.input, elements; "Manifest ordered"),
        Err(err) => {
            report(&err);
            process::exit(1);
        }
    }
}
