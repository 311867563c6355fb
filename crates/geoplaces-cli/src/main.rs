//! GeoPlaces CLI - Command-line interface
//!
//! Browses the place and municipal data sets and runs the geographic
//! queries of the geo engine against them.

mod cli;
mod commands;
mod data;
mod errors;
mod output;
mod output_types;

use clap::Parser;
use cli::Cli;
use errors::CliError;
use output::OutputWriter;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays parseable in --json mode
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let output = OutputWriter::new(cli.json);

    let result = tokio::runtime::Runtime::new()
        .map_err(anyhow::Error::from)
        .and_then(|runtime| runtime.block_on(commands::execute(cli)));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(cli_err) if !output.is_json() => cli_err.display(),
                _ => output.error(format!("{:#}", err)),
            }
            ExitCode::FAILURE
        }
    }
}
