//! Command implementations

mod cities;
mod config;
mod distance;
mod edit;
mod nearby;
mod places;
mod stats;
mod tools;

use crate::cli::{Cli, Commands};
use crate::data;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = data::load_config(&cli)?;

    match cli.command {
        Commands::Distance(args) => distance::execute(args, &output),
        Commands::Nearby(args) => nearby::execute(args, config, &output).await,
        Commands::Places(args) => places::execute(args, &config, &output).await,
        Commands::Stats(args) => stats::execute(args, &config, &output).await,
        Commands::Cities(args) => cities::execute(args, &config, &output).await,
        Commands::Bbox(args) => tools::bbox(args, &output),
        Commands::Dms(args) => tools::dms(args, &output),
        Commands::Validate(args) => tools::validate(args, &output),
        Commands::AddPlace(args) => edit::add(args, &config, &output).await,
        Commands::EditPlace(args) => edit::edit(args, &config, &output).await,
        Commands::RemovePlace(args) => edit::remove(args, &config, &output).await,
        Commands::Config => config::execute(&config, &output),
    }
}
