// Command-line surface and dispatch

use std::path::Path;

use clap::Parser;
use tracing::info;

use crate::error::CliResult;
use swaggregate_specs::SpecAggregator;

/// Swaggregate - merge swagger spec fragments via include directives
#[derive(Parser, Debug)]
#[command(name = "swaggregate")]
#[command(bin_name = "swaggregate")]
#[command(about = "Aggregate swagger spec files from multiple, local packages")]
#[command(version)]
pub struct Cli {
    /// The main swagger file to load
    #[arg(short, long, value_name = "PATH", default_value = "main.yaml")]
    pub main: String,

    /// The name of the yaml file to output to
    #[arg(short, long, value_name = "PATH", default_value = "output.yaml")]
    pub out: String,
}

/// Load the root spec, resolve every include, and write the merged document.
///
/// Nothing is written until aggregation has fully succeeded, so a failed run
/// leaves no partial output behind.
pub fn run(cli: &Cli) -> CliResult<()> {
    let namespace = SpecAggregator::aggregate(Path::new(&cli.main))?;
    namespace.write_to(Path::new(&cli.out))?;
    info!(main = cli.main.as_str(), out = cli.out.as_str(), "aggregation complete");
    Ok(())
}
