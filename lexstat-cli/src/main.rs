//! lexstat command-line entry point

use anyhow::Result;
use clap::Parser;
use lexstat_cli::commands::{init_logging, Commands};

/// Streaming text analytics: running word, sentence and archaic-word statistics
#[derive(Debug, Parser)]
#[command(name = "lexstat", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    log::debug!("Arguments: {:?}", cli);

    cli.command.execute(cli.quiet)
}
