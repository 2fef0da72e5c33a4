//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod analyze;
pub mod feed;
pub mod generate_config;
pub mod query;
pub mod serve;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Stream words from local files and print the final statistics
    Analyze(analyze::AnalyzeArgs),

    /// Ingest from a word service and serve the analysis interface
    Serve(serve::ServeArgs),

    /// Fetch the current analysis from a running service
    Query(query::QueryArgs),

    /// Serve words from local files as a word service
    Feed(feed::FeedArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(quiet),
            Commands::Serve(args) => args.execute(),
            Commands::Query(args) => args.execute(),
            Commands::Feed(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when running under a test harness
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let analyze = Commands::Analyze(analyze::AnalyzeArgs {
            input: vec!["test.txt".to_string()],
            archaic: Some(PathBuf::from("archaic.txt")),
            format: OutputFormat::Text,
            output: None,
        });

        let debug_str = format!("{:?}", analyze);
        assert!(debug_str.contains("Analyze"));
        assert!(debug_str.contains("test.txt"));
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(1, false);
        init_logging(3, false);
        init_logging(0, true);
    }
}
