//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = Self::generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!(
            "✓ Configuration template written to {}",
            self.output.display()
        );
        println!("Start the service with:");
        println!("   lexstat serve --config {}", self.output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# lexstat configuration\n\
             #\n\
             # source.address     word service to ingest from\n\
             # server.port        analysis service port\n\
             # server.workers     connection handler threads (0 = one per CPU)\n\
             # vocabulary.path    newline-delimited archaic word list\n\n{body}"
        ))
    }
}
