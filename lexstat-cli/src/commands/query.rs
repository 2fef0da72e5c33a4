//! Query command implementation

use crate::output::{formatter, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use lexstat_engine::AnalysisClient;
use std::io;

/// Arguments for the query command
#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Analysis service address
    #[arg(short, long, value_name = "ADDR", default_value = "127.0.0.1:50052")]
    pub addr: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl QueryArgs {
    /// Execute the query command
    pub fn execute(&self) -> Result<()> {
        let mut client = AnalysisClient::connect(self.addr.as_str())
            .with_context(|| format!("Failed to connect to analysis service at {}", self.addr))?;
        let result = client.get_analysis().context("Analysis request failed")?;

        let mut out = formatter(self.format, io::stdout());
        out.write_report(&result)?;
        out.finish()
    }
}
