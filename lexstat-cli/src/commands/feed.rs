//! Feed command implementation

use crate::input::{read_words, resolve_patterns};
use anyhow::{Context, Result};
use clap::Args;
use lexstat_engine::WordServer;

/// Arguments for the feed command
#[derive(Debug, Args)]
pub struct FeedArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Interface to listen on
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Word service port
    #[arg(short, long, default_value_t = 50051)]
    pub port: u16,
}

impl FeedArgs {
    /// Execute the feed command
    pub fn execute(&self) -> Result<()> {
        let files = resolve_patterns(&self.input)?;
        let words = read_words(&files)?;
        log::info!("Loaded {} words from {} file(s)", words.len(), files.len());

        let server = WordServer::bind((self.host.as_str(), self.port), words)
            .with_context(|| format!("Failed to bind port {}", self.port))?;
        server.serve()?;
        Ok(())
    }
}
