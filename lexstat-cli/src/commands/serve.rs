//! Serve command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use lexstat_engine::{load_vocabulary, AnalysisServer, AnalysisSession, TcpWordSource};
use std::path::PathBuf;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Word service address (overrides config)
    #[arg(short, long, value_name = "ADDR", env = "LEXSTAT_SOURCE")]
    pub source: Option<String>,

    /// Interface to listen on
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Analysis service port (overrides config)
    #[arg(short, long, env = "LEXSTAT_PORT")]
    pub port: Option<u16>,

    /// Archaic vocabulary word list (overrides config)
    #[arg(short, long, value_name = "FILE")]
    pub archaic: Option<PathBuf>,

    /// Connection handler threads (overrides config, 0 = one per CPU)
    #[arg(short, long)]
    pub workers: Option<usize>,
}

impl ServeArgs {
    /// Resolve the effective configuration from file and flags
    pub fn resolve_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load(self.config.as_deref())?;

        if let Some(source) = &self.source {
            config.source.address = source.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = &self.archaic {
            config.vocabulary.path = path.clone();
        }
        if let Some(workers) = self.workers {
            config.server.workers = workers;
        }

        config.validate()?;
        Ok(config)
    }

    /// Execute the serve command
    pub fn execute(&self) -> Result<()> {
        let config = self.resolve_config()?;

        // The session never starts with a partial vocabulary
        let vocabulary = load_vocabulary(&config.vocabulary.path)
            .context("Failed to load archaic vocabulary")?;

        let source = TcpWordSource::new(config.source.address.clone());
        let session = AnalysisSession::start(vocabulary, source)
            .context("Failed to start ingestion")?;

        let workers = config.server.effective_workers();
        let server = AnalysisServer::bind(
            (self.host.as_str(), config.server.port),
            session.reporter(),
            workers,
        )
        .with_context(|| format!("Failed to bind port {}", config.server.port))?;

        log::info!(
            "Serving analysis on port {} with {} workers, ingesting from {}",
            config.server.port,
            workers,
            config.source.address
        );
        server.serve()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args() -> ServeArgs {
        ServeArgs {
            config: None,
            source: None,
            host: "127.0.0.1".to_string(),
            port: None,
            archaic: None,
            workers: None,
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[source]\naddress = \"reader:50051\"\n[server]\nport = 7000\nworkers = 2\n"
        )
        .unwrap();

        let serve = ServeArgs {
            config: Some(file.path().to_path_buf()),
            port: Some(7100),
            ..args()
        };
        let config = serve.resolve_config().unwrap();

        assert_eq!(config.source.address, "reader:50051");
        assert_eq!(config.server.port, 7100);
        assert_eq!(config.server.workers, 2);
    }

    #[test]
    fn test_missing_vocabulary_is_fatal() {
        let serve = ServeArgs {
            archaic: Some(PathBuf::from("/nonexistent/archaic_words.txt")),
            port: Some(0),
            ..args()
        };

        let error = serve.execute().unwrap_err();
        assert!(error.to_string().contains("Failed to load archaic vocabulary"));
    }
}
