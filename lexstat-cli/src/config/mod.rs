//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Word source configuration
    #[serde(default)]
    pub source: SourceConfig,

    /// Analysis service configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Archaic vocabulary configuration
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

/// Where words are pulled from
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    /// Address of the word service
    pub address: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:50051".to_string(),
        }
    }
}

/// How the analysis interface is served
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Listening port
    pub port: u16,

    /// Number of connection handler threads (0 = one per CPU)
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 50052,
            workers: 10,
        }
    }
}

impl ServerConfig {
    /// Worker count with 0 resolved to the number of CPUs
    pub fn effective_workers(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get()
        } else {
            self.workers
        }
    }
}

/// Where the archaic word list lives
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Newline-delimited word list
    pub path: PathBuf,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/archaic_words.txt"),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject values no session can start with
    pub fn validate(&self) -> Result<(), CliError> {
        if self.source.address.trim().is_empty() {
            return Err(CliError::ConfigError(
                "source.address must not be empty".to_string(),
            ));
        }
        if self.vocabulary.path.as_os_str().is_empty() {
            return Err(CliError::ConfigError(
                "vocabulary.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
