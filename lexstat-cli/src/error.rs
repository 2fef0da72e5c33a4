//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Invalid file pattern
    InvalidPattern(String),
    /// No input files matched
    NoInput,
    /// Configuration error
    ConfigError(String),
    /// Ingestion ended with a source failure
    IngestionFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::NoInput => write!(f, "No files found matching the provided patterns"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::IngestionFailed(msg) => write!(f, "Ingestion failed: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_no_input_error_display() {
        assert_eq!(
            CliError::NoInput.to_string(),
            "No files found matching the provided patterns"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid port".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid port");
    }

    #[test]
    fn test_ingestion_failed_display() {
        let error = CliError::IngestionFailed("connection reset".to_string());
        assert_eq!(error.to_string(), "Ingestion failed: connection reset");
    }

    #[test]
    fn test_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::NoInput.into());
        let error = failure.unwrap_err();
        assert!(error.downcast_ref::<CliError>().is_some());
    }
}
