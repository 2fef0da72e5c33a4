//! Engine error types

use crate::ingestor::IngestState;
use thiserror::Error;

/// Engine-level errors
///
/// Source errors end an ingestion run. They are logged and reflected in the
/// session state, never returned to report callers.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The word source could not be reached
    #[error("word source {address} unavailable: {reason}")]
    SourceUnavailable {
        /// Address or path of the source
        address: String,
        /// Why the source could not be reached
        reason: String,
    },

    /// The word source was reached but the stream cannot continue
    #[error("word stream fault: {0}")]
    StreamFault(String),

    /// Startup configuration could not be loaded
    #[error("configuration error in {path}: {error}")]
    Configuration {
        /// The configuration file path
        path: String,
        /// The specific error that occurred
        error: String,
    },

    /// An ingestor only runs once
    #[error("ingestor already ran (state: {0})")]
    AlreadyRan(IngestState),

    /// The ingestion thread panicked
    #[error("ingestion thread panicked")]
    IngestPanicked,

    /// I/O error on the serving side
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed protocol message
    #[error("protocol error: {0}")]
    Protocol(#[from] serde_json::Error),
}

impl EngineError {
    /// Whether this error ends an ingestion run as a source failure
    pub fn is_source_failure(&self) -> bool {
        matches!(
            self,
            EngineError::SourceUnavailable { .. } | EngineError::StreamFault(_)
        )
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_display() {
        let error = EngineError::SourceUnavailable {
            address: "127.0.0.1:50051".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "word source 127.0.0.1:50051 unavailable: connection refused"
        );
        assert!(error.is_source_failure());
    }

    #[test]
    fn test_configuration_display() {
        let error = EngineError::Configuration {
            path: "data/archaic_words.txt".to_string(),
            error: "No such file or directory".to_string(),
        };
        assert!(error.to_string().starts_with("configuration error in data/archaic_words.txt"));
        assert!(!error.is_source_failure());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: EngineError = io.into();
        assert!(matches!(error, EngineError::Io(_)));
        assert!(error.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_already_ran_names_state() {
        let error = EngineError::AlreadyRan(IngestState::Finished);
        assert_eq!(error.to_string(), "ingestor already ran (state: finished)");
    }
}
