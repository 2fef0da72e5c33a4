//! Ingestion and serving for lexstat
//!
//! This crate drives a [`WordSource`] into the shared statistics of
//! `lexstat-core` on a background thread, and exposes the resulting analysis
//! over a small line-delimited JSON protocol.

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod ingestor;
pub mod protocol;
pub mod server;
pub mod session;
pub mod source;
pub mod vocabulary;

// Re-export key types
pub use client::AnalysisClient;
pub use error::{EngineError, Result};
pub use ingestor::{CancelToken, IngestState, IngestStatus, IngestSummary, Ingestor};
pub use server::{AnalysisServer, WordServer};
pub use session::AnalysisSession;
pub use source::{
    ChannelWordSource, FileWordSource, MemoryWordSource, ReaderWordSource, TcpWordSource,
    WordResponse, WordSource,
};
pub use vocabulary::load_vocabulary;

// Re-export from core for convenience
pub use lexstat_core::{AnalysisReporter, AnalysisResult, ArchaicVocabulary, RunningStats};
