//! A running analysis session
//!
//! Owns the shared statistics and the background thread that ingests into
//! them. Reports can be taken from any thread for the whole lifetime of the
//! session, including after ingestion has finished or failed.

use crate::error::{EngineError, Result};
use crate::ingestor::{CancelToken, IngestState, IngestStatus, IngestSummary, Ingestor};
use crate::source::WordSource;
use lexstat_core::{AnalysisReporter, AnalysisResult, ArchaicVocabulary, RunningStats};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

const INGEST_THREAD_NAME: &str = "lexstat-ingest";

/// Statistics plus the ingestion task feeding them
#[derive(Debug)]
pub struct AnalysisSession {
    reporter: AnalysisReporter,
    status: IngestStatus,
    cancel: CancelToken,
    handle: JoinHandle<Result<IngestSummary>>,
}

impl AnalysisSession {
    /// Spawn ingestion of `source` on a dedicated thread
    pub fn start<S>(vocabulary: ArchaicVocabulary, mut source: S) -> Result<Self>
    where
        S: WordSource + 'static,
    {
        let stats = Arc::new(RunningStats::new());
        let cancel = CancelToken::new();
        let mut ingestor =
            Ingestor::new(Arc::clone(&stats), Arc::new(vocabulary)).with_cancel(cancel.clone());
        let status = ingestor.status();

        let unwind_status = status.clone();
        let handle = thread::Builder::new()
            .name(INGEST_THREAD_NAME.to_string())
            .spawn(move || {
                let _guard = FailOnUnwind(unwind_status);
                ingestor.run(&mut source)
            })?;

        Ok(Self {
            reporter: AnalysisReporter::new(stats),
            status,
            cancel,
            handle,
        })
    }

    /// A reporter over this session's statistics
    pub fn reporter(&self) -> AnalysisReporter {
        self.reporter.clone()
    }

    /// Report on everything ingested so far
    pub fn report(&self) -> AnalysisResult {
        self.reporter.report()
    }

    /// Current ingestion state
    pub fn state(&self) -> IngestState {
        self.status.get()
    }

    /// Ask ingestion to stop before its next pull
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the ingestion thread has exited
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for ingestion to end and return how it ended
    pub fn join(self) -> Result<IngestSummary> {
        self.handle
            .join()
            .map_err(|_| EngineError::IngestPanicked)?
    }
}

// Marks the ingestor failed if its thread unwinds mid-run
struct FailOnUnwind(IngestStatus);

impl Drop for FailOnUnwind {
    fn drop(&mut self) {
        if thread::panicking() {
            self.0.set(IngestState::Failed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ChannelWordSource, MemoryWordSource, WordResponse};

    struct PanickingSource;

    impl WordSource for PanickingSource {
        fn next_word(&mut self) -> Result<WordResponse> {
            panic!("source exploded");
        }
    }

    #[test]
    fn test_session_runs_to_completion() {
        let vocabulary = ArchaicVocabulary::new(["thou", "hast"]);
        let source = MemoryWordSource::new(["Thou", "hast", "come."]);

        let session = AnalysisSession::start(vocabulary, source).unwrap();
        let reporter = session.reporter();
        let summary = session.join().unwrap();

        assert_eq!(summary.state, IngestState::Finished);
        let result = reporter.report();
        assert_eq!(result.archaic_word_counts.len(), 2);
        assert_eq!(result.avg_sentence_length, 3.0);
    }

    #[test]
    fn test_report_while_source_blocks() {
        let (sender, source) = ChannelWordSource::new();
        let session = AnalysisSession::start(ArchaicVocabulary::default(), source).unwrap();

        assert_eq!(session.report(), AnalysisResult::default());
        sender.send("ab".to_string()).unwrap();
        sender.send("cde".to_string()).unwrap();
        drop(sender);

        let reporter = session.reporter();
        let summary = session.join().unwrap();
        assert_eq!(summary.words, 2);
        assert_eq!(reporter.report().avg_word_length, 2.5);
    }

    #[test]
    fn test_cancel_stops_ingestion() {
        let (sender, source) = ChannelWordSource::new();
        let session = AnalysisSession::start(ArchaicVocabulary::default(), source).unwrap();

        session.cancel();
        // Unblock a pending pull so the token is observed; the receiver may
        // already be gone if the token was seen first
        let _ = sender.send("last".to_string());

        let summary = session.join().unwrap();
        assert_eq!(summary.state, IngestState::Cancelled);
        assert!(summary.words <= 1);
    }

    #[test]
    fn test_panicking_source_marks_failed() {
        let session = AnalysisSession::start(ArchaicVocabulary::default(), PanickingSource).unwrap();
        let status = session.status.clone();

        assert!(matches!(session.join(), Err(EngineError::IngestPanicked)));
        assert_eq!(status.get(), IngestState::Failed);
    }
}
