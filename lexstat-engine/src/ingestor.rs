//! The ingestion loop
//!
//! An [`Ingestor`] pulls words from a [`WordSource`] until end-of-stream or a
//! source failure, classifying each word and folding it into the shared
//! [`RunningStats`]. It runs at most once:
//!
//! ```text
//! Idle -> Running -> Finished | Failed | Cancelled
//! ```

use crate::error::{EngineError, Result};
use crate::source::WordSource;
use lexstat_core::{ArchaicVocabulary, RunningStats, SentenceAccumulator};
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

/// Lifecycle of an ingestion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IngestState {
    /// Created, not started
    Idle,
    /// Pulling words
    Running,
    /// The source reported end-of-stream
    Finished,
    /// The source failed; statistics recorded so far remain valid
    Failed,
    /// Stopped through a [`CancelToken`]
    Cancelled,
}

impl IngestState {
    /// Whether no further words will be recorded
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            IngestState::Finished | IngestState::Failed | IngestState::Cancelled
        )
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => IngestState::Idle,
            1 => IngestState::Running,
            2 => IngestState::Finished,
            3 => IngestState::Failed,
            _ => IngestState::Cancelled,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            IngestState::Idle => 0,
            IngestState::Running => 1,
            IngestState::Finished => 2,
            IngestState::Failed => 3,
            IngestState::Cancelled => 4,
        }
    }
}

impl fmt::Display for IngestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IngestState::Idle => "idle",
            IngestState::Running => "running",
            IngestState::Finished => "finished",
            IngestState::Failed => "failed",
            IngestState::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Shared view of an ingestor's state
///
/// Lock-free; reading it never touches the statistics lock.
#[derive(Debug, Clone)]
pub struct IngestStatus(Arc<AtomicU8>);

impl IngestStatus {
    fn new() -> Self {
        Self(Arc::new(AtomicU8::new(IngestState::Idle.as_u8())))
    }

    /// Current state
    pub fn get(&self) -> IngestState {
        IngestState::from_u8(self.0.load(Ordering::Acquire))
    }

    pub(crate) fn set(&self, state: IngestState) {
        self.0.store(state.as_u8(), Ordering::Release);
    }
}

/// Cooperative stop signal for a running ingestor
///
/// Checked between words. A pull that is already blocked on the source is not
/// interrupted.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create an untriggered token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the ingestor to stop before its next pull
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether a stop was requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// What a single run ingested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    /// Words recorded during this run
    pub words: u64,
    /// Sentences closed during this run
    pub sentences: u64,
    /// Terminal state the run ended in
    pub state: IngestState,
}

/// Drives a word source into shared statistics
#[derive(Debug)]
pub struct Ingestor {
    stats: Arc<RunningStats>,
    vocabulary: Arc<ArchaicVocabulary>,
    sentence: SentenceAccumulator,
    status: IngestStatus,
    cancel: CancelToken,
}

impl Ingestor {
    /// Create an idle ingestor writing into `stats`
    pub fn new(stats: Arc<RunningStats>, vocabulary: Arc<ArchaicVocabulary>) -> Self {
        Self {
            stats,
            vocabulary,
            sentence: SentenceAccumulator::new(),
            status: IngestStatus::new(),
            cancel: CancelToken::new(),
        }
    }

    /// Attach a cancellation token
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Handle for observing this ingestor's state from other threads
    pub fn status(&self) -> IngestStatus {
        self.status.clone()
    }

    /// Current state
    pub fn state(&self) -> IngestState {
        self.status.get()
    }

    /// Classify one raw word and fold it into the statistics
    ///
    /// Returns true when the word closed a sentence. Every input is valid: an
    /// empty word counts with length 0 and is never archaic.
    pub fn ingest_word(&mut self, raw: &str) -> bool {
        let word = raw.trim();
        log::debug!("Analyzed word: {word}");

        self.stats.record_word(word, self.vocabulary.lookup(word));
        self.sentence.append(word);

        if SentenceAccumulator::is_sentence_terminal(word) {
            let length = self.sentence.flush();
            self.stats.record_sentence_end(length);
            true
        } else {
            false
        }
    }

    /// Pull words from `source` until end-of-stream, failure or cancellation
    ///
    /// A source error moves the ingestor to [`IngestState::Failed`] and is
    /// returned; nothing recorded before it is rolled back. An ingestor that
    /// has already run does not touch the source again.
    pub fn run<S: WordSource + ?Sized>(&mut self, source: &mut S) -> Result<IngestSummary> {
        let state = self.status.get();
        if state != IngestState::Idle {
            return Err(EngineError::AlreadyRan(state));
        }

        self.status.set(IngestState::Running);
        log::info!("Ingestion started");

        let mut words = 0;
        let mut sentences = 0;
        let state = loop {
            if self.cancel.is_cancelled() {
                break IngestState::Cancelled;
            }

            match source.next_word() {
                Ok(response) if response.eof => break IngestState::Finished,
                Ok(response) => {
                    words += 1;
                    if self.ingest_word(&response.word) {
                        sentences += 1;
                    }
                }
                Err(e) => {
                    log::error!("Ingestion failed after {words} words: {e}");
                    self.status.set(IngestState::Failed);
                    return Err(e);
                }
            }
        };

        if !self.sentence.is_empty() {
            log::debug!(
                "Discarding open sentence of {} words at end of stream",
                self.sentence.len()
            );
        }

        self.status.set(state);
        log::info!("Ingestion {state}: {words} words, {sentences} sentences");
        Ok(IngestSummary {
            words,
            sentences,
            state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MemoryWordSource, WordResponse};

    fn ingestor(vocabulary: &[&str]) -> (Arc<RunningStats>, Ingestor) {
        let stats = Arc::new(RunningStats::new());
        let vocabulary = Arc::new(ArchaicVocabulary::new(vocabulary));
        (Arc::clone(&stats), Ingestor::new(stats, vocabulary))
    }

    struct FailingSource {
        words: MemoryWordSource,
    }

    impl WordSource for FailingSource {
        fn next_word(&mut self) -> Result<WordResponse> {
            let response = self.words.next_word()?;
            if response.eof {
                Err(EngineError::StreamFault("connection reset".to_string()))
            } else {
                Ok(response)
            }
        }
    }

    #[test]
    fn test_state_transitions_to_finished() {
        let (_, mut ingestor) = ingestor(&[]);
        assert_eq!(ingestor.state(), IngestState::Idle);

        let mut source = MemoryWordSource::new(["one", "two."]);
        let summary = ingestor.run(&mut source).unwrap();

        assert_eq!(summary.state, IngestState::Finished);
        assert_eq!(summary.words, 2);
        assert_eq!(summary.sentences, 1);
        assert_eq!(ingestor.state(), IngestState::Finished);
    }

    #[test]
    fn test_words_are_trimmed() {
        let (stats, mut ingestor) = ingestor(&["thou"]);
        ingestor.ingest_word("  Thou\n");
        ingestor.ingest_word("\t");

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.word_count, 2);
        assert_eq!(snapshot.total_word_length, 4);
        assert_eq!(snapshot.archaic_word_counts["thou"], 1);
    }

    #[test]
    fn test_trailing_open_sentence_is_not_counted() {
        let (stats, mut ingestor) = ingestor(&[]);
        let mut source = MemoryWordSource::new(["Done.", "and", "then"]);
        ingestor.run(&mut source).unwrap();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.word_count, 3);
        assert_eq!(snapshot.sentence_count, 1);
        assert_eq!(snapshot.total_sentence_length, 1);
    }

    #[test]
    fn test_fault_keeps_recorded_statistics() {
        let (stats, mut ingestor) = ingestor(&[]);
        let mut source = FailingSource {
            words: MemoryWordSource::new(["alpha", "beta."]),
        };

        let result = ingestor.run(&mut source);
        assert!(matches!(result, Err(EngineError::StreamFault(_))));
        assert_eq!(ingestor.state(), IngestState::Failed);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.word_count, 2);
        assert_eq!(snapshot.sentence_count, 1);
    }

    #[test]
    fn test_second_run_is_rejected_without_pulling() {
        let (stats, mut ingestor) = ingestor(&[]);
        let mut source = MemoryWordSource::new(["first."]);
        ingestor.run(&mut source).unwrap();

        let mut more = MemoryWordSource::new(["second", "third."]);
        let result = ingestor.run(&mut more);

        assert!(matches!(
            result,
            Err(EngineError::AlreadyRan(IngestState::Finished))
        ));
        assert_eq!(more.requests(), 0);
        assert_eq!(stats.word_count(), 1);
    }

    #[test]
    fn test_cancelled_before_first_pull() {
        let (stats, ingestor) = ingestor(&[]);
        let cancel = CancelToken::new();
        let mut ingestor = ingestor.with_cancel(cancel.clone());
        cancel.cancel();

        let mut source = MemoryWordSource::new(["never"]);
        let summary = ingestor.run(&mut source).unwrap();

        assert_eq!(summary.state, IngestState::Cancelled);
        assert_eq!(source.requests(), 0);
        assert_eq!(stats.word_count(), 0);
    }

    #[test]
    fn test_state_display_and_terminal() {
        assert_eq!(IngestState::Running.to_string(), "running");
        assert!(!IngestState::Idle.is_terminal());
        assert!(!IngestState::Running.is_terminal());
        assert!(IngestState::Finished.is_terminal());
        assert!(IngestState::Failed.is_terminal());
        assert!(IngestState::Cancelled.is_terminal());
    }
}
