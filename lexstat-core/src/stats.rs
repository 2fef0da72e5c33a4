//! Lock-guarded running counters
//!
//! Every logical event (one word, one sentence close) updates its counters
//! inside a single critical section, and [`RunningStats::snapshot`] copies the
//! whole state under the same lock. A reader therefore only ever observes the
//! counters as they stood between two events.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Point-in-time copy of the running counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSnapshot {
    /// Total words ingested
    pub word_count: u64,
    /// Sum of character lengths of all ingested words
    pub total_word_length: u64,
    /// Number of completed sentences
    pub sentence_count: u64,
    /// Sum of the word counts of completed sentences
    pub total_sentence_length: u64,
    /// Occurrences per normalized archaic word; every value is at least 1
    pub archaic_word_counts: BTreeMap<String, u64>,
}

/// Shared running statistics
///
/// Shared between one writer and any number of readers, typically behind an
/// `Arc`.
#[derive(Debug, Default)]
pub struct RunningStats {
    counters: Mutex<StatsSnapshot>,
}

impl RunningStats {
    /// Create zeroed statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one ingested word
    ///
    /// `archaic_key` is the normalized vocabulary entry when the word is
    /// archaic. Only a present key creates or bumps an entry in the archaic
    /// counts, so no zero-count entries ever appear.
    pub fn record_word(&self, word: &str, archaic_key: Option<&str>) {
        let length = word.chars().count() as u64;

        let mut counters = self.lock();
        counters.word_count += 1;
        counters.total_word_length += length;
        if let Some(key) = archaic_key {
            *counters
                .archaic_word_counts
                .entry(key.to_owned())
                .or_insert(0) += 1;
        }
    }

    /// Record the close of a sentence of `sentence_length` words
    pub fn record_sentence_end(&self, sentence_length: usize) {
        let mut counters = self.lock();
        counters.sentence_count += 1;
        counters.total_sentence_length += sentence_length as u64;
    }

    /// Copy the current counters
    ///
    /// The returned snapshot is independent of the live state in both
    /// directions.
    pub fn snapshot(&self) -> StatsSnapshot {
        self.lock().clone()
    }

    /// Current word count
    pub fn word_count(&self) -> u64 {
        self.lock().word_count
    }

    // Each critical section leaves the counters consistent before it can
    // panic, so a poisoned lock still guards valid data.
    fn lock(&self) -> MutexGuard<'_, StatsSnapshot> {
        self.counters.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
