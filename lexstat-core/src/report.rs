//! Derived statistics computed on request

use crate::stats::{RunningStats, StatsSnapshot};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Averages and archaic counts at a point in time
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisResult {
    /// Mean word length in characters, 0 before any word
    pub avg_word_length: f64,
    /// Mean words per completed sentence, 0 before any sentence
    pub avg_sentence_length: f64,
    /// Occurrences per normalized archaic word
    pub archaic_word_counts: BTreeMap<String, u64>,
}

impl AnalysisResult {
    /// Derive the result from a snapshot
    pub fn from_snapshot(snapshot: &StatsSnapshot) -> Self {
        Self::from(snapshot.clone())
    }
}

impl From<StatsSnapshot> for AnalysisResult {
    fn from(snapshot: StatsSnapshot) -> Self {
        Self {
            avg_word_length: mean(snapshot.total_word_length, snapshot.word_count),
            avg_sentence_length: mean(snapshot.total_sentence_length, snapshot.sentence_count),
            archaic_word_counts: snapshot.archaic_word_counts,
        }
    }
}

fn mean(total: u64, count: u64) -> f64 {
    if count > 0 {
        total as f64 / count as f64
    } else {
        0.0
    }
}

/// Read-side handle over shared [`RunningStats`]
///
/// Cheap to clone; every clone reads the same statistics. Reports never block
/// on ingestion beyond the short snapshot copy.
#[derive(Debug, Clone)]
pub struct AnalysisReporter {
    stats: Arc<RunningStats>,
}

impl AnalysisReporter {
    /// Create a reporter over shared statistics
    pub fn new(stats: Arc<RunningStats>) -> Self {
        Self { stats }
    }

    /// Snapshot the statistics and derive the averages outside the lock
    pub fn report(&self) -> AnalysisResult {
        AnalysisResult::from(self.stats.snapshot())
    }

    /// The raw counters behind the report
    pub fn snapshot(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Words ingested so far, without copying the archaic counts
    pub fn word_count(&self) -> u64 {
        self.stats.word_count()
    }
}
