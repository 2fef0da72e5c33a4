//! Running text statistics over a stream of words
//!
//! This crate holds the shared state behind lexstat: the archaic vocabulary,
//! the open-sentence buffer, the lock-guarded running counters and the
//! reporter that derives averages from a consistent snapshot of them.
//!
//! Nothing in here performs I/O or spawns threads. Driving a word stream into
//! [`RunningStats`] is the job of `lexstat-engine`.

#![warn(missing_docs)]

pub mod report;
pub mod sentence;
pub mod stats;
pub mod vocabulary;

// Re-export key types
pub use report::{AnalysisReporter, AnalysisResult};
pub use sentence::{SentenceAccumulator, SENTENCE_TERMINATORS};
pub use stats::{RunningStats, StatsSnapshot};
pub use vocabulary::ArchaicVocabulary;
