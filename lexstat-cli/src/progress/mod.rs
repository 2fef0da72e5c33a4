//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Live word counter shown while ingestion runs
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Start the spinner for `files` input files
    pub fn init_words(&mut self, files: usize) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} [{elapsed_precise}] {pos} words {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("from {files} file(s)"));
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Show the running word count
    pub fn update(&self, words: u64) {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(words);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self, words: u64) {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(words);
            pb.finish_and_clear();
        }
    }
}
