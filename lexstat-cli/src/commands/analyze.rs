//! Analyze command implementation

use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::output::{formatter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use lexstat_engine::{load_vocabulary, AnalysisSession, ArchaicVocabulary, FileWordSource};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

const PROGRESS_INTERVAL: Duration = Duration::from_millis(100);

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Archaic vocabulary word list (default: none)
    #[arg(short, long, value_name = "FILE")]
    pub archaic: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        let files = resolve_patterns(&self.input)?;
        log::info!("Analyzing {} file(s)", files.len());

        let vocabulary = match &self.archaic {
            Some(path) => load_vocabulary(path)?,
            None => ArchaicVocabulary::default(),
        };

        let file_count = files.len();
        let session = AnalysisSession::start(vocabulary, FileWordSource::new(files))
            .context("Failed to start ingestion")?;
        let reporter = session.reporter();

        let mut progress = ProgressReporter::new(quiet);
        progress.init_words(file_count);
        while !session.is_finished() {
            progress.update(reporter.word_count());
            thread::sleep(PROGRESS_INTERVAL);
        }

        let summary = session
            .join()
            .map_err(|e| CliError::IngestionFailed(e.to_string()))?;
        progress.finish(summary.words);
        log::info!(
            "Ingested {} words in {} sentences",
            summary.words,
            summary.sentences
        );

        let result = reporter.report();
        let mut out = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                formatter(self.format, Box::new(BufWriter::new(file)) as Box<dyn io::Write>)
            }
            None => formatter(self.format, Box::new(io::stdout()) as Box<dyn io::Write>),
        };
        out.write_report(&result)?;
        out.finish()
    }
}
