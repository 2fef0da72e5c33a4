//! Output formatting module

use anyhow::Result;
use lexstat_core::AnalysisResult;
use std::io::Write;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Format and output one analysis report
    fn write_report(&mut self, result: &AnalysisResult) -> Result<()>;

    /// Flush any buffered output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON object matching the analysis interface
    Json,
}

/// Build the formatter for `format` writing into `writer`
pub fn formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn ReportFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}
