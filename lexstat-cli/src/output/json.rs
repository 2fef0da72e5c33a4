//! JSON output formatter

use super::ReportFormatter;
use anyhow::Result;
use lexstat_core::AnalysisResult;
use std::io::Write;

/// JSON formatter - outputs each report as a pretty-printed object
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn write_report(&mut self, result: &AnalysisResult) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, result)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
