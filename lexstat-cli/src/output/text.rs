//! Plain text output formatter

use super::ReportFormatter;
use anyhow::Result;
use lexstat_core::AnalysisResult;
use std::io::Write;

/// Plain text formatter - one statistic per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn write_report(&mut self, result: &AnalysisResult) -> Result<()> {
        writeln!(
            self.writer,
            "Average word length: {:.2}",
            result.avg_word_length
        )?;
        writeln!(
            self.writer,
            "Average sentence length: {:.2}",
            result.avg_sentence_length
        )?;

        if result.archaic_word_counts.is_empty() {
            writeln!(self.writer, "Archaic words: none")?;
        } else {
            writeln!(self.writer, "Archaic words:")?;
            for (word, count) in &result.archaic_word_counts {
                writeln!(self.writer, "  {word}: {count}")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
