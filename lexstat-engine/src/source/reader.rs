//! Whitespace-tokenized text from readers and files

use super::{WordResponse, WordSource};
use crate::error::{EngineError, Result};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Splits text from a reader into whitespace-separated words
///
/// Text is read one line at a time, so memory use is bounded by the longest
/// line rather than the input size.
#[derive(Debug)]
pub struct ReaderWordSource<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
    exhausted: bool,
}

impl<R: BufRead> ReaderWordSource<R> {
    /// Create a source over `reader`
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
            exhausted: false,
        }
    }

    // Read lines until at least one word is pending or the reader is done
    fn fill(&mut self) -> Result<()> {
        while self.pending.is_empty() && !self.exhausted {
            self.line.clear();
            let read = self
                .reader
                .read_line(&mut self.line)
                .map_err(|e| EngineError::StreamFault(e.to_string()))?;
            if read == 0 {
                self.exhausted = true;
            } else {
                self.pending
                    .extend(self.line.split_whitespace().map(str::to_owned));
            }
        }
        Ok(())
    }
}

impl<R: BufRead + Send> WordSource for ReaderWordSource<R> {
    fn next_word(&mut self) -> Result<WordResponse> {
        self.fill()?;
        Ok(match self.pending.pop_front() {
            Some(word) => WordResponse::word(word),
            None => WordResponse::eof(),
        })
    }
}

/// Words from a sequence of files, read in order
///
/// Files are opened lazily as the previous one runs out. Words never span
/// files.
#[derive(Debug)]
pub struct FileWordSource {
    paths: VecDeque<PathBuf>,
    current: Option<ReaderWordSource<BufReader<File>>>,
}

impl FileWordSource {
    /// Create a source over `paths`
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            current: None,
        }
    }

    fn open_next(&mut self) -> Result<bool> {
        let Some(path) = self.paths.pop_front() else {
            return Ok(false);
        };
        let file = File::open(&path).map_err(|e| EngineError::SourceUnavailable {
            address: path.display().to_string(),
            reason: e.to_string(),
        })?;
        log::debug!("Reading words from {}", path.display());
        self.current = Some(ReaderWordSource::new(BufReader::new(file)));
        Ok(true)
    }
}

impl WordSource for FileWordSource {
    fn next_word(&mut self) -> Result<WordResponse> {
        loop {
            if let Some(current) = self.current.as_mut() {
                let response = current.next_word()?;
                if !response.eof {
                    return Ok(response);
                }
                self.current = None;
            }
            if !self.open_next()? {
                return Ok(WordResponse::eof());
            }
        }
    }
}
