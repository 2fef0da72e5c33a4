//! Fixed in-memory word list

use super::{WordResponse, WordSource};
use crate::error::Result;
use std::collections::VecDeque;

/// Yields a fixed list of words, then end-of-stream on every later request
#[derive(Debug, Default, Clone)]
pub struct MemoryWordSource {
    words: VecDeque<String>,
    requests: usize,
}

impl MemoryWordSource {
    /// Create a source over `words`
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            requests: 0,
        }
    }

    /// Number of `next_word` calls served so far
    pub fn requests(&self) -> usize {
        self.requests
    }

    /// Words not yet handed out
    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

impl WordSource for MemoryWordSource {
    fn next_word(&mut self) -> Result<WordResponse> {
        self.requests += 1;
        Ok(match self.words.pop_front() {
            Some(word) => WordResponse::word(word),
            None => WordResponse::eof(),
        })
    }
}
