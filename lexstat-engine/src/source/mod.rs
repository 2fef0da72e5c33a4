//! Word sources consumed by the ingestor
//!
//! A word source answers each request with the next word or an end-of-stream
//! signal. Tokenization happens inside the source, never in the ingestor.

use crate::error::Result;
use serde::{Deserialize, Serialize};

pub mod channel;
pub mod memory;
pub mod reader;
pub mod tcp;

pub use channel::ChannelWordSource;
pub use memory::MemoryWordSource;
pub use reader::{FileWordSource, ReaderWordSource};
pub use tcp::TcpWordSource;

/// One reply from a word source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordResponse {
    /// The next word; empty once `eof` is set
    #[serde(default)]
    pub word: String,
    /// End of stream
    #[serde(default)]
    pub eof: bool,
}

impl WordResponse {
    /// A reply carrying a word
    pub fn word(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            eof: false,
        }
    }

    /// The end-of-stream reply
    pub fn eof() -> Self {
        Self {
            word: String::new(),
            eof: true,
        }
    }
}

/// Pull-based stream of words
///
/// `next_word` may block until a word or end-of-stream is available. This is
/// the only point where ingestion suspends.
pub trait WordSource: Send {
    /// Request the next word
    fn next_word(&mut self) -> Result<WordResponse>;
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn next_word(&mut self) -> Result<WordResponse> {
        (**self).next_word()
    }
}

impl<S: WordSource + ?Sized> WordSource for &mut S {
    fn next_word(&mut self) -> Result<WordResponse> {
        (**self).next_word()
    }
}
