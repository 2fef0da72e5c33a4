//! Open-sentence buffer used during ingestion

/// Characters that close a sentence when they end a word
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Words belonging to the sentence currently being built
///
/// Holds no synchronization. It is owned by the single ingestion path and
/// never shared with readers.
#[derive(Debug, Default)]
pub struct SentenceAccumulator {
    words: Vec<String>,
}

impl SentenceAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word to the open sentence
    pub fn append(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    /// True iff `word` ends with `.`, `!` or `?`
    pub fn is_sentence_terminal(word: &str) -> bool {
        word.ends_with(SENTENCE_TERMINATORS)
    }

    /// Close the open sentence, returning its length in words
    pub fn flush(&mut self) -> usize {
        let length = self.words.len();
        self.words.clear();
        length
    }

    /// Number of words in the open sentence
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no sentence is open
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_punctuation() {
        assert!(SentenceAccumulator::is_sentence_terminal("fox."));
        assert!(SentenceAccumulator::is_sentence_terminal("high!"));
        assert!(SentenceAccumulator::is_sentence_terminal("why?"));
        assert!(SentenceAccumulator::is_sentence_terminal("."));
    }

    #[test]
    fn test_non_terminal_words() {
        assert!(!SentenceAccumulator::is_sentence_terminal("fox"));
        assert!(!SentenceAccumulator::is_sentence_terminal("fox,"));
        assert!(!SentenceAccumulator::is_sentence_terminal("e.g"));
        assert!(!SentenceAccumulator::is_sentence_terminal("\"end.\""));
        assert!(!SentenceAccumulator::is_sentence_terminal(""));
    }

    #[test]
    fn test_flush_returns_length_and_resets() {
        let mut acc = SentenceAccumulator::new();
        acc.append("The");
        acc.append("quick");
        acc.append("fox.");

        assert_eq!(acc.len(), 3);
        assert_eq!(acc.flush(), 3);
        assert!(acc.is_empty());
        assert_eq!(acc.flush(), 0);
    }
}
