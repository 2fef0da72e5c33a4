//! Archaic vocabulary lookup

use std::collections::HashSet;

/// Immutable set of lowercase words flagged for frequency tracking
///
/// Entries are trimmed and lowercased on construction. Entries that are empty
/// after trimming are dropped, so a blank line in a word list never turns the
/// empty word into an archaic one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchaicVocabulary {
    words: HashSet<String>,
}

impl ArchaicVocabulary {
    /// Build a vocabulary from raw words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim();
                (!word.is_empty()).then(|| word.to_lowercase())
            })
            .collect();

        Self { words }
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Return the normalized vocabulary key for `word`, if it is archaic
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.words.get(&word.to_lowercase()).map(String::as_str)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the normalized words in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl FromIterator<String> for ArchaicVocabulary {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> FromIterator<&'a str> for ArchaicVocabulary {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self::new(iter)
    }
}
