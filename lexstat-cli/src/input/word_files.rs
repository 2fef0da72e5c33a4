//! Reading whole word lists from text files

use anyhow::{Context, Result};
use lexstat_engine::{FileWordSource, WordSource};
use std::path::PathBuf;

/// Read every whitespace-separated word from `paths`, in order
pub fn read_words(paths: &[PathBuf]) -> Result<Vec<String>> {
    let mut source = FileWordSource::new(paths.iter().cloned());
    let mut words = Vec::new();

    loop {
        let response = source
            .next_word()
            .context("Failed to read words from input files")?;
        if response.eof {
            return Ok(words);
        }
        words.push(response.word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reads_words_from_all_files() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("1.txt");
        let second = temp_dir.path().join("2.txt");
        fs::write(&first, "Hark! Who\ngoes").unwrap();
        fs::write(&second, "there?").unwrap();

        let words = read_words(&[first, second]).unwrap();
        assert_eq!(words, ["Hark!", "Who", "goes", "there?"]);
    }

    #[test]
    fn test_missing_file_fails() {
        let error = read_words(&[PathBuf::from("/nonexistent/words.txt")]).unwrap_err();
        assert!(error.to_string().contains("Failed to read words"));
    }
}
