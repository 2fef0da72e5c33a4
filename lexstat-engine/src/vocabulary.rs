//! Loading the archaic vocabulary from a word list file

use crate::error::{EngineError, Result};
use lexstat_core::ArchaicVocabulary;
use std::fs;
use std::path::Path;

/// Load a newline-delimited word list
///
/// The whole file is read before the vocabulary is built, so a failure never
/// leaves a partially loaded vocabulary behind.
pub fn load_vocabulary(path: impl AsRef<Path>) -> Result<ArchaicVocabulary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| EngineError::Configuration {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    let vocabulary = ArchaicVocabulary::new(content.lines());
    log::info!(
        "Loaded {} archaic words from {}",
        vocabulary.len(),
        path.display()
    );
    Ok(vocabulary)
}
