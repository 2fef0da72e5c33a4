//! Input handling module

pub mod glob_resolver;
pub mod word_files;

pub use glob_resolver::resolve_patterns;
pub use word_files::read_words;
