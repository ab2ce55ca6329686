//! Word list loading utilities

use crate::core::Word;
use crate::corpus::Corpus;
use std::fs;
use std::io;
use std::path::Path;

/// Load a corpus from a newline-delimited word-list file
///
/// Blank lines and entries that are not valid 5-letter words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_rank::wordlists::loader::load_from_file;
///
/// let corpus = load_from_file("data/solutions.txt").unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Corpus> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(Corpus::new(words))
}

/// Convert string slices to a corpus, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_rank::wordlists::loader::corpus_from_slice;
///
/// let corpus = corpus_from_slice(&["crane", "slate", "not a word"]);
/// assert_eq!(corpus.len(), 2);
/// ```
#[must_use]
pub fn corpus_from_slice(slice: &[&str]) -> Corpus {
    let words = slice.iter().filter_map(|&s| Word::new(s).ok()).collect();
    Corpus::new(words)
}
