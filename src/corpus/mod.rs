//! Word corpora in the two physical layouts
//!
//! A [`Corpus`] is the row-major layout: words in input order, scanned one
//! word at a time by the scalar path. [`packed::PackedCorpus`] is the
//! batched column-major layout used by the data-parallel scoring loop. Both
//! are immutable once built.

pub mod packed;

pub use packed::{PackWidth, PackedCorpus};

use crate::core::Word;

/// Ordered, immutable word list in row-major layout
///
/// Each word is a fixed 5-byte array, so the word vector itself is the flat
/// row-major image: word i occupies logical bytes `[i * 5, i * 5 + 5)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Corpus {
    words: Vec<Word>,
}

impl Corpus {
    /// Build a corpus from validated words, preserving input order
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Build a corpus from string slices
    ///
    /// # Errors
    /// Returns the first [`crate::core::WordError`] encountered.
    pub fn from_strs(texts: &[&str]) -> Result<Self, crate::core::WordError> {
        let words = texts
            .iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(words))
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the corpus holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words in input order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word at an index
    ///
    /// # Panics
    /// Panics if `index >= len()`
    #[inline]
    #[must_use]
    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    /// The 5 bytes of word `index`
    ///
    /// # Panics
    /// Panics if `index >= len()`
    #[inline]
    #[must_use]
    pub fn word_bytes(&self, index: usize) -> &[u8; 5] {
        self.words[index].chars()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_preserves_input_order() {
        let corpus = Corpus::from_strs(&["apple", "grape", "mango"]).unwrap();

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.word(0).text(), "apple");
        assert_eq!(corpus.word(1).text(), "grape");
        assert_eq!(corpus.word(2).text(), "mango");
    }

    #[test]
    fn corpus_word_bytes() {
        let corpus = Corpus::from_strs(&["apple", "grape"]).unwrap();

        assert_eq!(corpus.word_bytes(0), b"apple");
        assert_eq!(corpus.word_bytes(1), b"grape");
    }

    #[test]
    fn corpus_empty() {
        let corpus = Corpus::default();
        assert!(corpus.is_empty());
        assert_eq!(corpus.len(), 0);
    }

    #[test]
    fn corpus_from_strs_rejects_invalid() {
        assert!(Corpus::from_strs(&["apple", "toolong"]).is_err());
    }
}
