//! Wordle word representation
//!
//! A `Word` is a validated lowercase 5-letter word stored as raw bytes, so
//! the filtering kernels can compare letters without touching UTF-8 machinery.

use std::fmt;

/// A 5-letter Wordle word
///
/// Stores the word as a fixed byte array. Validation at construction
/// guarantees every byte is an ASCII lowercase letter, so the filtering
/// code can treat words as plain `[u8; 5]` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    chars: [u8; 5],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_rank::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if text.len() != 5 {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let mut chars = [0u8; 5];
        for (slot, byte) in chars.iter_mut().zip(text.bytes()) {
            if !byte.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = byte.to_ascii_lowercase();
        }

        Ok(Self { chars })
    }

    /// Create a Word directly from validated bytes
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not an ASCII
    /// lowercase letter.
    pub fn from_bytes(chars: [u8; 5]) -> Result<Self, WordError> {
        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }
        Ok(Self { chars })
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic - construction validated the bytes as ASCII.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.chars).expect("bytes validated as ASCII")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; 5] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
