//! Accumulated letter-position knowledge and its match predicate
//!
//! A `Constraint` encodes everything learned from one or more guesses:
//! letters known to sit at a specific position (correct), letters known to be
//! in the word but not at a recorded position (misplaced), and letters known
//! to be absent entirely (wrong). Constraints are immutable once built; the
//! derived scan representation used by the filtering kernels is computed
//! eagerly at construction so it can never be stale.

use crate::filter::kernels::{self, UNKNOWN};
use std::fmt;

/// Error type for contradictory or malformed constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// A letter is marked correct at a position while also listed as wrong
    Contradiction { position: usize, letter: char },
    /// A constraint letter is not an ASCII lowercase letter
    InvalidLetter(char),
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction { position, letter } => write!(
                f,
                "Letter '{letter}' is marked correct at position {position} but also listed as wrong"
            ),
            Self::InvalidLetter(letter) => {
                write!(f, "Constraint letter '{letter}' is not a lowercase ASCII letter")
            }
        }
    }
}

impl std::error::Error for ConstraintError {}

/// Derived data for the scanning kernels, built once at construction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ScanData {
    /// Per-position misplaced lists concatenated in position order
    misplaced_flat: Vec<u8>,
    /// Length of each position's misplaced list
    misplaced_counts: [u8; 5],
    /// Wrong letters zero-padded to 16 bytes, when they fit
    wrong_padded: Option<[u8; 16]>,
}

impl ScanData {
    fn derive(misplaced: &[Vec<u8>; 5], wrong: &[u8]) -> Self {
        let total: usize = misplaced.iter().map(Vec::len).sum();
        let mut misplaced_flat = Vec::with_capacity(total);
        let mut misplaced_counts = [0u8; 5];

        for (count, list) in misplaced_counts.iter_mut().zip(misplaced) {
            *count = list.len() as u8;
            misplaced_flat.extend_from_slice(list);
        }

        let wrong_padded = (wrong.len() <= 16).then(|| {
            let mut padded = [0u8; 16];
            padded[..wrong.len()].copy_from_slice(wrong);
            padded
        });

        Self {
            misplaced_flat,
            misplaced_counts,
            wrong_padded,
        }
    }
}

/// Accumulated correct/misplaced/wrong letter knowledge
///
/// The unknown correct-slot sentinel is a space byte
/// ([`kernels::UNKNOWN`]), which can never collide with a real letter.
/// Misplaced and wrong lists may contain duplicates; duplicates are harmless
/// to the predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    correct: [u8; 5],
    misplaced: [Vec<u8>; 5],
    wrong: Vec<u8>,
    scan: ScanData,
}

impl Default for Constraint {
    /// The empty constraint: all slots unknown, no misplaced or wrong letters
    fn default() -> Self {
        Self {
            correct: [UNKNOWN; 5],
            misplaced: Default::default(),
            wrong: Vec::new(),
            scan: ScanData::default(),
        }
    }
}

impl Constraint {
    /// Build a constraint from a literal description
    ///
    /// `correct` uses [`kernels::UNKNOWN`] (a space) for unknown slots.
    ///
    /// # Errors
    /// Returns [`ConstraintError::Contradiction`] if a correct-slot letter is
    /// also listed as wrong, or [`ConstraintError::InvalidLetter`] if any
    /// letter is not ASCII lowercase.
    ///
    /// # Examples
    /// ```
    /// use wordle_rank::core::Constraint;
    ///
    /// let constraint = Constraint::new(
    ///     *b"c    ",
    ///     [vec![], vec![b'a'], vec![], vec![], vec![]],
    ///     b"xyz",
    /// )
    /// .unwrap();
    /// assert!(constraint.passes(b"coral"));
    /// ```
    pub fn new(
        correct: [u8; 5],
        misplaced: [Vec<u8>; 5],
        wrong: &[u8],
    ) -> Result<Self, ConstraintError> {
        Self::build(correct, misplaced, wrong.to_vec())
    }

    /// Build the constraint implied by comparing a guess against a candidate
    /// solution
    ///
    /// For each position: matching letters become correct slots; guess
    /// letters occurring elsewhere in the solution become misplaced at that
    /// position; the rest become wrong. Infallible: each guess letter lands
    /// in exactly one bucket, and a correct letter is present in the solution
    /// by definition, so no contradiction can arise.
    #[must_use]
    pub fn from_comparison(solution: &[u8; 5], guess: &[u8; 5]) -> Self {
        let mut correct = [UNKNOWN; 5];
        let mut misplaced: [Vec<u8>; 5] = Default::default();
        let mut wrong = Vec::new();

        for i in 0..5 {
            if guess[i] == solution[i] {
                correct[i] = guess[i];
            } else if solution.contains(&guess[i]) {
                misplaced[i].push(guess[i]);
            } else {
                wrong.push(guess[i]);
            }
        }

        let scan = ScanData::derive(&misplaced, &wrong);
        Self {
            correct,
            misplaced,
            wrong,
            scan,
        }
    }

    /// Merge a list of constraints into one
    ///
    /// Correct slots take the first non-unknown value seen in input order;
    /// later conflicting assignments at the same position are dropped, so
    /// merge is order-sensitive by design. Misplaced and wrong lists
    /// concatenate without deduplication.
    ///
    /// # Errors
    /// Returns [`ConstraintError::Contradiction`] if the merged result marks
    /// a letter correct at a position while also listing it as wrong.
    pub fn merge(constraints: &[Self]) -> Result<Self, ConstraintError> {
        let mut correct = [UNKNOWN; 5];
        let mut misplaced: [Vec<u8>; 5] = Default::default();
        let mut wrong = Vec::new();

        for constraint in constraints {
            for j in 0..5 {
                if correct[j] == UNKNOWN {
                    correct[j] = constraint.correct[j];
                }
                misplaced[j].extend_from_slice(&constraint.misplaced[j]);
            }
            wrong.extend_from_slice(&constraint.wrong);
        }

        Self::build(correct, misplaced, wrong)
    }

    fn build(
        correct: [u8; 5],
        misplaced: [Vec<u8>; 5],
        wrong: Vec<u8>,
    ) -> Result<Self, ConstraintError> {
        for &letter in correct.iter().filter(|&&c| c != UNKNOWN) {
            if !letter.is_ascii_lowercase() {
                return Err(ConstraintError::InvalidLetter(letter as char));
            }
        }
        for &letter in misplaced.iter().flatten().chain(&wrong) {
            if !letter.is_ascii_lowercase() {
                return Err(ConstraintError::InvalidLetter(letter as char));
            }
        }
        for (position, &letter) in correct.iter().enumerate() {
            if letter != UNKNOWN && wrong.contains(&letter) {
                return Err(ConstraintError::Contradiction {
                    position,
                    letter: letter as char,
                });
            }
        }

        let scan = ScanData::derive(&misplaced, &wrong);
        Ok(Self {
            correct,
            misplaced,
            wrong,
            scan,
        })
    }

    /// Test whether a word satisfies the constraint
    ///
    /// Checks run cheapest first and short-circuit: correct slots, then
    /// misplaced letters, then wrong letters.
    #[must_use]
    pub fn passes(&self, word: &[u8; 5]) -> bool {
        if !kernels::correct_letters_match(&self.correct, word) {
            return false;
        }

        if !self.scan.misplaced_flat.is_empty()
            && !kernels::misplaced_letters_ok(
                word,
                &self.scan.misplaced_flat,
                &self.scan.misplaced_counts,
            )
        {
            return false;
        }

        match &self.scan.wrong_padded {
            Some(padded) => kernels::fast_no_common_chars(word, padded),
            None => kernels::no_common_chars(word, &self.wrong),
        }
    }

    /// The correct-slot letters, [`kernels::UNKNOWN`] where unknown
    #[inline]
    #[must_use]
    pub const fn correct(&self) -> &[u8; 5] {
        &self.correct
    }

    /// Misplaced letters recorded at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub fn misplaced(&self, position: usize) -> &[u8] {
        &self.misplaced[position]
    }

    /// Letters known absent from the word
    #[inline]
    #[must_use]
    pub fn wrong(&self) -> &[u8] {
        &self.wrong
    }

    /// True when the constraint excludes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.correct == [UNKNOWN; 5] && self.scan.misplaced_flat.is_empty() && self.wrong.is_empty()
    }
}
