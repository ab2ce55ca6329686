//! Row-major filtering
//!
//! The scalar path over a [`Corpus`]: used for the human-readable "list all
//! possible solutions" query and as the correctness reference for the
//! batched path.

use crate::core::{Constraint, Word};
use crate::corpus::Corpus;

/// Words of the corpus passing the constraint, in corpus order
#[must_use]
pub fn filter_corpus(constraint: &Constraint, corpus: &Corpus) -> Vec<Word> {
    corpus
        .words()
        .iter()
        .filter(|word| constraint.passes(word.chars()))
        .copied()
        .collect()
}

/// Count words passing the constraint without materializing them
///
/// The hot scoring path calls this once per (guess, candidate) pair, so it
/// must not allocate.
#[must_use]
pub fn count_passing(constraint: &Constraint, corpus: &Corpus) -> usize {
    corpus
        .words()
        .iter()
        .filter(|word| constraint.passes(word.chars()))
        .count()
}
