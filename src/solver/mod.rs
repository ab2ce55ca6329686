//! Guess ranking engine
//!
//! Ties the pieces together: filter the candidate corpus under the
//! constraint, pack the survivors, broadcast them into the worker pool,
//! score every guess, and select the top N.

pub mod scoring;
pub mod selection;

use crate::core::{Constraint, Word};
use crate::corpus::{Corpus, PackWidth, PackedCorpus};
use crate::filter::row;
use crate::pool::{PoolError, WorkerPool};
use std::fmt;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Worker thread count; clamped to at least 1
    pub threads: usize,
    /// Batch width of the packed scoring layout
    pub pack_width: PackWidth,
}

impl Default for EngineConfig {
    /// One worker per available CPU, 64-wide batches
    fn default() -> Self {
        Self {
            threads: std::thread::available_parallelism().map_or(1, std::num::NonZero::get),
            pack_width: PackWidth::default(),
        }
    }
}

/// Error type for a failed ranking run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The worker pool aborted; no partial scores are available
    Pool(PoolError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pool(e) => write!(f, "Scoring pass failed: {e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pool(e) => Some(e),
        }
    }
}

impl From<PoolError> for EngineError {
    fn from(e: PoolError) -> Self {
        Self::Pool(e)
    }
}

/// A guess with its expected remaining-candidate count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess {
    pub word: Word,
    pub score: f32,
}

/// Rank guesses by expected remaining candidates under the constraint
///
/// Filters `candidates` down to the words still possible under `constraint`,
/// scores every word of `guesses` against that set in parallel, and returns
/// the `top_n` lowest-scoring guesses in ascending score order (ties by
/// guess-corpus order).
///
/// Capacity edge cases return an empty ranking rather than an error:
/// `top_n == 0`, an empty guess or candidate corpus, or a constraint no
/// candidate satisfies.
///
/// # Errors
/// Returns [`EngineError::Pool`] if the scoring pass aborted.
///
/// # Examples
/// ```
/// use wordle_rank::core::Constraint;
/// use wordle_rank::corpus::Corpus;
/// use wordle_rank::solver::{EngineConfig, compute_best_guesses};
///
/// let corpus = Corpus::from_strs(&["apple", "grape", "mango"]).unwrap();
/// let ranked = compute_best_guesses(
///     &Constraint::default(),
///     &corpus,
///     &corpus,
///     2,
///     &EngineConfig { threads: 2, ..EngineConfig::default() },
/// )
/// .unwrap();
/// assert_eq!(ranked.len(), 2);
/// assert!(ranked[0].score <= ranked[1].score);
/// ```
pub fn compute_best_guesses(
    constraint: &Constraint,
    candidates: &Corpus,
    guesses: &Corpus,
    top_n: usize,
    config: &EngineConfig,
) -> Result<Vec<RankedGuess>, EngineError> {
    if top_n == 0 || guesses.is_empty() || candidates.is_empty() {
        return Ok(Vec::new());
    }

    let possible = Corpus::new(row::filter_corpus(constraint, candidates));
    if possible.is_empty() {
        return Ok(Vec::new());
    }
    let packed = PackedCorpus::build(&possible, config.pack_width);

    let pool: WorkerPool<PackedCorpus> = WorkerPool::new(config.threads);
    pool.broadcast_scratch(&packed);
    let scores = scoring::score_guesses(&pool, guesses, possible.len())?;
    pool.shutdown()?;

    let ranked = selection::smallest_n(&scores, top_n)
        .into_iter()
        .map(|i| RankedGuess {
            word: *guesses.word(i),
            score: scores[i],
        })
        .collect();

    Ok(ranked)
}
