//! Parallel guess scoring
//!
//! One job per guess: the job replays the guess against every candidate in
//! its worker's private packed scratch, builds the implied constraint, counts
//! the candidates that would survive, and averages. Lower scores mean more
//! informative guesses.
//!
//! Each job writes exactly one slot of the shared score table, so slot writes
//! need no locking; the drain synchronization publishes them to the caller.

use crate::core::Constraint;
use crate::corpus::{Corpus, PackedCorpus};
use crate::filter::batched;
use crate::pool::{Job, PoolError, WorkerPool};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// One score slot of the table, owned exclusively by a single job
///
/// Stores the f32 score as its bit pattern; exclusive slot ownership makes
/// the relaxed-looking atomic store safe, and the drain lock orders it before
/// the caller's read.
#[derive(Debug, Default)]
struct ScoreSlot(AtomicU32);

impl ScoreSlot {
    fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Release);
    }

    fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Acquire))
    }
}

/// Score table indexed by guess order
#[derive(Debug)]
struct ScoreTable {
    slots: Vec<ScoreSlot>,
}

impl ScoreTable {
    fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| ScoreSlot::default()).collect(),
        }
    }

    fn scores(&self) -> Vec<f32> {
        self.slots.iter().map(ScoreSlot::get).collect()
    }
}

/// Owned job descriptor: guess word, candidate count, destination slot
struct ScoreJob {
    guess: [u8; 5],
    candidate_count: usize,
    slot: usize,
    table: Arc<ScoreTable>,
}

impl ScoreJob {
    /// Average surviving-candidate count for this guess over the scratch
    /// corpus
    fn run(&self, scratch: &PackedCorpus) {
        let mut sum = 0.0f32;
        for i in 0..self.candidate_count {
            let solution = scratch.word(i);
            let constraint = Constraint::from_comparison(&solution, &self.guess);
            sum += batched::count_passing(&constraint, scratch) as f32;
        }
        self.table.slots[self.slot].set(sum / self.candidate_count as f32);
    }
}

/// Score every guess against the broadcast candidate scratch
///
/// The pool must already hold the packed candidate corpus in every worker's
/// scratch (via [`WorkerPool::broadcast_scratch`]); `candidate_count` is that
/// corpus's logical length and must be non-zero. Returns one score per
/// guess, in guess order.
///
/// # Errors
/// Returns [`PoolError::WorkerFailed`] if a scoring job panicked; no partial
/// score table is returned.
pub fn score_guesses(
    pool: &WorkerPool<PackedCorpus>,
    guesses: &Corpus,
    candidate_count: usize,
) -> Result<Vec<f32>, PoolError> {
    debug_assert!(candidate_count > 0, "score_guesses needs candidates");

    let table = Arc::new(ScoreTable::new(guesses.len()));
    let jobs: Vec<Job<PackedCorpus>> = guesses
        .words()
        .iter()
        .enumerate()
        .map(|(slot, word)| {
            let job = ScoreJob {
                guess: *word.chars(),
                candidate_count,
                slot,
                table: Arc::clone(&table),
            };
            let boxed: Job<PackedCorpus> = Box::new(move |scratch| job.run(scratch));
            boxed
        })
        .collect();

    pool.queue_many(jobs);
    pool.wait_for_drain()?;

    Ok(table.scores())
}
