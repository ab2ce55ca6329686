//! Fixed-size worker-thread pool with per-worker private scratch
//!
//! A [`WorkerPool`] spawns its workers once at construction and feeds them
//! from a single FIFO queue guarded by one mutex, with two wait conditions:
//! workers sleep on `dispatch` while the queue is empty, callers sleep on
//! `drained` until every assigned job has completed. Each worker owns a
//! private scratch value of type `S`; [`WorkerPool::broadcast_scratch`]
//! copies a source value into every worker's slot before any job that reads
//! it is queued, so jobs never contend on shared data.
//!
//! Jobs are owned descriptors boxed as closures and run exactly once, in
//! FIFO dispatch order; completion order across workers is unspecified. There
//! is no cancellation: queued jobs always run to completion, and shutdown
//! drains the queue before terminating the workers.
//!
//! A panicking job is fatal to the whole run. Unlike the fail-fast reference
//! behavior this design descends from, the failure is surfaced: the unwinding
//! worker marks the pool failed and [`WorkerPool::wait_for_drain`] returns
//! [`PoolError::WorkerFailed`] instead of blocking forever. No partial
//! results are handed out either way.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

/// A queued unit of work, run once against the worker's private scratch
pub type Job<S> = Box<dyn FnOnce(&mut S) + Send + 'static>;

/// Error type for a failed pool run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// A job panicked; the run is aborted and its results are unusable
    WorkerFailed,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkerFailed => write!(f, "A pool job failed; the run was aborted"),
        }
    }
}

impl std::error::Error for PoolError {}

struct QueueState<S> {
    jobs: VecDeque<Job<S>>,
    assigned: usize,
    completed: usize,
    terminate: bool,
    failed: bool,
}

struct Shared<S> {
    state: Mutex<QueueState<S>>,
    dispatch: Condvar,
    drained: Condvar,
    scratch: Vec<Mutex<S>>,
}

impl<S> Shared<S> {
    /// Lock the queue state, recovering from poisoning
    ///
    /// A poisoned lock here means a job panicked; the failed flag already
    /// records that, and the counters themselves are never updated while a
    /// job body runs, so the inner state is still consistent.
    fn lock_state(&self) -> MutexGuard<'_, QueueState<S>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Fixed-size pool of OS worker threads with private scratch storage
///
/// The worker count is fixed at construction and independent of the job
/// count. Dropping the pool drains outstanding work, terminates the workers,
/// and joins them.
pub struct WorkerPool<S> {
    shared: Arc<Shared<S>>,
    workers: Vec<JoinHandle<()>>,
}

impl<S: Default + Send + 'static> WorkerPool<S> {
    /// Spawn a pool of `threads` persistent workers (at least one)
    ///
    /// Each worker starts with a default-constructed scratch value;
    /// [`Self::broadcast_scratch`] replaces it.
    #[must_use]
    pub fn new(threads: usize) -> Self {
        let threads = threads.max(1);
        let shared = Arc::new(Shared {
            state: Mutex::new(QueueState {
                jobs: VecDeque::new(),
                assigned: 0,
                completed: 0,
                terminate: false,
                failed: false,
            }),
            dispatch: Condvar::new(),
            drained: Condvar::new(),
            scratch: (0..threads).map(|_| Mutex::new(S::default())).collect(),
        });

        let workers = (0..threads)
            .map(|index| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || worker_loop(&shared, index))
            })
            .collect();

        Self { shared, workers }
    }
}

impl<S> WorkerPool<S> {
    /// Number of worker threads
    #[must_use]
    pub fn thread_count(&self) -> usize {
        self.workers.len()
    }

    /// Copy a source value into every worker's private scratch slot
    ///
    /// Must complete before the first queued job that reads the scratch; the
    /// caller sequences this by broadcasting before queueing.
    pub fn broadcast_scratch(&self, source: &S)
    where
        S: Clone,
    {
        for slot in &self.shared.scratch {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = source.clone();
        }
    }

    /// Append one job to the FIFO queue and wake one worker
    pub fn queue_one(&self, job: Job<S>) {
        {
            let mut state = self.shared.lock_state();
            state.assigned += 1;
            state.jobs.push_back(job);
        }
        self.shared.dispatch.notify_one();
    }

    /// Append a batch of jobs to the FIFO queue and wake all workers
    pub fn queue_many(&self, jobs: impl IntoIterator<Item = Job<S>>) {
        {
            let mut state = self.shared.lock_state();
            for job in jobs {
                state.assigned += 1;
                state.jobs.push_back(job);
            }
        }
        self.shared.dispatch.notify_all();
    }

    /// Block until the queue is empty and every assigned job has completed
    ///
    /// An empty queue alone is not enough: a job can still be mid-execution,
    /// so the completed count must also reach the assigned count. The lock
    /// handoff between the completing worker and this wait makes every
    /// finished job's writes visible to the caller.
    ///
    /// # Errors
    /// Returns [`PoolError::WorkerFailed`] if any job panicked since the
    /// pool was constructed.
    pub fn wait_for_drain(&self) -> Result<(), PoolError> {
        let mut state = self.shared.lock_state();
        loop {
            if state.failed {
                return Err(PoolError::WorkerFailed);
            }
            if state.jobs.is_empty() && state.completed == state.assigned {
                return Ok(());
            }
            state = self
                .shared
                .drained
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Drain outstanding work, then terminate and join the workers
    ///
    /// Consumes the pool; no jobs can be queued afterwards.
    ///
    /// # Errors
    /// Returns [`PoolError::WorkerFailed`] if any job panicked.
    pub fn shutdown(mut self) -> Result<(), PoolError> {
        let result = self.wait_for_drain();
        self.terminate_and_join();
        result
    }

    fn terminate_and_join(&mut self) {
        {
            let mut state = self.shared.lock_state();
            state.terminate = true;
        }
        self.shared.dispatch.notify_all();
        for handle in self.workers.drain(..) {
            // a worker that panicked already recorded the failure
            let _ = handle.join();
        }
    }
}

impl<S> Drop for WorkerPool<S> {
    fn drop(&mut self) {
        if self.workers.is_empty() {
            return; // shutdown() already ran
        }
        let _ = self.wait_for_drain();
        self.terminate_and_join();
    }
}

/// Marks the pool failed if dropped while a job is unwinding
struct FailGuard<'a, S> {
    shared: &'a Shared<S>,
    armed: bool,
}

impl<S> Drop for FailGuard<'_, S> {
    fn drop(&mut self) {
        if self.armed {
            self.shared.lock_state().failed = true;
            self.shared.drained.notify_all();
        }
    }
}

fn worker_loop<S>(shared: &Shared<S>, index: usize) {
    loop {
        let job = {
            let mut state = shared.lock_state();
            loop {
                if state.terminate {
                    return;
                }
                if let Some(job) = state.jobs.pop_front() {
                    break job;
                }
                state = shared
                    .dispatch
                    .wait(state)
                    .unwrap_or_else(PoisonError::into_inner);
            }
        };

        let mut guard = FailGuard {
            shared,
            armed: true,
        };
        {
            let mut scratch = shared.scratch[index]
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            job(&mut scratch);
        }
        guard.armed = false;

        let mut state = shared.lock_state();
        state.completed += 1;
        if state.jobs.is_empty() && state.completed == state.assigned {
            shared.drained.notify_all();
        }
    }
}
