//! Wordle guess ranker
//!
//! Computes, for a fixed 5-letter puzzle, the set of still-possible solution
//! words under an accumulated letter-position constraint, and ranks candidate
//! guesses by the expected number of solutions remaining after each guess
//! (lower is better). The expensive guess x candidate scoring pass runs on a
//! fixed-size worker pool, each worker scanning its own packed column-major
//! copy of the candidate corpus.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_rank::core::Constraint;
//! use wordle_rank::corpus::Corpus;
//! use wordle_rank::solver::{EngineConfig, compute_best_guesses};
//!
//! let corpus = Corpus::from_strs(&["apple", "grape", "mango"]).unwrap();
//! let ranked = compute_best_guesses(
//!     &Constraint::default(),
//!     &corpus,
//!     &corpus,
//!     3,
//!     &EngineConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(ranked.len(), 3);
//! ```

// Core domain types
pub mod core;

// Corpus layouts
pub mod corpus;

// Filtering engine
pub mod filter;

// Worker-thread pool
pub mod pool;

// Scoring and selection
pub mod solver;

// Word lists
pub mod wordlists;

// Terminal output formatting
pub mod output;
