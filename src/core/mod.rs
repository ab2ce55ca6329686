//! Core domain types: words and constraints

mod constraint;
mod word;

pub use constraint::{Constraint, ConstraintError};
pub use word::{Word, WordError};
