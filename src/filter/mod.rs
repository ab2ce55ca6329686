//! Filtering engine over both corpus layouts
//!
//! [`kernels`] holds the leaf byte-comparison predicates, [`row`] the scalar
//! path over a [`crate::corpus::Corpus`], and [`batched`] the data-parallel
//! path over a [`crate::corpus::PackedCorpus`]. The two paths agree exactly
//! on every corpus and constraint.

pub mod batched;
pub mod kernels;
pub mod row;
