//! Word list loading
//!
//! Corpora are external read-only inputs; the engine never owns or embeds
//! them. This module turns newline-delimited word-list files into corpora.

pub mod loader;
