//! Core library for quatrain: rhyme detection and poem composition.
//!
//! The pipeline reads a sentence list, looks up each sentence's final word
//! in a CMU Pronouncing Dictionary, partitions the sentences into groups
//! with rhyming endings, and composes a four-line ABAB poem from two of
//! the groups.

pub mod compose;
pub mod error;
pub mod lexicon;
pub mod partition;
pub mod pronounce;
pub mod rhyme;
pub mod sentence;
pub mod types;

pub use error::{Error, Result};
