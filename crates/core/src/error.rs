//! Error taxonomy for rhyme partitioning and poem composition.
//!
//! Data-quality problems (`NoVowelFound`, `MalformedSentence`) are recovered
//! close to where they occur by skipping the offending item; structural
//! failures (`LexiconUnavailable`, `InsufficientMaterial`) surface to the
//! caller, which reports and halts.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The external pronunciation dictionary could not be loaded.
    #[error("pronunciation lexicon unavailable at {}: {source}", path.display())]
    LexiconUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A pronunciation with no vowel token (no stress digit anywhere).
    /// Every real word has a vowel, so this flags corrupt lexicon data.
    #[error("no vowel in pronunciation [{phones}]")]
    NoVowelFound { phones: String },

    /// A sentence with no extractable final word (empty line, bare dots).
    #[error("no final word in sentence {sentence:?}")]
    MalformedSentence { sentence: String },

    /// Fewer than two usable rhyme groups; an ABAB stanza needs two.
    #[error("not enough rhyme material: {usable} usable group(s), need 2")]
    InsufficientMaterial { usable: usize },
}
