//! Pronunciation matching: the first-vowel rime rule.
//!
//! A token counts as a vowel when it carries a numeric stress marker, the
//! CMU dictionary convention. The rime of a pronunciation runs from its
//! first vowel token to the end, and two pronunciations rhyme when their
//! rimes are identical token sequences, stress digits included. The anchor
//! is the first vowel, not the last stressed one, so multi-syllable words
//! rhyme only when everything from the first vowel onward matches.

use crate::error::{Error, Result};
use crate::types::Pronunciation;

/// True if a phonetic token is a vowel (contains a stress digit).
pub fn is_vowel(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit())
}

/// Index of the first vowel token in a pronunciation.
///
/// `NoVowelFound` means the lexicon handed us a transcription without a
/// single vowel, which no real word has; callers inside the rhyme relation
/// skip the offending pronunciation instead of propagating.
pub fn first_vowel_index(pron: &Pronunciation) -> Result<usize> {
    pron.phones
        .iter()
        .position(|p| is_vowel(p))
        .ok_or_else(|| Error::NoVowelFound {
            phones: pron.to_label(),
        })
}

/// The rime: tokens from the first vowel to the end, inclusive.
pub fn rime(pron: &Pronunciation) -> Result<&[String]> {
    let start = first_vowel_index(pron)?;
    Ok(&pron.phones[start..])
}

/// True iff both pronunciations have a rime and the rimes match exactly.
///
/// Vowel-less pronunciations never rhyme with anything; the error is
/// absorbed here so one corrupt lexicon entry cannot abort a whole scan.
pub fn pronunciations_rhyme(a: &Pronunciation, b: &Pronunciation) -> bool {
    match (rime(a), rime(b)) {
        (Ok(ra), Ok(rb)) => ra == rb,
        _ => false,
    }
}
