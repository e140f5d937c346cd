//! The word-level rhyme relation.
//!
//! Two words rhyme when any pronunciation of one shares a rime with any
//! pronunciation of the other, unless one word is a tail of the other.
//! The tail filter throws out pairs like "glitter"/"litter" or
//! "other"/"mother" that technically rhyme but read as the same word
//! stretched or clipped. It also rejects a word paired with itself.

use std::collections::HashSet;

use crate::lexicon::Lexicon;
use crate::pronounce::{pronunciations_rhyme, rime};

/// All lexicon words sharing a rime with any pronunciation of `word`.
///
/// The word itself is included when it is in the lexicon. Out-of-vocabulary
/// words produce an empty set. Pronunciations without a vowel are skipped
/// with a debug log on the query side and ignored on the candidate side.
pub fn rhymes_of(word: &str, lexicon: &Lexicon) -> HashSet<String> {
    let mut rhymes = HashSet::new();
    let prons = match lexicon.lookup(word) {
        Some(p) => p,
        None => return rhymes,
    };
    for pron in prons {
        if let Err(e) = rime(pron) {
            log::debug!("Ignoring pronunciation of {:?}: {}", word, e);
            continue;
        }
        for (other, other_prons) in lexicon.iter() {
            if rhymes.contains(other) {
                continue;
            }
            if other_prons.iter().any(|op| pronunciations_rhyme(pron, op)) {
                rhymes.insert(other.to_string());
            }
        }
    }
    rhymes
}

/// True when one lowercased word ends with the other.
///
/// A word is a tail of itself, so equal words are affix pairs.
fn is_affix_pair(a: &str, b: &str) -> bool {
    a.ends_with(b) || b.ends_with(a)
}

/// Whether two words rhyme, case-insensitive.
///
/// Affix pairs never rhyme regardless of pronunciation. Words missing from
/// the lexicon rhyme with nothing.
pub fn do_they_rhyme(word1: &str, word2: &str, lexicon: &Lexicon) -> bool {
    let w1 = word1.to_lowercase();
    let w2 = word2.to_lowercase();
    if is_affix_pair(&w1, &w2) {
        return false;
    }
    rhymes_of(&w2, lexicon).contains(&w1)
}
