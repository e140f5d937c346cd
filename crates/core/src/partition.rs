//! Partitioning sentences into rhyme groups.
//!
//! Greedy, seed-based, and deterministic: sentences are scanned in input
//! order, each unassigned sentence opens a group, and every later
//! unassigned sentence whose final word rhymes with the seed's final word
//! joins it. Membership is judged against the seed, not between members,
//! so a group holds everything the seed reaches even when the seed's word
//! has several pronunciations. Groups that stay singletons are discarded.

use std::collections::HashSet;

use crate::lexicon::Lexicon;
use crate::rhyme::do_they_rhyme;
use crate::sentence::final_word;
use crate::types::RhymeGroup;

/// Group sentences by rhyming final words.
///
/// Sentences without a usable final word are skipped with a warning.
/// Never fails; too little material simply yields fewer (or zero) groups.
pub fn partition(sentences: &[String], lexicon: &Lexicon) -> Vec<RhymeGroup> {
    let mut pool: Vec<(&String, String)> = Vec::new();
    for sentence in sentences {
        match final_word(sentence) {
            Ok(word) => pool.push((sentence, word)),
            Err(e) => log::warn!("Skipping sentence: {}", e),
        }
    }

    // Scans run against just the final words, not the whole dictionary.
    let words: HashSet<String> = pool.iter().map(|(_, w)| w.to_lowercase()).collect();
    let reduced = lexicon.project(&words);
    log::debug!(
        "{} of {} distinct final words have pronunciations",
        reduced.len(),
        words.len()
    );

    let mut groups = Vec::new();
    let mut assigned = vec![false; pool.len()];
    for i in 0..pool.len() {
        if assigned[i] {
            continue;
        }
        assigned[i] = true;
        let mut members = vec![pool[i].0.clone()];
        for j in (i + 1)..pool.len() {
            if assigned[j] {
                continue;
            }
            if do_they_rhyme(&pool[i].1, &pool[j].1, &reduced) {
                assigned[j] = true;
                members.push(pool[j].0.clone());
            }
        }
        if members.len() >= 2 {
            groups.push(RhymeGroup { sentences: members });
        }
    }

    log::debug!(
        "Partitioned {} sentence(s) into {} rhyme group(s)",
        sentences.len(),
        groups.len()
    );
    groups
}
