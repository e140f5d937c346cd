//! Composing an ABAB quatrain from rhyme groups.
//!
//! Two viable groups are drawn without replacement, one rhyme-pair is drawn
//! from each, and the pairs interleave as lines A B A B. A pair must end on
//! two different words so a line never rhymes with itself. Pair drawing
//! retries a bounded number of times and then falls back to the first
//! distinct-ending pair in group order, so composition cannot spin on an
//! unlucky sequence of draws.

use rand::seq::SliceRandom;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::{Error, Result};
use crate::sentence::final_word;
use crate::types::{Poem, RhymeGroup};

/// Random pair draws attempted per group before taking the fallback pair.
const MAX_PAIR_DRAWS: usize = 16;

/// True when both sentences have final words and they differ, case-folded.
fn endings_differ(a: &str, b: &str) -> bool {
    match (final_word(a), final_word(b)) {
        (Ok(wa), Ok(wb)) => wa.to_lowercase() != wb.to_lowercase(),
        _ => false,
    }
}

/// First pair of members with distinct final words, scanning in group order.
///
/// `None` means the group cannot supply a usable pair at all, however many
/// sentences it holds.
fn first_distinct_pair(group: &RhymeGroup) -> Option<(usize, usize)> {
    for i in 0..group.sentences.len() {
        for j in (i + 1)..group.sentences.len() {
            if endings_differ(&group.sentences[i], &group.sentences[j]) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Draw two distinct-ending members from a viable group.
///
/// `fallback` must index a distinct-ending pair of the same group; it is
/// taken verbatim when every random draw lands on a same-ending pair.
fn draw_pair<'a, R: Rng>(
    group: &'a RhymeGroup,
    fallback: (usize, usize),
    rng: &mut R,
) -> (&'a str, &'a str) {
    for _ in 0..MAX_PAIR_DRAWS {
        let picks: Vec<&String> = group.sentences.choose_multiple(rng, 2).collect();
        if let [a, b] = picks.as_slice() {
            if endings_differ(a, b) {
                return (a, b);
            }
        }
    }
    log::debug!("Pair draws exhausted, using first distinct-ending pair");
    (&group.sentences[fallback.0], &group.sentences[fallback.1])
}

/// Compose a quatrain using the given generator.
///
/// Groups whose members all share one final word are passed over. Fewer
/// than two usable groups is an error reporting how many there were.
pub fn compose_with_rng<R: Rng>(groups: &[RhymeGroup], rng: &mut R) -> Result<Poem> {
    let viable: Vec<(&RhymeGroup, (usize, usize))> = groups
        .iter()
        .filter_map(|g| first_distinct_pair(g).map(|pair| (g, pair)))
        .collect();
    if viable.len() < 2 {
        return Err(Error::InsufficientMaterial {
            usable: viable.len(),
        });
    }

    let picks: Vec<&(&RhymeGroup, (usize, usize))> = viable.choose_multiple(rng, 2).collect();
    let (group_a, fallback_a) = *picks[0];
    let (group_b, fallback_b) = *picks[1];

    let (a1, a2) = draw_pair(group_a, fallback_a, rng);
    let (b1, b2) = draw_pair(group_b, fallback_b, rng);

    Ok(Poem {
        lines: [
            a1.to_string(),
            b1.to_string(),
            a2.to_string(),
            b2.to_string(),
        ],
    })
}

/// Compose a quatrain, deterministic when a seed is provided.
pub fn compose(groups: &[RhymeGroup], seed: Option<u64>) -> Result<Poem> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    compose_with_rng(groups, &mut rng)
}
