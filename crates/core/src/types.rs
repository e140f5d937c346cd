use std::fmt;

use serde::{Deserialize, Serialize};

/// One way to say a word: an ordered sequence of phonetic tokens.
///
/// Tokens follow the CMU Pronouncing Dictionary's ARPABET convention, where
/// vowel phones carry a stress digit (e.g. "AE1"). A pronunciation is
/// immutable once it leaves the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub phones: Vec<String>,
}

impl Pronunciation {
    pub fn new(phones: Vec<String>) -> Self {
        Self { phones }
    }

    /// Space-joined phones, for logs and error messages.
    pub fn to_label(&self) -> String {
        self.phones.join(" ")
    }
}

/// Sentences whose final words mutually rhyme.
///
/// Groups surfaced by the partitioner always hold at least two sentences.
/// Member order follows the input order and carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeGroup {
    pub sentences: Vec<String>,
}

impl RhymeGroup {
    /// Number of sentences in the group.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A four-line stanza in ABAB order: lines 1/3 rhyme, lines 2/4 rhyme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poem {
    pub lines: [String; 4],
}

impl fmt::Display for Poem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pronunciation_label() {
        let p = Pronunciation::new(vec!["K".into(), "AE1".into(), "T".into()]);
        assert_eq!(p.to_label(), "K AE1 T");
    }

    #[test]
    fn test_pronunciation_serde_roundtrip() {
        let p = Pronunciation::new(vec!["HH".into(), "AE1".into(), "T".into()]);
        let json = serde_json::to_string(&p).unwrap();
        let p2: Pronunciation = serde_json::from_str(&json).unwrap();
        assert_eq!(p, p2);
    }

    #[test]
    fn test_rhyme_group_len() {
        let g = RhymeGroup {
            sentences: vec!["The cat sat.".into(), "A hat fell.".into()],
        };
        assert_eq!(g.len(), 2);
        assert!(!g.is_empty());
    }

    #[test]
    fn test_poem_display_four_lines() {
        let poem = Poem {
            lines: [
                "a one.".into(),
                "b one.".into(),
                "a two.".into(),
                "b two.".into(),
            ],
        };
        let text = poem.to_string();
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.lines().next(), Some("a one."));
    }

    #[test]
    fn test_poem_serde_roundtrip() {
        let poem = Poem {
            lines: ["w.".into(), "x.".into(), "y.".into(), "z.".into()],
        };
        let json = serde_json::to_string(&poem).unwrap();
        let poem2: Poem = serde_json::from_str(&json).unwrap();
        assert_eq!(poem, poem2);
    }
}
