//! Sentence handling: final words and sentence-list input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// The last whitespace-delimited word of a sentence, with leading and
/// trailing periods removed.
///
/// Errors when nothing remains, which covers empty input, whitespace-only
/// lines, and a final token that is all periods.
pub fn final_word(sentence: &str) -> Result<String> {
    let word = sentence
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_matches('.');
    if word.is_empty() {
        return Err(Error::MalformedSentence {
            sentence: sentence.to_string(),
        });
    }
    Ok(word.to_string())
}

/// Read a sentence list, one sentence per line.
///
/// Lines come back verbatim apart from the terminator. Blank lines are kept
/// here and rejected downstream as malformed.
pub fn read_sentences(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_word_basic() {
        assert_eq!(final_word("The cat sat on the mat.").unwrap(), "mat");
    }

    #[test]
    fn test_final_word_no_period() {
        assert_eq!(final_word("hello there").unwrap(), "there");
    }

    #[test]
    fn test_final_word_single_word() {
        assert_eq!(final_word("Go.").unwrap(), "Go");
    }

    #[test]
    fn test_final_word_ellipsis() {
        assert_eq!(final_word("And then she waited...").unwrap(), "waited");
    }

    #[test]
    fn test_final_word_keeps_other_punctuation() {
        // Only periods are stripped.
        assert_eq!(final_word("Did it work?").unwrap(), "work?");
    }

    #[test]
    fn test_final_word_trailing_whitespace() {
        assert_eq!(final_word("the end. \t ").unwrap(), "end");
    }

    #[test]
    fn test_final_word_preserves_case() {
        assert_eq!(final_word("She met Rob.").unwrap(), "Rob");
    }

    #[test]
    fn test_final_word_empty_is_malformed() {
        assert!(matches!(
            final_word("").unwrap_err(),
            Error::MalformedSentence { .. }
        ));
        assert!(matches!(
            final_word("   ").unwrap_err(),
            Error::MalformedSentence { .. }
        ));
    }

    #[test]
    fn test_final_word_only_periods_is_malformed() {
        let err = final_word("...").unwrap_err();
        match err {
            Error::MalformedSentence { sentence } => assert_eq!(sentence, "..."),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_sentences() {
        let dir = std::env::temp_dir().join(format!("quatrain_sentences_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("lines.txt");
        std::fs::write(&path, "A stitch in time saves nine.\n\nOut of sight, out of mind.\n")
            .unwrap();

        let sentences = read_sentences(&path).unwrap();
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "A stitch in time saves nine.");
        assert_eq!(sentences[1], "");
        assert_eq!(sentences[2], "Out of sight, out of mind.");

        std::fs::remove_dir_all(&dir).ok();
    }
}
