//! The pronunciation lexicon, a CMU Pronouncing Dictionary loaded at run time.
//!
//! Format: one word per line, "WORD  PH1 PH2 PH3 ...".
//! Lines starting with ";;;" are comments, and an entry line may carry a
//! trailing "# ..." comment after the phones. Variant entries like "WORD(2)"
//! fold into the same word. Keys are lowercased so lookups are
//! case-insensitive.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::Pronunciation;

/// Environment variable naming the dictionary file, checked before the
/// default search locations.
pub const DICT_ENV_VAR: &str = "QUATRAIN_DICT";

/// Word-to-pronunciations mapping.
///
/// Every stored word has at least one pronunciation; `insert` drops empty
/// phone lists rather than create a hollow entry.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl Lexicon {
    pub fn new() -> Lexicon {
        Lexicon::default()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total pronunciation count across all words.
    pub fn pronunciation_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// All pronunciations of a word, case-insensitive. `None` for
    /// out-of-vocabulary words.
    pub fn lookup(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries.get(&word.to_lowercase()).map(|v| v.as_slice())
    }

    /// Iterate over `(word, pronunciations)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Pronunciation])> {
        self.entries.iter().map(|(w, ps)| (w.as_str(), ps.as_slice()))
    }

    /// Add a pronunciation for a word. Empty phone lists are ignored.
    pub fn insert(&mut self, word: &str, phones: Vec<String>) {
        if phones.is_empty() {
            return;
        }
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(Pronunciation::new(phones));
    }

    /// Restrict the lexicon to the given words, keeping every pronunciation
    /// variant of each. Words absent from the lexicon are silently omitted.
    pub fn project(&self, words: &HashSet<String>) -> Lexicon {
        let mut reduced = Lexicon::new();
        for word in words {
            let key = word.to_lowercase();
            if let Some(prons) = self.entries.get(&key) {
                reduced.entries.insert(key, prons.clone());
            }
        }
        reduced
    }

    /// Parse dictionary text. Malformed lines are skipped and counted, never
    /// fatal; I/O errors from the reader are.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Lexicon> {
        let mut lexicon = Lexicon::new();
        let mut skipped = 0usize;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            // Format: "WORD PH1 PH2 PH3" (first space separates word from phones)
            // Variants: "WORD(2) PH1 PH2 PH3"
            let parts: Vec<&str> = line.splitn(2, ' ').collect();
            if parts.len() != 2 {
                skipped += 1;
                continue;
            }

            let word_raw = parts[0];
            let mut phones_str = parts[1];

            // Strip trailing "# ..." comment; ARPABET tokens never contain '#'.
            if let Some(hash) = phones_str.find('#') {
                phones_str = &phones_str[..hash];
            }

            // Strip variant marker: WORD(2) -> WORD
            let word = word_raw.split('(').next().unwrap_or(word_raw);

            let phones: Vec<String> = phones_str
                .split_whitespace()
                .map(|s| s.to_string())
                .collect();

            if phones.is_empty() {
                skipped += 1;
                continue;
            }
            lexicon.insert(word, phones);
        }

        if skipped > 0 {
            log::debug!("Skipped {} malformed dictionary line(s)", skipped);
        }
        Ok(lexicon)
    }

    /// Load a dictionary file. Any failure, including a file that parses to
    /// zero entries, reports the path it came from.
    pub fn load(path: &Path) -> Result<Lexicon> {
        let file = File::open(path).map_err(|source| Error::LexiconUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon =
            Lexicon::from_reader(BufReader::new(file)).map_err(|source| Error::LexiconUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
        if lexicon.is_empty() {
            return Err(Error::LexiconUnavailable {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidData, "no entries parsed"),
            });
        }
        log::debug!(
            "Loaded {} words ({} pronunciations) from {}",
            lexicon.len(),
            lexicon.pronunciation_count(),
            path.display()
        );
        Ok(lexicon)
    }
}

/// Candidate dictionary locations in priority order.
///
/// `QUATRAIN_DICT` env var if set, then the working directory under both
/// common file names, then `~/.cache/quatrain`.
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(dir) = std::env::var(DICT_ENV_VAR) {
        paths.push(PathBuf::from(dir));
    }
    paths.push(PathBuf::from("cmudict.dict"));
    paths.push(PathBuf::from("cmudict-0.7b"));
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    paths.push(
        PathBuf::from(home)
            .join(".cache")
            .join("quatrain")
            .join("cmudict.dict"),
    );
    paths
}

/// Load the dictionary from an explicit path, or the first existing
/// candidate from [`search_paths`].
pub fn locate_and_load(explicit: Option<&Path>) -> Result<Lexicon> {
    if let Some(path) = explicit {
        return Lexicon::load(path);
    }
    let candidates = search_paths();
    for path in &candidates {
        if path.exists() {
            return Lexicon::load(path);
        }
    }
    let tried = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(Error::LexiconUnavailable {
        path: candidates
            .into_iter()
            .next()
            .unwrap_or_else(|| PathBuf::from("cmudict.dict")),
        source: io::Error::new(
            io::ErrorKind::NotFound,
            format!("no dictionary found (tried: {})", tried),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
;;; cmudict sample
cat  K AE1 T
hat  HH AE1 T

read  R EH1 D
read(2)  R IY1 D
splat  S P L AE1 T  # imitative
";

    #[test]
    fn test_from_reader_basic() {
        let lex = Lexicon::from_reader(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(lex.len(), 4);
        assert_eq!(lex.pronunciation_count(), 5);
        let cat = lex.lookup("cat").unwrap();
        assert_eq!(cat.len(), 1);
        assert_eq!(cat[0].phones, vec!["K", "AE1", "T"]);
    }

    #[test]
    fn test_from_reader_folds_variants() {
        let lex = Lexicon::from_reader(Cursor::new(SAMPLE)).unwrap();
        let read = lex.lookup("read").unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].phones, vec!["R", "EH1", "D"]);
        assert_eq!(read[1].phones, vec!["R", "IY1", "D"]);
    }

    #[test]
    fn test_from_reader_strips_trailing_comment() {
        let lex = Lexicon::from_reader(Cursor::new(SAMPLE)).unwrap();
        let splat = lex.lookup("splat").unwrap();
        assert_eq!(splat[0].phones, vec!["S", "P", "L", "AE1", "T"]);
    }

    #[test]
    fn test_from_reader_uppercase_entries() {
        // cmudict-0.7b style: uppercase words, double-space separator.
        let text = "CAT  K AE1 T\nCAT(2)  K AE2 T\n";
        let lex = Lexicon::from_reader(Cursor::new(text)).unwrap();
        assert_eq!(lex.len(), 1);
        assert_eq!(lex.lookup("cat").unwrap().len(), 2);
    }

    #[test]
    fn test_from_reader_skips_malformed() {
        let text = "cat  K AE1 T\nloneword\nhat  HH AE1 T\n";
        let lex = Lexicon::from_reader(Cursor::new(text)).unwrap();
        assert_eq!(lex.len(), 2);
        assert!(lex.lookup("loneword").is_none());
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let lex = Lexicon::from_reader(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(lex.lookup("CAT"), lex.lookup("cat"));
        assert_eq!(lex.lookup("Cat"), lex.lookup("cat"));
        assert!(lex.lookup("dog").is_none());
    }

    #[test]
    fn test_insert_ignores_empty_phones() {
        let mut lex = Lexicon::new();
        lex.insert("ghost", vec![]);
        assert!(lex.is_empty());
        assert!(lex.lookup("ghost").is_none());
    }

    #[test]
    fn test_project_subset() {
        let lex = Lexicon::from_reader(Cursor::new(SAMPLE)).unwrap();
        let mut wanted = HashSet::new();
        wanted.insert("Cat".to_string());
        wanted.insert("read".to_string());
        wanted.insert("missing".to_string());

        let reduced = lex.project(&wanted);
        assert_eq!(reduced.len(), 2);
        assert_eq!(reduced.lookup("cat").unwrap().len(), 1);
        assert_eq!(reduced.lookup("read").unwrap().len(), 2);
        assert!(reduced.lookup("hat").is_none());
    }

    #[test]
    fn test_project_empty_word_set() {
        let lex = Lexicon::from_reader(Cursor::new(SAMPLE)).unwrap();
        let reduced = lex.project(&HashSet::new());
        assert!(reduced.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Lexicon::load(Path::new("/nonexistent/cmudict.dict")).unwrap_err();
        match err {
            Error::LexiconUnavailable { path, source } => {
                assert_eq!(path, PathBuf::from("/nonexistent/cmudict.dict"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_empty_file() {
        let dir = std::env::temp_dir().join(format!("quatrain_lex_empty_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("empty.dict");
        std::fs::write(&path, ";;; nothing but comments\n\n").unwrap();

        let err = Lexicon::load(&path).unwrap_err();
        match err {
            Error::LexiconUnavailable { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            }
            other => panic!("unexpected error: {other}"),
        }

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_round_trip() {
        let dir = std::env::temp_dir().join(format!("quatrain_lex_load_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sample.dict");
        std::fs::write(&path, SAMPLE).unwrap();

        let lex = Lexicon::load(&path).unwrap();
        assert_eq!(lex.len(), 4);

        std::fs::remove_dir_all(&dir).ok();
    }
}
