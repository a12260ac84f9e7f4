use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{LexiconError, Result};

/// Sentiment dictionary mapping lowercase words to polarity scores in
/// roughly [-1, 1].
///
/// Lookups are total: a word the dictionary does not know scores `0.0`
/// (neutral), so scoring code never branches on dictionary coverage.
/// Built once at startup, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    /// Loads a lexicon from a tab-separated resource file with one
    /// `word<TAB>score` entry per line. A missing file or a malformed
    /// line fails construction.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = HashMap::new();
        for (idx, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (word, score) = line.split_once('\t').ok_or_else(|| LexiconError::Malformed {
                path: path.to_path_buf(),
                line: idx + 1,
                reason: "expected word<TAB>score".to_string(),
            })?;
            let score: f64 = score.trim().parse().map_err(|_| LexiconError::Malformed {
                path: path.to_path_buf(),
                line: idx + 1,
                reason: format!("invalid score '{}'", score),
            })?;
            entries.insert(word.trim().to_lowercase(), score);
        }

        tracing::debug!("Loaded {} lexicon entries from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    /// Builds a lexicon from in-memory entries; keys are lowercased.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(word, score)| (word.into().to_lowercase(), score))
            .collect();
        Self { entries }
    }

    /// Returns the stored polarity for `word` (compared case-insensitively),
    /// or `0.0` when the word is absent.
    pub fn lookup(&self, word: &str) -> f64 {
        self.entries.get(&word.to_lowercase()).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_total() {
        let lexicon = Lexicon::from_entries([("gut", 0.8), ("schlecht", -0.8)]);

        assert_eq!(lexicon.lookup("gut"), 0.8);
        assert_eq!(lexicon.lookup("schlecht"), -0.8);
        assert_eq!(lexicon.lookup("unbekannt"), 0.0);
        assert_eq!(lexicon.lookup(""), 0.0);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lexicon = Lexicon::from_entries([("GUT", 0.8)]);

        assert_eq!(lexicon.lookup("gut"), 0.8);
        assert_eq!(lexicon.lookup("Gut"), 0.8);
        assert_eq!(lexicon.lookup("GUT"), 0.8);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.tsv");
        std::fs::write(&path, "gut\t0.8\nschlecht\t-0.8\n\ntoll\t0.7\n").unwrap();

        let lexicon = Lexicon::load(&path).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.lookup("toll"), 0.7);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Lexicon::load("does/not/exist.tsv");
        assert!(matches!(result, Err(LexiconError::Io { .. })));
    }

    #[test]
    fn test_load_malformed_line_fails() {
        let dir = tempfile::tempdir().unwrap();

        let no_tab = dir.path().join("no_tab.tsv");
        std::fs::write(&no_tab, "gut 0.8\n").unwrap();
        assert!(matches!(Lexicon::load(&no_tab), Err(LexiconError::Malformed { line: 1, .. })));

        let bad_score = dir.path().join("bad_score.tsv");
        std::fs::write(&bad_score, "gut\t0.8\nschlecht\tnope\n").unwrap();
        assert!(matches!(
            Lexicon::load(&bad_score),
            Err(LexiconError::Malformed { line: 2, .. })
        ));
    }
}
