use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{LexiconError, Result};

/// Stopword list applied before window extraction.
///
/// Membership is an exact, case-sensitive test: entries are used as they
/// appear in the resource file, which also carries artifacts that clean up
/// the output of the preprocessing tools.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Loads a newline-separated word list.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let words: HashSet<String> = raw
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect();

        tracing::debug!("Loaded {} stopwords from {}", words.len(), path.display());
        Ok(Self { words })
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
