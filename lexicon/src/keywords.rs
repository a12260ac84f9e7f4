use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{LexiconError, Result};

/// Keywords of interest as read from the tab-separated input file, in file
/// order. This is the raw surface form: callers expand hashtag variants and
/// lemmatize the combined list before building the [`KeywordSet`] the
/// scoring pipeline matches against.
#[derive(Debug, Clone, Default)]
pub struct Keywords {
    words: Vec<String>,
}

impl Keywords {
    /// Loads keywords from a file with tab-separated words per line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let words: Vec<String> = raw
            .lines()
            .flat_map(|line| line.split('\t'))
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();

        tracing::debug!("Loaded {} keywords from {}", words.len(), path.display());
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

    /// Returns the keywords followed by a `#`-prefixed variant of each, so
    /// hashtag mentions of a keyword anchor windows as well.
    pub fn with_hashtag_variants(&self) -> Self {
        let mut words = self.words.clone();
        words.extend(self.words.iter().map(|word| format!("#{}", word)));
        Self { words }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.words.clone()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Lemmatized keyword set the pipeline tests membership against.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    lemmas: HashSet<String>,
}

impl KeywordSet {
    pub fn from_lemmas<I, S>(lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lemmas: lemmas.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.lemmas.contains(lemma)
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}
