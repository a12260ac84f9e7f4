use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{NlpError, Result};
use crate::Language;

/// Word-level translation, used only as the lexicon-miss fallback.
///
/// `Ok(None)` means the service has no answer for this word or language
/// pair; callers treat that the same as a dictionary miss.
pub trait Translate: Send + Sync {
    fn translate(&self, word: &str, from: Language, to: Language) -> Result<Option<String>>;
}

/// Translator backed by a `word<TAB>translation` table for one language
/// pair. Requests for any other pair answer `None`.
pub struct DictionaryTranslator {
    entries: HashMap<String, String>,
    from: Language,
    to: Language,
}

impl DictionaryTranslator {
    pub fn load(path: impl AsRef<Path>, from: Language, to: Language) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            NlpError::Translation(format!(
                "cannot read translation table {}: {}",
                path.display(),
                err
            ))
        })?;

        let mut entries = HashMap::new();
        for (idx, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (word, translation) = line.split_once('\t').ok_or_else(|| {
                NlpError::Translation(format!(
                    "malformed line {} in translation table {}",
                    idx + 1,
                    path.display()
                ))
            })?;
            entries.insert(word.trim().to_lowercase(), translation.trim().to_lowercase());
        }

        tracing::debug!(
            "Loaded {} translations ({} -> {}) from {}",
            entries.len(),
            from,
            to,
            path.display()
        );
        Ok(Self { entries, from, to })
    }

    pub fn from_entries<I, S, T>(entries: I, from: Language, to: Language) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(word, translation)| {
                (word.into().to_lowercase(), translation.into().to_lowercase())
            })
            .collect();
        Self { entries, from, to }
    }
}

impl Translate for DictionaryTranslator {
    fn translate(&self, word: &str, from: Language, to: Language) -> Result<Option<String>> {
        if (from, to) != (self.from, self.to) {
            return Ok(None);
        }
        Ok(self.entries.get(&word.to_lowercase()).cloned())
    }
}

/// Disables the fallback entirely; every lookup miss stays neutral.
pub struct NoTranslation;

impl Translate for NoTranslation {
    fn translate(&self, _word: &str, _from: Language, _to: Language) -> Result<Option<String>> {
        Ok(None)
    }
}
