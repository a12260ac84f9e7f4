use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{NlpError, Result};

/// Maps tokens to canonical dictionary forms.
///
/// The output has the same length and order as the input.
pub trait Lemmatize: Send + Sync {
    fn lemmatize(&self, tokens: &[String]) -> Result<Vec<String>>;
}

/// Lemmatizer backed by a `form<TAB>lemma` lookup table loaded at startup.
///
/// A trained morphological model sits behind the same trait in production
/// setups; the table keeps the contract runnable and testable offline.
/// Unknown forms pass through lower-cased, and a leading `#` marker
/// survives lemmatization so hashtag keywords stay aligned with their
/// plain variants.
pub struct DictionaryLemmatizer {
    forms: HashMap<String, String>,
}

impl DictionaryLemmatizer {
    /// Loads the lemma table. A missing or malformed model file is a
    /// construction-time error.
    pub fn load(model_path: impl AsRef<Path>) -> Result<Self> {
        let path = model_path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            NlpError::ModelLoad(format!("cannot read lemma model {}: {}", path.display(), err))
        })?;

        let mut forms = HashMap::new();
        for (idx, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (form, lemma) = line.split_once('\t').ok_or_else(|| {
                NlpError::ModelLoad(format!(
                    "malformed line {} in lemma model {}",
                    idx + 1,
                    path.display()
                ))
            })?;
            forms.insert(form.trim().to_lowercase(), lemma.trim().to_lowercase());
        }

        tracing::info!("Loaded lemma model with {} forms from {}", forms.len(), path.display());
        Ok(Self { forms })
    }

    pub fn from_entries<I, S, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let forms = entries
            .into_iter()
            .map(|(form, lemma)| (form.into().to_lowercase(), lemma.into().to_lowercase()))
            .collect();
        Self { forms }
    }

    fn lemma_of(&self, token: &str) -> String {
        let lower = token.to_lowercase();
        if let Some(rest) = lower.strip_prefix('#') {
            let lemma = self.forms.get(rest).map(String::as_str).unwrap_or(rest);
            return format!("#{}", lemma);
        }
        self.forms.get(&lower).cloned().unwrap_or(lower)
    }
}

impl Lemmatize for DictionaryLemmatizer {
    fn lemmatize(&self, tokens: &[String]) -> Result<Vec<String>> {
        Ok(tokens.iter().map(|token| self.lemma_of(token)).collect())
    }
}

/// Passes tokens through lower-cased, for input that is already canonical.
pub struct IdentityLemmatizer;

impl Lemmatize for IdentityLemmatizer {
    fn lemmatize(&self, tokens: &[String]) -> Result<Vec<String>> {
        Ok(tokens.iter().map(|token| token.to_lowercase()).collect())
    }
}
