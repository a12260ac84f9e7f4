// Tokenization, lemmatization and translation seams for the scoring core.
//
// The engine itself never touches raw text or external services directly;
// it goes through the traits defined here, which makes every collaborator
// replaceable by an in-memory double in tests.

use std::fmt;

pub mod error;
pub mod lemmatize;
pub mod tokenize;
pub mod translate;

pub use error::{NlpError, Result};
pub use lemmatize::{DictionaryLemmatizer, IdentityLemmatizer, Lemmatize};
pub use tokenize::{SimpleTokenizer, Tokenize};
pub use translate::{DictionaryTranslator, NoTranslation, Translate};

/// Language tag for lexicons and the translation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    German,
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::German => "de",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
